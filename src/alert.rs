//! Alert system for displaying success and error messages to users.
//!
//! Alerts are returned as HTML fragments that htmx swaps into the page's
//! alert container.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// A dismissable message shown at the bottom of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// An error with a headline and an explanation of how to fix it.
    Error {
        /// The headline.
        message: String,
        /// Extra detail shown under the headline.
        details: String,
    },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let Alert::Error { message, details } = self;

        html! {
            div
                role="alert"
                class="flex items-start gap-3 p-4 mb-4 text-sm rounded-lg border \
                    text-red-800 bg-red-50 border-red-300 \
                    dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
            {
                div class="flex-1"
                {
                    p class="font-semibold" { (message) }

                    @if !details.is_empty() {
                        p class="mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    onclick="this.closest('[role=alert]').remove()"
                    class="font-bold"
                {
                    "×"
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        Html(self.into_html().into_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use scraper::Selector;

    use crate::{
        Error,
        test_utils::{assert_valid_html, parse_html_fragment},
    };

    use super::Alert;

    #[tokio::test]
    async fn renders_message_and_details() {
        let response = Alert::Error {
            message: "Oh no".to_owned(),
            details: "Try again".to_owned(),
        }
        .into_response();

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let text = html
            .select(&Selector::parse("[role=alert]").unwrap())
            .next()
            .expect("No alert found")
            .text()
            .collect::<String>();
        assert!(text.contains("Oh no"), "alert text {text:?} missing message");
        assert!(text.contains("Try again"), "alert text {text:?} missing details");
    }

    #[tokio::test]
    async fn validation_errors_are_bad_requests() {
        let cases = [
            Error::InvalidAmount("abc".to_owned()),
            Error::EmptyDescription,
            Error::EmptyCategoryName,
            Error::UnknownCategory("rent".to_owned()),
        ];

        for error in cases {
            let response = error.into_alert_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn lock_error_is_internal_server_error() {
        let response = Error::LedgerLockError.into_alert_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
