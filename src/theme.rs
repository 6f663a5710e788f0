//! The light/dark display theme stored alongside the ledger.

use rusqlite::Connection;

use crate::{
    Error,
    storage::{DARK_MODE_KEY, get_json, set_json},
};

/// The display theme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// The theme matching the stored dark mode flag.
    pub fn from_dark_mode(is_dark_mode: bool) -> Self {
        if is_dark_mode { Theme::Dark } else { Theme::Light }
    }

    /// Whether this is the dark theme.
    pub fn is_dark_mode(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The colour used for chart legend text so that it stays readable on the page background.
    pub fn legend_text_color(self) -> &'static str {
        match self {
            Theme::Light => "#1f2937",
            Theme::Dark => "#f3f4f6",
        }
    }
}

/// Read the theme from storage.
///
/// Only a stored `true` selects [Theme::Dark]. A missing flag or any other
/// stored value gives [Theme::Light].
pub fn load_theme(connection: &Connection) -> Result<Theme, Error> {
    let is_dark_mode = match get_json::<bool>(DARK_MODE_KEY, connection) {
        Ok(flag) => flag.unwrap_or(false),
        Err(Error::CorruptStorage { reason, .. }) => {
            tracing::warn!("Ignoring stored dark mode flag that is not a boolean: {reason}");
            false
        }
        Err(error) => return Err(error),
    };

    Ok(Theme::from_dark_mode(is_dark_mode))
}

/// Persist `theme` as the dark mode flag.
pub fn save_theme(theme: Theme, connection: &Connection) -> Result<(), Error> {
    set_json(DARK_MODE_KEY, &theme.is_dark_mode(), connection)
}
