#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;

pub(crate) use form::{
    assert_form_input, assert_form_input_with_value, assert_form_submit_button_with_text,
    assert_hx_endpoint, checked_radio_value, must_get_form, selected_option_value,
};
pub(crate) use html::{
    assert_valid_html, count_matches, must_select, parse_html_document, parse_html_fragment,
    text_of,
};
