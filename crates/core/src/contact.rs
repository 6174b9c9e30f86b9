//! What a "Claim" / "Contact" button does.
//!
//! Logged-in students get a `mailto:` link with a prefilled inquiry; guests
//! get a prompt offering the login page.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::session::{logged_in_id, LOGIN_PAGE};

/// Mailbox that receives item inquiries.
pub const INQUIRY_ADDRESS: &str = "student@taylors.edu.my";

pub const INQUIRY_SUBJECT: &str = "Inquiry regarding Lost/Found Item";

pub const INQUIRY_BODY: &str =
    "Hello, I am interested in the item you posted on Taylor's Lost & Found.";

pub const LOGIN_REQUIRED_PROMPT: &str =
    "You must be logged in to contact the reporter. Go to Login page?";

/// Characters escaped in a URI component: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ContactAction {
    /// Open the mail client at `href`.
    #[serde(rename_all = "camelCase")]
    Mailto { href: String },
    /// Ask the guest to log in; on confirm, navigate to `login_page`.
    #[serde(rename_all = "camelCase")]
    LoginPrompt {
        message: &'static str,
        login_page: &'static str,
    },
}

/// Decide the button's effect for the current visitor.
pub fn contact_action(student_id: Option<&str>) -> ContactAction {
    match logged_in_id(student_id) {
        Some(_) => ContactAction::Mailto {
            href: inquiry_mailto(),
        },
        None => ContactAction::LoginPrompt {
            message: LOGIN_REQUIRED_PROMPT,
            login_page: LOGIN_PAGE,
        },
    }
}

/// The prefilled inquiry link.
pub fn inquiry_mailto() -> String {
    format!(
        "mailto:{INQUIRY_ADDRESS}?subject={}&body={}",
        encode_uri_component(INQUIRY_SUBJECT),
        encode_uri_component(INQUIRY_BODY),
    )
}

/// Percent-encode a value for use inside a URI query component.
///
/// # Examples
///
/// ```
/// use lostfound_core::contact::encode_uri_component;
///
/// assert_eq!(encode_uri_component("Lost & Found"), "Lost%20%26%20Found");
/// assert_eq!(encode_uri_component("it's (ok)!"), "it's%20(ok)!");
/// ```
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}
