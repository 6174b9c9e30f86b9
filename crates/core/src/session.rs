//! Header identity label.
//!
//! The page keeps the logged-in student id in session storage; it passes
//! that id (or nothing) here and renders the returned label.

/// Page that logging out, and declining to contact as a guest, lead to.
pub const LOGIN_PAGE: &str = "index.html";

/// Label shown when nobody is logged in.
pub const GUEST_NAME: &str = "Guest";

const USER_ICON: &str = "\u{1F464}";

/// Header label for the current visitor.
///
/// # Examples
///
/// ```
/// use lostfound_core::session::display_name;
///
/// assert_eq!(display_name(Some("0351234")), "\u{1F464} 0351234");
/// assert_eq!(display_name(None), "\u{1F464} Guest");
/// ```
pub fn display_name(student_id: Option<&str>) -> String {
    let name = logged_in_id(student_id).unwrap_or(GUEST_NAME);
    format!("{USER_ICON} {name}")
}

/// The student id when it identifies someone; blank ids count as logged out.
pub fn logged_in_id(student_id: Option<&str>) -> Option<&str> {
    student_id.filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_is_a_guest() {
        assert_eq!(display_name(Some("")), format!("{USER_ICON} {GUEST_NAME}"));
        assert_eq!(logged_in_id(Some("")), None);
    }

    #[test]
    fn id_is_shown_verbatim() {
        assert_eq!(display_name(Some("abc 123")), format!("{USER_ICON} abc 123"));
    }
}
