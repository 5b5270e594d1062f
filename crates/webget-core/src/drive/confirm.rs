//! Download-warning confirmation token.

use crate::http::Cookie;

/// Cookie-name prefix set when a file is too large for the virus scan and
/// the download needs explicit confirmation.
const WARNING_PREFIX: &str = "download_warning";

/// Token from the first `download_warning*` cookie, if the response carried
/// one. Absence means no challenge, not an error.
pub fn confirmation_token(cookies: &[Cookie]) -> Option<&str> {
    cookies
        .iter()
        .find(|c| c.name.starts_with(WARNING_PREFIX))
        .map(|c| c.value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookie(name: &str, value: &str) -> Cookie {
        Cookie {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn finds_warning_cookie_by_prefix() {
        let cookies = vec![
            cookie("NID", "xyz"),
            cookie("download_warning_13Ab", "TOKEN123"),
        ];
        assert_eq!(confirmation_token(&cookies), Some("TOKEN123"));
    }

    #[test]
    fn no_warning_cookie_means_no_token() {
        let cookies = vec![cookie("NID", "xyz"), cookie("SID", "abc")];
        assert_eq!(confirmation_token(&cookies), None);
        assert_eq!(confirmation_token(&[]), None);
    }

    #[test]
    fn exact_prefix_name_matches() {
        let cookies = vec![cookie("download_warning", "T")];
        assert_eq!(confirmation_token(&cookies), Some("T"));
    }
}
