//! CSRF Token
//!
//! Reads Django's `csrftoken` cookie so mutating requests can echo it
//! back in the `X-CSRFToken` header.

use cookie::Cookie;
use wasm_bindgen::JsCast;

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Find `name` in a `document.cookie` style string. First match wins.
pub fn cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(cookie_header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

/// Current CSRF token, if the backend has set the cookie
pub fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html.cookie().ok()?;
    cookie_value(&cookies, CSRF_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value_finds_token() {
        let header = "sessionid=abc; csrftoken=T0k3n; theme=dark";
        assert_eq!(cookie_value(header, CSRF_COOKIE), Some("T0k3n".to_string()));
    }

    #[test]
    fn test_cookie_value_missing() {
        assert_eq!(cookie_value("sessionid=abc", CSRF_COOKIE), None);
        assert_eq!(cookie_value("", CSRF_COOKIE), None);
    }

    #[test]
    fn test_cookie_value_does_not_match_prefix() {
        let header = "xcsrftoken=wrong; csrftoken=right";
        assert_eq!(cookie_value(header, CSRF_COOKIE), Some("right".to_string()));
    }

    #[test]
    fn test_cookie_value_percent_decoded() {
        let header = "csrftoken=a%20b%3Dc";
        assert_eq!(cookie_value(header, CSRF_COOKIE), Some("a b=c".to_string()));
    }

    #[test]
    fn test_cookie_value_skips_malformed_pairs() {
        let header = "=orphan; garbage; csrftoken=ok";
        assert_eq!(cookie_value(header, CSRF_COOKIE), Some("ok".to_string()));
    }

    #[test]
    fn test_cookie_value_first_match_wins() {
        let header = "csrftoken=first;csrftoken=second";
        assert_eq!(cookie_value(header, CSRF_COOKIE), Some("first".to_string()));
    }
}
