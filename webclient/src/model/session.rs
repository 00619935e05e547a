use ::chrono::{DateTime, FixedOffset, Utc};
use ::lazy_regex::{lazy_regex, Lazy, Regex};
use serde::{Deserialize, Serialize};

use super::cookie::SessionCookie;
use crate::error::Result;

/// The CSRF/session token cookie. LinkedIn wraps its value in double
/// quotes (`JSESSIONID="ajax:27…"`).
pub const SESSION_TOKEN_COOKIE: &str = "JSESSIONID";

static RE_QUOTED_VALUE: Lazy<Regex> = lazy_regex!(r#"^"([^"]*)"$"#);

/// An authenticated session: the cookies issued by the provider, in the
/// order they were received.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    cookies: Vec<SessionCookie>,
}

impl Session {
    pub fn new(cookies: Vec<SessionCookie>) -> Self {
        Self { cookies }
    }

    pub fn from_set_cookie_headers<'a>(
        headers: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self> {
        let cookies = headers
            .into_iter()
            .map(SessionCookie::parse_set_cookie)
            .collect::<Result<_>>()?;
        Ok(Self { cookies })
    }

    pub fn from_response(resp: &reqwest::Response) -> Result<Self> {
        Self::from_set_cookie_headers(
            resp.headers()
                .get_all(reqwest::header::SET_COOKIE)
                .iter()
                .filter_map(|v| v.to_str().ok()),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SessionCookie> {
        self.cookies.iter()
    }

    pub fn get(&self, name: &str) -> Option<&SessionCookie> {
        self.cookies.iter().find(|c| c.name == name)
    }

    /// Session token value with the provider's quoting stripped.
    pub fn session_token(&self) -> Option<String> {
        let c = self.get(SESSION_TOKEN_COOKIE)?;
        let value = match RE_QUOTED_VALUE.captures(&c.value) {
            Some(caps) => caps[1].to_owned(),
            None => c.value.clone(),
        };
        (!value.is_empty()).then_some(value)
    }

    /// Serialize for use as a `Cookie:` request header.
    pub fn cookie_header(&self) -> String {
        self.cookies
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// A session is expired when its session token cookie carries an
    /// `Expires` date in the past. Anything else (no token, no date,
    /// unparseable date) leaves the session as-is.
    pub fn is_expired(&self) -> bool {
        let Some(expires) = self
            .get(SESSION_TOKEN_COOKIE)
            .and_then(|c| c.expires.as_deref())
            .and_then(parse_expiration)
        else {
            return false;
        };
        expires.with_timezone(&Utc) < Utc::now()
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

/// Cookie `Expires` dates come as RFC 2822 or its legacy dash-separated
/// variant (`Wed, 01-Sep-2027 00:00:00 GMT`).
fn parse_expiration(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(s)
        .or_else(|_| DateTime::parse_from_rfc2822(&s.replace('-', " ")))
        .ok()
}

#[cfg(test)]
mod test {
    use super::*;

    fn session_from(headers: &[&str]) -> Session {
        Session::from_set_cookie_headers(headers.iter().copied()).unwrap()
    }

    #[test]
    fn session_token_strips_quotes() {
        let s = session_from(&["JSESSIONID=\"ajax:2717\"; Path=/", "bcookie=v2"]);
        assert_eq!(s.session_token().as_deref(), Some("ajax:2717"));
    }

    #[test]
    fn session_token_absent() {
        let s = session_from(&["bcookie=v2"]);
        assert_eq!(s.session_token(), None);

        let empty = session_from(&["JSESSIONID=\"\""]);
        assert_eq!(empty.session_token(), None);
    }

    #[test]
    fn cookie_header_joins_in_order() {
        let s = session_from(&["a=1; Path=/", "b=2; Secure", "c=3"]);
        assert_eq!(s.cookie_header(), "a=1; b=2; c=3");
    }

    #[test]
    fn expired_session_is_detected() {
        let s = session_from(&["JSESSIONID=\"ajax:1\"; Expires=Wed, 01 Sep 2021 00:00:00 GMT"]);
        assert!(s.is_expired());

        let legacy = session_from(&["JSESSIONID=\"ajax:1\"; Expires=Wed, 01-Sep-2021 00:00:00 GMT"]);
        assert!(legacy.is_expired());
    }

    #[test]
    fn session_without_expiration_is_not_expired() {
        assert!(!session_from(&["JSESSIONID=\"ajax:1\"; Path=/"]).is_expired());
        assert!(!session_from(&["li_at=x; Expires=Wed, 01 Sep 2021 00:00:00 GMT"]).is_expired());
    }

    #[test]
    fn json_roundtrip_preserves_order() {
        let s = session_from(&[
            "JSESSIONID=\"ajax:1\"; Path=/; Secure",
            "li_at=tok; Domain=.linkedin.com; SameSite=None",
        ]);
        let restored = Session::from_json(&s.to_json()).unwrap();
        assert_eq!(restored, s);
    }
}
