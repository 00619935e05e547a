use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

// The native-app identity the auth endpoint expects.
pub(super) fn login_request_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(
        "x-li-user-agent",
        HeaderValue::from_static("LIAuthLibrary:3.2.4 com.linkedin.LinkedIn:8.8.1 iPhone:8.3"),
    );
    h.insert(
        USER_AGENT,
        HeaderValue::from_static("LinkedIn/8.8.1 CFNetwork/711.3.18 Darwin/14.0.0"),
    );
    h.insert("x-li-lang", HeaderValue::from_static("en_US"));
    h.insert("x-user-language", HeaderValue::from_static("en"));
    h.insert("x-user-locale", HeaderValue::from_static("en_US"));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-us"));
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}
