use voy_webclient::*;

mod testconfig;
use testconfig::TestConfig;

#[tokio::test]
async fn new_client_is_linkedin() {
    let cli = new_client();
    assert_eq!(cli.provider(), "linkedin");
}

#[test]
fn session_built_from_raw_headers() {
    let session = Session::from_set_cookie_headers([
        "JSESSIONID=\"ajax:7458\"; Path=/; Domain=.www.linkedin.com; Secure",
        "li_at=AQEDA; Expires=Mon, 06 Sep 2027 10:11:12 GMT; Path=/; Secure; SameSite=None",
        "lang=\"v=2&lang=en-us\"",
    ])
    .unwrap();

    assert_eq!(session.iter().count(), 3);
    assert_eq!(session.session_token().as_deref(), Some("ajax:7458"));

    let lines: Vec<String> = session.iter().map(|c| c.to_string()).collect();
    assert_eq!(
        lines,
        [
            "JSESSIONID=\"ajax:7458\"; path=/; domain=.www.linkedin.com; secure",
            "li_at=AQEDA; expires=Mon, 06 Sep 2027 10:11:12 GMT; path=/; samesite=none; secure",
            "lang=\"v=2&lang=en-us\"",
        ]
    );
}

#[test]
fn malformed_header_is_an_error() {
    let err = Session::from_set_cookie_headers(["not a cookie at all"]).unwrap_err();
    assert!(matches!(err, Error::MalformedCookie { .. }));
}

// Real login against linkedin.com. Needs LINKEDIN_USERNAME/LINKEDIN_PASSWORD
// in the environment; run with `cargo test -- --ignored`.
#[tokio::test]
#[ignore = "requires network and real credentials"]
async fn live_login_yields_session_cookies() {
    let cfg = TestConfig::from_env();
    let cli = LinkedinClient::new();
    let session = cli
        .login(&Credential::new(
            cfg.linkedin_username,
            cfg.linkedin_password,
        ))
        .await
        .unwrap();
    assert!(!session.is_empty());
    assert!(session.session_token().is_some());
}
