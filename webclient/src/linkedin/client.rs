use ::async_trait::async_trait;
use ::std::time::Duration;
use reqwest::header::{COOKIE, LOCATION};
use reqwest::StatusCode;
use serde_json::Value;

use super::{headers::login_request_headers, urls::*};
use crate::{error::*, http, model::*};

const REQUEST_INTERVAL: Duration = Duration::from_millis(400);

pub struct LinkedinClient {
    http: http::Client,
}

impl LinkedinClient {
    pub fn new() -> Self {
        Self {
            // Redirects are never followed: a redirect out of the auth
            // endpoint is a signal (challenge page), not a path to take.
            http: http::Client::new(http::redirect::Policy::none(), REQUEST_INTERVAL),
        }
    }

    /// Anonymous GET against the auth endpoint. Seeds the cookies
    /// (including the session token) the login POST must carry.
    async fn fetch_seed_session(&self) -> Result<Session> {
        let resp = self
            .http
            .get(AUTHENTICATE_URL.clone())
            .headers(login_request_headers())
            .send()
            .await?;
        Session::from_response(&resp)
    }
}

impl Default for LinkedinClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Client for LinkedinClient {
    fn provider(&self) -> &'static str {
        "linkedin"
    }

    async fn login(&self, cred: &Credential) -> Result<Session> {
        log::info!("Running login flow for '{}'", cred.username);

        let seed = self.fetch_seed_session().await?;
        let session_token = seed.session_token().ok_or(Error::MissingSessionToken)?;

        let quoted_token = format!("\"{}\"", session_token);
        let form = [
            ("session_key", cred.username.as_str()),
            ("session_password", cred.password.as_str()),
            (session::SESSION_TOKEN_COOKIE, quoted_token.as_str()),
        ];
        let resp = self
            .http
            .post(AUTHENTICATE_URL.clone())
            .headers(login_request_headers())
            .header(COOKIE, seed.cookie_header())
            .form(&form)
            .send()
            .await?;

        let status = resp.status();
        let redirect_target = resp
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let session = Session::from_response(&resp)?;
        let body: Value = resp.json().await.unwrap_or(Value::Null);

        if let Some(challenge_url) = body.get("challenge_url").and_then(Value::as_str) {
            return Err(Error::ChallengeRequired {
                url: challenge_url.to_owned(),
            });
        }
        if let Some(location) = redirect_target {
            if status.is_redirection() && location.contains("challenge") {
                return Err(Error::ChallengeRequired { url: location });
            }
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized);
        }
        if status != StatusCode::OK {
            return Err(Error::UnexpectedResponseCode {
                got: status,
                expected: StatusCode::OK,
                requested_url: AUTHENTICATE_URL.to_string(),
            });
        }
        if session.is_empty() {
            return Err(Error::InvalidSessionData {
                requested_url: AUTHENTICATE_URL.to_string(),
                reason: "login response carried no Set-Cookie headers".to_owned(),
            });
        }
        match body.get("login_result").and_then(Value::as_str) {
            Some("PASS") => {
                log::info!("Completed login flow for '{}'", cred.username);
                Ok(session)
            }
            other => Err(Error::InvalidSessionData {
                requested_url: AUTHENTICATE_URL.to_string(),
                reason: format!("login_result = {:?}", other),
            }),
        }
    }
}
