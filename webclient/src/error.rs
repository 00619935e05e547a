use reqwest::StatusCode;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Challenge required to continue login (url: {url})")]
    ChallengeRequired { url: String },

    #[error("Invalid login or restricted account")]
    Unauthorized,

    #[error("Unexpected response code '{got}' (expected '{expected}') while requesting to {requested_url}")]
    UnexpectedResponseCode {
        got: StatusCode,
        expected: StatusCode,
        requested_url: String,
    },

    #[error("Authentication response carried no session token cookie")]
    MissingSessionToken,

    #[error("Unknown data returned from {requested_url}: {reason}")]
    InvalidSessionData {
        requested_url: String,
        reason: String,
    },

    #[error("Malformed Set-Cookie entry '{raw}'")]
    MalformedCookie {
        raw: String,

        #[source]
        source: cookie::ParseError,
    },

    #[error("Http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
