use ::once_cell::sync::Lazy;

use crate::Url;

pub const DOMAIN: &str = "www.linkedin.com";
pub const BASE_URL: &str = "https://www.linkedin.com";

pub static AUTHENTICATE_URL: Lazy<Url> =
    Lazy::new(|| Url::parse("https://www.linkedin.com/uas/authenticate").unwrap());
