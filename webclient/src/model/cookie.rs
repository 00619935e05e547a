use std::fmt;

use ::lazy_regex::{lazy_regex, Lazy, Regex};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// Values, domains, and `Expires` are re-emitted verbatim. The `cookie`
// crate normalizes all three (strips the double quotes LinkedIn wraps
// around values, drops the leading dot from domains, retypes dates), so
// the raw text is captured here instead.
static RE_RAW_VALUE: Lazy<Regex> = lazy_regex!(r"^\s*[^=;\s]+=([^;]*)");
static RE_RAW_DOMAIN: Lazy<Regex> = lazy_regex!(r"(?i)(?:^|;)\s*domain=([^;]*)");
static RE_RAW_EXPIRES: Lazy<Regex> = lazy_regex!(r"(?i)(?:^|;)\s*expires=([^;]*)");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl From<::cookie::SameSite> for SameSite {
    fn from(value: ::cookie::SameSite) -> Self {
        use ::cookie::SameSite::*;
        match value {
            Strict => SameSite::Strict,
            Lax => SameSite::Lax,
            None => SameSite::None,
        }
    }
}

/// One session cookie as issued by the provider.
///
/// Attributes are consumed read-only: they are stored exactly as received
/// and only reformatted on output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCookie {
    pub name: String,
    pub value: String,
    pub expires: Option<String>,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub same_site: Option<SameSite>,
    #[serde(default)]
    pub secure: bool,
}

impl SessionCookie {
    pub fn parse_set_cookie(raw: &str) -> Result<Self> {
        let c = ::cookie::Cookie::parse(raw).map_err(|e| Error::MalformedCookie {
            raw: raw.to_owned(),
            source: e,
        })?;
        let value = RE_RAW_VALUE
            .captures(raw)
            .map(|caps| caps[1].trim().to_owned())
            .unwrap_or_else(|| c.value().to_owned());
        let domain = RE_RAW_DOMAIN
            .captures(raw)
            .map(|caps| caps[1].trim().to_owned())
            .filter(|s| !s.is_empty());
        let expires = RE_RAW_EXPIRES
            .captures(raw)
            .map(|caps| caps[1].trim().to_owned())
            .filter(|s| !s.is_empty());
        Ok(Self {
            name: c.name().to_owned(),
            value,
            expires,
            path: c.path().filter(|s| !s.is_empty()).map(str::to_owned),
            domain,
            same_site: c.same_site().map(Into::into),
            secure: c.secure().unwrap_or(false),
        })
    }
}

/// Serialized "Set-Cookie"-like line: `name=value` followed by
/// `; expires=..`, `; path=..`, `; domain=..` (each only when present and
/// non-empty), `; samesite=<lowercased>`, and the literal `; secure`.
impl fmt::Display for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;
        let attrs = [
            ("expires", &self.expires),
            ("path", &self.path),
            ("domain", &self.domain),
        ];
        for (key, value) in attrs {
            if let Some(v) = value {
                if !v.is_empty() {
                    write!(f, "; {}={}", key, v)?;
                }
            }
        }
        if let Some(same_site) = &self.same_site {
            write!(f, "; samesite={}", same_site)?;
        }
        if self.secure {
            write!(f, "; secure")?;
        }
        Ok(())
    }
}
