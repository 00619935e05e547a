use std::{sync::Arc, time::Duration};

use ::tokio::sync::Mutex;
use ::tokio::time::{Interval, MissedTickBehavior};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

pub use ::reqwest::{redirect, Error, IntoUrl, Request, Response};

/// Thin wrapper around `reqwest::Client`.
///
/// Cookies are NOT stored in a jar: the login flow reads and forwards
/// `Set-Cookie` headers explicitly. A minimum interval between requests is
/// enforced to stay below the provider's rate limit.
#[derive(Clone)]
pub struct Client {
    inner: ::reqwest::Client,
    req_interval: Arc<Mutex<Interval>>,
}

pub struct RequestBuilder {
    inner: ::reqwest::RequestBuilder,
    client: Client,
}

macro_rules! emit_request_fn {
    ($method:ident) => {
        pub fn $method(&self, u: impl IntoUrl) -> RequestBuilder {
            RequestBuilder::new(self.inner.$method(u), self.clone())
        }
    };
}

impl Client {
    pub fn new(redirection: self::redirect::Policy, req_interval: Duration) -> Self {
        let mut interval = ::tokio::time::interval(req_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            inner: reqwest::Client::builder()
                .redirect(redirection)
                .gzip(true)
                .build()
                .unwrap(),
            req_interval: Arc::new(Mutex::new(interval)),
        }
    }

    emit_request_fn!(get);
    emit_request_fn!(post);

    pub(super) async fn execute_request(&self, req: Request) -> Result<Response, Error> {
        self.req_interval.lock().await.tick().await;
        self.inner.execute(req).await
    }
}

impl RequestBuilder {
    fn new(b: ::reqwest::RequestBuilder, client: Client) -> Self {
        Self { inner: b, client }
    }

    pub async fn send(self) -> Result<Response, Error> {
        let req = self.inner.build()?;
        self.client.execute_request(req).await
    }

    pub fn form<T: Serialize + ?Sized>(mut self, form: &T) -> Self {
        self.inner = self.inner.form(form);
        self
    }

    pub fn headers(self, headers: HeaderMap) -> Self {
        Self::new(self.inner.headers(headers), self.client)
    }

    pub fn header<K, V>(self, key: K, value: V) -> RequestBuilder
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<::http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<::http::Error>,
    {
        Self::new(self.inner.header(key, value), self.client)
    }
}
