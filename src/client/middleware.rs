// File: ./src/client/middleware.rs
//! Tower middleware stamping relay requests with client headers.
use http::header::{ACCEPT, USER_AGENT};
use http::{HeaderValue, Request};
use std::task::{Context, Poll};
use tower_layer::Layer;
use tower_service::Service;

// Relays sometimes serve HTML error pages, so HTML stays acceptable.
const ACCEPT_VALUE: &str = "application/json, text/plain;q=0.9, */*;q=0.5";

#[derive(Clone, Debug)]
pub struct ClientHeadersLayer {
    user_agent: String,
}

impl ClientHeadersLayer {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl<S> Layer<S> for ClientHeadersLayer {
    type Service = ClientHeaders<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ClientHeaders {
            inner,
            user_agent: HeaderValue::from_str(&self.user_agent).ok(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ClientHeaders<S> {
    inner: S,
    user_agent: Option<HeaderValue>,
}

impl<S, ReqBody> Service<Request<ReqBody>> for ClientHeaders<S>
where
    S: Service<Request<ReqBody>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        let headers = req.headers_mut();
        if let Some(ua) = &self.user_agent {
            headers.insert(USER_AGENT, ua.clone());
        }
        headers
            .entry(ACCEPT)
            .or_insert(HeaderValue::from_static(ACCEPT_VALUE));
        self.inner.call(req)
    }
}
