// File: ./src/client/redirect.rs
//! Follows relay redirects (30x + Location) for idempotent GET requests.
use http::{Request, Response, Uri};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower_layer::Layer;
use tower_service::Service;

#[derive(Clone, Debug)]
pub struct FollowRedirectLayer {
    max_hops: usize,
}

impl FollowRedirectLayer {
    pub fn new(max_hops: usize) -> Self {
        Self { max_hops }
    }
}

impl<S> Layer<S> for FollowRedirectLayer {
    type Service = FollowRedirect<S>;

    fn layer(&self, inner: S) -> Self::Service {
        FollowRedirect {
            inner,
            max_hops: self.max_hops,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FollowRedirect<S> {
    inner: S,
    max_hops: usize,
}

/// Resolves a `Location` value against the URI that produced it.
/// Missing scheme or authority are inherited from `base`.
pub fn resolve_location(base: &Uri, location: &str) -> Option<Uri> {
    let parts = location.parse::<Uri>().ok()?.into_parts();
    let mut builder = Uri::builder();

    match parts.scheme {
        Some(scheme) => builder = builder.scheme(scheme),
        None => {
            if let Some(s) = base.scheme() {
                builder = builder.scheme(s.clone());
            }
        }
    }
    match parts.authority {
        Some(authority) => builder = builder.authority(authority),
        None => {
            if let Some(a) = base.authority() {
                builder = builder.authority(a.clone());
            }
        }
    }
    builder = builder.path_and_query(
        parts
            .path_and_query
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| "/".to_string()),
    );
    builder.build().ok()
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for FollowRedirect<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: std::error::Error + Send + Sync + 'static,
    ReqBody: Clone + Send + 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // Use the instance that was polled ready; leave a fresh clone behind.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let max_hops = self.max_hops;

        Box::pin(async move {
            let mut next = req;
            let mut hops = 0;

            loop {
                let retry = next.clone();
                let response = inner.call(next).await?;

                if hops >= max_hops || !response.status().is_redirection() {
                    return Ok(response);
                }

                let Some(target) = response
                    .headers()
                    .get(http::header::LOCATION)
                    .and_then(|loc| loc.to_str().ok())
                    .and_then(|loc| resolve_location(retry.uri(), loc))
                else {
                    return Ok(response);
                };

                log::debug!("Following redirect {} -> {}", retry.uri(), target);
                next = retry;
                *next.uri_mut() = target;
                hops += 1;
            }
        })
    }
}
