// File: src/client/core.rs
use crate::client::middleware::{ClientHeaders, ClientHeadersLayer};
use crate::client::redirect::{FollowRedirect, FollowRedirectLayer};
use crate::error::FinderError;

use http::{Request, Uri};
use http_body_util::BodyExt;
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use tower::{ServiceBuilder, ServiceExt};
use url::form_urlencoded;

/// Default public relay. The target URL is appended percent-encoded.
pub const DEFAULT_RELAY_URL: &str = "https://api.allorigins.win/raw?url=";
const MAX_REDIRECTS: usize = 5;

type HttpsClient = Client<hyper_rustls::HttpsConnector<HttpConnector>, String>;
type RelayService = ClientHeaders<FollowRedirect<HttpsClient>>;

/// Wraps `target` for the relay: `relay_url` followed by the encoded target.
/// An empty relay means the target is called directly.
pub fn relay_url_for(relay_url: &str, target: &str) -> String {
    let relay_url = relay_url.trim();
    if relay_url.is_empty() {
        return target.to_string();
    }
    let encoded: String = form_urlencoded::byte_serialize(target.as_bytes()).collect();
    format!("{}{}", relay_url, encoded)
}

/// Fetches raw response text through the relay.
///
/// One request per call, no retries and no timeout. The body is returned
/// verbatim whatever the declared content type. A body that is not UTF-8
/// is a parse error.
#[derive(Clone, Debug)]
pub struct RelayClient {
    relay_url: String,
    service: RelayService,
}

impl RelayClient {
    pub fn new(relay_url: &str, user_agent: &str) -> Result<Self, FinderError> {
        let mut root_store = rustls::RootCertStore::empty();
        let result = rustls_native_certs::load_native_certs();
        for e in &result.errors {
            log::warn!("Skipping unreadable system certificate: {}", e);
        }
        root_store.add_parsable_certificates(result.certs);
        if root_store.is_empty() {
            // Plain-http relays still work; https ones will fail at handshake.
            log::warn!("No valid system certificates found.");
        }

        let tls_config = rustls::ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        let https_connector = HttpsConnectorBuilder::new()
            .with_tls_config(tls_config)
            .https_or_http()
            .enable_http1()
            .build();

        let http_client: HttpsClient = Client::builder(TokioExecutor::new()).build(https_connector);
        let service = ServiceBuilder::new()
            .layer(ClientHeadersLayer::new(user_agent))
            .layer(FollowRedirectLayer::new(MAX_REDIRECTS))
            .service(http_client);

        Ok(Self {
            relay_url: relay_url.to_string(),
            service,
        })
    }

    /// Issues one GET for `target` through the relay and returns the body text.
    pub async fn fetch_text(&self, target: &str) -> Result<String, FinderError> {
        let wrapped = relay_url_for(&self.relay_url, target);
        let uri: Uri = wrapped
            .parse()
            .map_err(|e: http::uri::InvalidUri| {
                FinderError::Configuration(format!("invalid relay URL: {}", e))
            })?;

        let req = Request::get(uri)
            .body(String::new())
            .map_err(|e| FinderError::Configuration(e.to_string()))?;

        let response = self
            .service
            .clone()
            .oneshot(req)
            .await
            .map_err(|e| FinderError::Network {
                status: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FinderError::Network {
                status: Some(status.as_u16()),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        let bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| FinderError::Network {
                status: None,
                message: format!("failed to read response body: {}", e),
            })?
            .to_bytes();

        String::from_utf8(bytes.to_vec())
            .map_err(|e| FinderError::Parse(format!("response body is not UTF-8: {}", e)))
    }
}
