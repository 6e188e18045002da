/// Remote catalog client
///
/// Talks to the PokéAPI REST endpoints with [`reqwest`]. The fallible
/// `fetch_*` methods report typed errors; the [`CatalogClient`] methods used
/// by the screens log those errors and fall back to an empty value.
use async_trait::async_trait;

use super::models::{Details, ListEnvelope, Summary};
use crate::config::Config;

/// Catalog capability injected into the view-state holders
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// All summary records of the first (and only requested) page.
    /// Empty on any failure.
    async fn list(&self) -> Vec<Summary>;

    /// Detail record for a name or numeric id. `None` on any failure.
    async fn get_details(&self, id: &str) -> Option<Details>;

    /// Raw bytes of a sprite image. `None` on any failure.
    async fn fetch_sprite(&self, url: &str) -> Option<Vec<u8>>;
}

/// Errors from the catalog HTTP layer
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("catalog returned {status} for {url}")]
    Status { status: u16, url: String },

    /// The body was not the JSON shape we expect
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for the PokéAPI collection endpoint
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    api_base: String,
    list_limit: u32,
}

impl PokeApiClient {
    pub fn new(config: &Config) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    pub fn with_client(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            list_limit: config.list_limit,
        }
    }

    /// `{base}?limit={limit}&offset=0`
    pub fn list_url(&self) -> String {
        format!("{}?limit={}&offset=0", self.api_base, self.list_limit)
    }

    /// `{base}/{id}/`
    pub fn detail_url(&self, id: &str) -> String {
        format!("{}/{}/", self.api_base, id)
    }

    /// Fetch and decode the list envelope
    pub async fn fetch_list(&self) -> Result<ListEnvelope, ApiError> {
        self.get_json(&self.list_url()).await
    }

    /// Fetch and decode one detail record
    pub async fn fetch_details(&self, id: &str) -> Result<Details, ApiError> {
        self.get_json(&self.detail_url(id)).await
    }

    /// Fetch an arbitrary binary resource
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(url).await?;
        Ok(response.bytes().await?.to_vec())
    }

    // ---- private helpers ----

    async fn send(&self, url: &str) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.send(url).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CatalogClient for PokeApiClient {
    async fn list(&self) -> Vec<Summary> {
        match self.fetch_list().await {
            Ok(envelope) => {
                tracing::info!(
                    "📋 Fetched {} of {} catalog entries",
                    envelope.results.len(),
                    envelope.count
                );
                envelope.results
            }
            Err(e) => {
                tracing::error!("Error fetching catalog list: {}", e);
                Vec::new()
            }
        }
    }

    async fn get_details(&self, id: &str) -> Option<Details> {
        match self.fetch_details(id).await {
            Ok(details) => Some(details),
            Err(e) => {
                tracing::error!("Error fetching details for {:?}: {}", id, e);
                None
            }
        }
    }

    async fn fetch_sprite(&self, url: &str) -> Option<Vec<u8>> {
        match self.fetch_bytes(url).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::warn!("Could not load sprite {}: {}", url, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::BULBASAUR_JSON;
    use std::path::PathBuf;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn config_for(api_base: &str) -> Config {
        Config {
            api_base: api_base.to_string(),
            list_limit: 100_000,
            db_path: PathBuf::from("unused.db"),
            start_route: None,
        }
    }

    fn local_client(base: &str) -> PokeApiClient {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        PokeApiClient::with_client(http, &config_for(base))
    }

    /// Serve a single canned HTTP response and return the base URL plus a
    /// handle yielding the request line that was received.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            request.lines().next().unwrap_or_default().to_string()
        });

        (format!("http://{}/api/v2/pokemon", addr), handle)
    }

    #[test]
    fn test_urls() {
        let client = PokeApiClient::new(&config_for("https://pokeapi.co/api/v2/pokemon/"));

        assert_eq!(
            client.list_url(),
            "https://pokeapi.co/api/v2/pokemon?limit=100000&offset=0"
        );
        assert_eq!(
            client.detail_url("pikachu"),
            "https://pokeapi.co/api/v2/pokemon/pikachu/"
        );
        assert_eq!(
            client.detail_url("25"),
            "https://pokeapi.co/api/v2/pokemon/25/"
        );
    }

    #[tokio::test]
    async fn test_list_returns_results() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"count": 3, "next": null, "previous": null, "results": [
                {"name": "bulbasaur", "url": "u1"},
                {"name": "charmander", "url": "u4"},
                {"name": "squirtle", "url": "u7"}
            ]}"#,
        )
        .await;
        let client = local_client(&base);

        let results = client.list().await;

        let names: Vec<&str> = results.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "charmander", "squirtle"]);
        assert_eq!(
            server.await.unwrap(),
            "GET /api/v2/pokemon?limit=100000&offset=0 HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_details_decoded() {
        let (base, server) = serve_once("200 OK", BULBASAUR_JSON).await;
        let client = local_client(&base);

        let details = client.get_details("bulbasaur").await.unwrap();

        assert_eq!(details.id, 1);
        assert_eq!(details.height, 7);
        assert_eq!(server.await.unwrap(), "GET /api/v2/pokemon/bulbasaur/ HTTP/1.1");
    }

    #[tokio::test]
    async fn test_decode_failure_is_typed() {
        let (base, _server) = serve_once("200 OK", r#"{"id": "not a number"}"#).await;
        let client = local_client(&base);

        assert!(matches!(
            client.fetch_details("1").await,
            Err(ApiError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_details_swallow_decode_failure() {
        let (base, _server) = serve_once("200 OK", "<html>nope</html>").await;
        let client = local_client(&base);

        assert_eq!(client.get_details("1").await, None);
    }

    #[tokio::test]
    async fn test_not_found_is_absent() {
        let (base, _server) = serve_once("404 Not Found", "Not Found").await;
        let client = local_client(&base);
        assert_eq!(client.get_details("missingno").await, None);

        let (base, _server) = serve_once("404 Not Found", "Not Found").await;
        let client = local_client(&base);
        assert!(matches!(
            client.fetch_details("missingno").await,
            Err(ApiError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_list_empty_on_transport_failure() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = local_client(&format!("http://{}/pokemon", addr));

        assert!(client.list().await.is_empty());
    }
}
