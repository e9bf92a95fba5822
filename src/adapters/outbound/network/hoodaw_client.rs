use crate::application::dto::ReportPayload;
use crate::ports::outbound::ReportSink;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Header carrying the API key expected by the drift API
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// HoodawClient adapter for posting reports to the "How out of date are we" API
///
/// This adapter implements the ReportSink port with an async reqwest
/// client. Failed posts are not retried: a scheduler re-runs the whole
/// snapshot on its next tick.
pub struct HoodawClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl HoodawClient {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client posting to `{host}{endpoint}`
    pub fn new(host: &str, endpoint: &str, api_key: String) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("helm-drift/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self::with_client(client, host, endpoint, api_key))
    }

    /// Creates a client around a preconfigured reqwest client
    pub fn with_client(
        client: reqwest::Client,
        host: &str,
        endpoint: &str,
        api_key: String,
    ) -> Self {
        Self {
            client,
            url: Self::join_url(host, endpoint),
            api_key,
        }
    }

    fn join_url(host: &str, endpoint: &str) -> String {
        format!(
            "{}/{}",
            host.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ReportSink for HoodawClient {
    async fn transmit(&self, payload: &ReportPayload) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Drift API returned status code {}", response.status());
        }

        Ok(())
    }

    fn destination(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_client_creation() {
        let client = HoodawClient::new("https://hoodaw.test", "/helm_whatup", "key".to_string());
        assert!(client.is_ok());
    }

    #[test]
    fn test_url_join() {
        let client =
            HoodawClient::new("https://hoodaw.test/", "/helm_whatup", "key".to_string()).unwrap();
        assert_eq!(client.url(), "https://hoodaw.test/helm_whatup");
        assert_eq!(client.destination(), "https://hoodaw.test/helm_whatup");
    }

    /// Accepts one connection, captures the request and answers with `status_line`
    fn one_shot_server(status_line: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|l| {
                            let lower = l.to_ascii_lowercase();
                            lower
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap())
                        })
                        .unwrap_or(0);
                    if request.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }
            let response = format!(
                "{}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                status_line
            );
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).to_string()
        });
        (format!("http://{}", addr), handle)
    }

    fn local_client(host: &str, api_key: &str) -> HoodawClient {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HoodawClient::with_client(client, host, "/helm_whatup", api_key.to_string())
    }

    fn payload() -> ReportPayload {
        ReportPayload {
            updated_at: "2024-05-14 06:3:9 UTC".to_string(),
            clusters: vec![],
        }
    }

    #[tokio::test]
    async fn test_transmit_posts_payload_with_api_key() {
        let (host, server) = one_shot_server("HTTP/1.1 200 OK");
        let client = local_client(&host, "s3cret");

        client.transmit(&payload()).await.unwrap();

        let request = server.join().unwrap();
        let lower = request.to_ascii_lowercase();
        assert!(request.starts_with("POST /helm_whatup HTTP/1.1"));
        assert!(lower.contains("x-api-key: s3cret"));
        assert!(lower.contains("content-type: application/json"));
        assert!(request.contains(r#"{"updated_at":"2024-05-14 06:3:9 UTC","clusters":[]}"#));
    }

    #[tokio::test]
    async fn test_transmit_non_success_status() {
        let (host, server) = one_shot_server("HTTP/1.1 401 Unauthorized");
        let client = local_client(&host, "wrong");

        let err = client.transmit(&payload()).await.unwrap_err();
        server.join().unwrap();
        assert!(err.to_string().contains("401"));
    }
}
