//! Blocking HTTP client for the generation endpoint.

use std::time::Duration;

use ureq::Agent;

use crate::error::ClientError;
use crate::types::{GenerateRequest, GenerateResponse};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Path of the generation endpoint, relative to the service base URL.
const GENERATE_PATH: &str = "/generate_mermaid";

/// Client for the flowchart generation endpoint.
///
/// Holds a pooled [`Agent`] so repeated calls reuse connections. The agent
/// reports non-success statuses as responses rather than transport errors,
/// letting [`generate`](Self::generate) preserve the raw error body.
pub struct GeneratorClient {
    agent: Agent,
    base_url: String,
}

impl GeneratorClient {
    /// Create a client with the default timeout.
    ///
    /// # Arguments
    /// * `base_url` - Service base URL (e.g. `http://127.0.0.1:5000`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT))
    }

    /// Create a client with an explicit global timeout.
    #[must_use]
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    /// Convert source text into a diagram description.
    ///
    /// Issues one `POST /generate_mermaid` with `{"code": ...}` as JSON and
    /// decodes the response body.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] when the request cannot complete
    /// - [`ClientError::HttpStatus`] for any status outside 200-299, with
    ///   the raw body text attached
    /// - [`ClientError::Json`] when a success body is not valid JSON
    pub fn generate(&self, code: &str) -> Result<GenerateResponse, ClientError> {
        let url = format!("{}{GENERATE_PATH}", self.base_url);
        let request_body = serde_json::to_string(&GenerateRequest { code })?;

        tracing::debug!(url = %url, bytes = request_body.len(), "sending generation request");

        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .send(request_body.as_bytes())?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if !(200..300).contains(&status) {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| String::from("(unable to read error body)"));
            return Err(ClientError::HttpStatus {
                status,
                body: error_body,
            });
        }

        let text = body.read_to_string()?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    /// Serve exactly one canned HTTP response on a fresh localhost port.
    ///
    /// Returns the base URL to point the client at and a handle yielding the
    /// raw request the server received.
    fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let request = read_request(&mut stream);
            stream.write_all(response.as_bytes()).expect("write response");
            stream.flush().expect("flush response");
            request
        });

        (base_url, handle)
    }

    /// Read one full HTTP request (headers plus Content-Length body).
    fn read_request(stream: &mut std::net::TcpStream) -> String {
        let mut raw = Vec::new();
        let mut chunk = [0u8; 1024];

        let header_end = loop {
            let n = stream.read(&mut chunk).expect("read request");
            assert!(n > 0, "client closed before sending a full request");
            raw.extend_from_slice(&chunk[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let headers = String::from_utf8_lossy(&raw[..header_end]).to_lowercase();
        let content_length: usize = headers
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .map_or(0, |v| v.trim().parse().expect("content-length"));

        while raw.len() < header_end + content_length {
            let n = stream.read(&mut chunk).expect("read body");
            assert!(n > 0, "client closed mid-body");
            raw.extend_from_slice(&chunk[..n]);
        }

        String::from_utf8_lossy(&raw).into_owned()
    }

    #[test]
    fn test_generate_success() {
        let (base_url, server) =
            serve_once("200 OK", r#"{"mermaid_syntax":"graph TD\nA --> B"}"#);

        let client = GeneratorClient::new(&base_url);
        let response = client.generate("print('hi')").expect("generate");

        assert_eq!(response.syntax(), Some("graph TD\nA --> B"));
        server.join().expect("server thread");
    }

    #[test]
    fn test_generate_posts_json_to_endpoint() {
        let (base_url, server) = serve_once("200 OK", "{}");

        let client = GeneratorClient::new(&base_url);
        client.generate("x = 1").expect("generate");

        let request = server.join().expect("server thread");
        assert!(request.starts_with("POST /generate_mermaid HTTP/1.1"));
        assert!(request.to_lowercase().contains("content-type: application/json"));
        assert!(request.ends_with(r#"{"code":"x = 1"}"#));
    }

    #[test]
    fn test_generate_empty_body_field_absent() {
        let (base_url, server) = serve_once("200 OK", "{}");

        let client = GeneratorClient::new(&base_url);
        let response = client.generate("code").expect("generate");

        assert_eq!(response.syntax(), None);
        server.join().expect("server thread");
    }

    #[test]
    fn test_generate_non_success_preserves_body() {
        let (base_url, server) = serve_once("400 Bad Request", r#"{"error":"No code provided"}"#);

        let client = GeneratorClient::new(&base_url);
        let err = client.generate("").expect_err("should fail");

        match err {
            ClientError::HttpStatus { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("No code provided"));
            }
            other => panic!("expected HttpStatus, got: {other:?}"),
        }
        server.join().expect("server thread");
    }

    #[test]
    fn test_generate_invalid_json_is_json_error() {
        let (base_url, server) = serve_once("200 OK", "not json at all");

        let client = GeneratorClient::new(&base_url);
        let err = client.generate("code").expect_err("should fail");

        assert!(matches!(err, ClientError::Json(_)));
        server.join().expect("server thread");
    }

    #[test]
    fn test_generate_connection_refused_is_transport_error() {
        // Grab a port that is guaranteed closed by binding then dropping it.
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let base_url = format!("http://{}", listener.local_addr().expect("addr"));
        drop(listener);

        let client = GeneratorClient::with_timeout(&base_url, Duration::from_secs(2));
        let err = client.generate("code").expect_err("should fail");

        assert!(matches!(err, ClientError::Transport(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let (base_url, server) = serve_once("200 OK", "{}");

        let client = GeneratorClient::new(format!("{base_url}/"));
        client.generate("code").expect("generate");

        let request = server.join().expect("server thread");
        assert!(request.starts_with("POST /generate_mermaid "));
    }
}
