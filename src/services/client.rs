//! HTTP client for the login and table endpoints
//!
//! Both endpoints take a JSON body over POST. Only a 200 answer counts;
//! there is no retry and no timeout beyond the client defaults.
//!
//! A successful login answers with a `token` session cookie. The client
//! keeps a cookie jar, shared by all clones, and sends it back on later
//! requests.

use super::wire::{LoginRequest, QueryRequest, LOGIN_ENDPOINT, SHOWTABLE_ENDPOINT};
use crate::error::ClientError;
use crate::model::ResultSet;
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use serde::Serialize;
use tracing::debug;

/// Thin wrapper over a blocking reqwest client bound to one server.
///
/// Clones share the connection pool and the cookie jar.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(server_url: &str) -> Result<Self, ClientError> {
        let base = normalize_base(server_url)?;
        let http = Client::builder().cookie_store(true).build()?;
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolve an endpoint name against the server base
    pub fn endpoint(&self, name: &str) -> Result<Url, ClientError> {
        self.base
            .join(name)
            .map_err(|_| ClientError::InvalidUrl(format!("{}{}", self.base, name)))
    }

    /// Submit credentials and return the reply body verbatim
    pub fn login(&self, request: &LoginRequest) -> Result<String, ClientError> {
        self.post_json(LOGIN_ENDPOINT, request)
    }

    /// Run a table query and decode the columnar result
    pub fn show_table(&self, request: &QueryRequest) -> Result<ResultSet, ClientError> {
        let body = self.post_json(SHOWTABLE_ENDPOINT, request)?;
        ResultSet::from_json(&body)
    }

    fn post_json<T: Serialize>(&self, endpoint: &str, payload: &T) -> Result<String, ClientError> {
        let url = self.endpoint(endpoint)?;
        let body = serde_json::to_string(payload)?;
        debug!(%url, bytes = body.len(), "POST");

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::Status(status.as_u16()));
        }
        Ok(response.text()?)
    }
}

/// Parse the configured server url, forcing a trailing slash so endpoint
/// names resolve under it rather than replacing its last path segment.
fn normalize_base(server_url: &str) -> Result<Url, ClientError> {
    let trimmed = server_url.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    let url = Url::parse(&with_slash).map_err(|_| ClientError::InvalidUrl(trimmed.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidUrl(trimmed.to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::mpsc;
    use std::thread;

    /// Read one HTTP request (head and body) off the stream
    fn read_request(stream: &TcpStream) -> String {
        let mut reader = BufReader::new(stream);
        let mut head = String::new();
        let mut content_length = 0;
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 {
                break;
            }
            if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                content_length = value.trim().parse().unwrap();
            }
            head.push_str(&line);
            if line == "\r\n" {
                break;
            }
        }
        let mut body = vec![0; content_length];
        reader.read_exact(&mut body).unwrap();
        head + &String::from_utf8(body).unwrap()
    }

    fn respond(mut stream: TcpStream, extra_headers: &str, body: &str) {
        let response = format!(
            "HTTP/1.1 200 OK\r\n{}Content-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            extra_headers,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
    }

    #[test]
    fn test_normalize_base_adds_trailing_slash() {
        let url = normalize_base("http://localhost:8080/demo").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/demo/");
    }

    #[test]
    fn test_normalize_base_rejects_garbage() {
        assert!(matches!(
            normalize_base("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(normalize_base("mailto:me@example.com").is_err());
    }

    #[test]
    fn test_endpoints_resolve_under_base() {
        let client = ApiClient::new("http://localhost:8080/demo").unwrap();
        assert_eq!(
            client.endpoint(LOGIN_ENDPOINT).unwrap().as_str(),
            "http://localhost:8080/demo/login.json"
        );
        assert_eq!(
            client.endpoint(SHOWTABLE_ENDPOINT).unwrap().as_str(),
            "http://localhost:8080/demo/showtable.json"
        );
    }

    #[test]
    fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) on localhost is almost never listening
        let client = ApiClient::new("http://127.0.0.1:9/").unwrap();
        let err = client
            .show_table(&QueryRequest::new("SELECT", "users", 1))
            .unwrap_err();
        assert!(!err.is_payload_error());
    }

    #[test]
    fn test_session_cookie_is_sent_after_login() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (login, _) = listener.accept().unwrap();
            tx.send(read_request(&login)).unwrap();
            respond(
                login,
                "Set-Cookie: token=aaa.bbb.ccc;HttpOnly\r\n",
                "<p>welcome</p>",
            );

            let (query, _) = listener.accept().unwrap();
            tx.send(read_request(&query)).unwrap();
            respond(query, "", r#"{"d":{"r000":["1"]}}"#);
        });

        let client = ApiClient::new(&format!("http://127.0.0.1:{}/", port)).unwrap();
        let reply = client.login(&LoginRequest::new("alice", "secret")).unwrap();
        assert_eq!(reply, "<p>welcome</p>");

        // A clone, as handed to the worker thread, shares the jar
        let worker = client.clone();
        let result = worker
            .show_table(&QueryRequest::new("SELECT", "users", 0))
            .unwrap();
        assert_eq!(result.total_rows(), 1);

        let login_request = rx.recv().unwrap();
        assert!(login_request.starts_with("POST /login.json"));
        assert!(!login_request.to_ascii_lowercase().contains("cookie:"));

        let query_request = rx.recv().unwrap();
        assert!(query_request.starts_with("POST /showtable.json"));
        assert!(query_request.contains("token=aaa.bbb.ccc"));
        assert!(query_request.contains(r#"{"SQL":"SELECT * FROM users","viscols":0}"#));
    }
}
