//! Request bodies for the two JSON endpoints

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;

pub const LOGIN_ENDPOINT: &str = "login.json";
pub const SHOWTABLE_ENDPOINT: &str = "showtable.json";

/// Body of `POST login.json`: `{"Auth": "<user>=<base64(pass)>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    #[serde(rename = "Auth")]
    pub auth: String,
}

impl LoginRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            auth: format!("{}={}", username, BASE64.encode(password.as_bytes())),
        }
    }
}

/// Body of `POST showtable.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    #[serde(rename = "SQL")]
    pub sql: String,
    pub viscols: u8,
}

impl QueryRequest {
    /// `<command> * FROM <table>`
    pub fn new(command: &str, table: &str, viscols: u8) -> Self {
        Self {
            sql: format!("{} * FROM {}", command, table),
            viscols,
        }
    }

    /// Whether the server will include the `h` header descriptor
    pub fn wants_headers(&self) -> bool {
        self.viscols == 1
    }
}
