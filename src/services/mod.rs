//! External service interactions
//!
//! This module contains services for talking to the table server:
//! - JSON request bodies for both endpoints
//! - The blocking HTTP client
//! - Background request execution
//! - Access token storage

pub mod client;
pub mod request_runner;
pub mod token;
pub mod wire;

pub use client::ApiClient;
pub use request_runner::{Poll, RequestRunner};
pub use token::load_access_token;
pub use wire::{LoginRequest, QueryRequest};
