//! Fonda Client - HTTP client for the Fonda restaurant backend
//!
//! Typed API services over the backend REST resources, an explicit
//! session context built from decode-only JWTs, and the transport-level
//! error policy (401 clears the session, 403 warns, validation renders
//! inline).

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod inflight;
pub mod session;

pub use client::FondaClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ErrorDisposition};
pub use http::HttpClient;
pub use inflight::{InflightPermit, InflightSet};
pub use session::{
    Claims, FileTokenStore, MemoryTokenStore, Role, Session, SessionError, SessionManager,
    TokenStore,
};
