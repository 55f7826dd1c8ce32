//! Session context
//!
//! Explicit session lifecycle: a token is loaded from a [`TokenStore`] at
//! startup, decoded (never verified — the backend is the verifier),
//! attached to every call, and cleared on logout or on a 401. No ambient
//! storage lookups; every consumer receives the session context it needs.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};
use thiserror::Error;

/// JWT claims carried by backend tokens
///
/// Only the claims the client consumes; unknown claims are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username (subject)
    pub sub: String,
    /// Role names, e.g. "ROLE_ADMIN"
    #[serde(default)]
    pub roles: Vec<String>,
    /// Account must change its password before doing anything else
    #[serde(default)]
    pub must_change_password: bool,
    /// Expiry timestamp
    pub exp: i64,
    /// Issued-at timestamp
    #[serde(default)]
    pub iat: i64,
}

/// Session errors
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Failed to persist token: {0}")]
    Storage(#[from] std::io::Error),
}

/// Application role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Administrator,
    Supervisor,
    Cashier,
    Waiter,
    Customer,
}

impl Role {
    /// Wire name as carried in token claims
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "ROLE_ADMIN",
            Role::Supervisor => "ROLE_SUPERVISOR",
            Role::Cashier => "ROLE_CASHIER",
            Role::Waiter => "ROLE_WAITER",
            Role::Customer => "ROLE_CUSTOMER",
        }
    }

    /// Parse a wire role name; unknown names yield `None` and are
    /// ignored by callers
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "ROLE_ADMIN" => Some(Role::Administrator),
            "ROLE_SUPERVISOR" => Some(Role::Supervisor),
            "ROLE_CASHIER" => Some(Role::Cashier),
            "ROLE_WAITER" => Some(Role::Waiter),
            "ROLE_CUSTOMER" => Some(Role::Customer),
            _ => None,
        }
    }

    /// Every role except `Customer` is staff
    pub fn is_staff(&self) -> bool {
        !matches!(self, Role::Customer)
    }
}

/// Decode token claims without verifying the signature.
///
/// The client never holds the signing secret; it trusts the backend to
/// have verified the token it issued. Expiry is still checked so a stale
/// token reads as logged-out.
pub fn decode_claims(token: &str) -> Result<Claims, SessionError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["sub", "exp"]);

    let data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation).map_err(
        |e| match e.kind() {
            ErrorKind::ExpiredSignature => SessionError::ExpiredToken,
            _ => SessionError::InvalidToken(e.to_string()),
        },
    )?;

    Ok(data.claims)
}

/// An authenticated session: the raw token plus its decoded claims
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    claims: Claims,
}

impl Session {
    /// Decode a token into a session
    pub fn from_token(token: impl Into<String>) -> Result<Self, SessionError> {
        let token = token.into();
        let claims = decode_claims(&token)?;
        Ok(Self { token, claims })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn username(&self) -> &str {
        &self.claims.sub
    }

    pub fn must_change_password(&self) -> bool {
        self.claims.must_change_password
    }

    /// Known roles carried by the token; unknown role names are dropped
    pub fn roles(&self) -> Vec<Role> {
        self.claims
            .roles
            .iter()
            .filter_map(|r| Role::from_wire(r))
            .collect()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles().contains(&role)
    }

    pub fn is_staff(&self) -> bool {
        self.roles().iter().any(Role::is_staff)
    }

    pub fn is_customer(&self) -> bool {
        self.has_role(Role::Customer)
    }

    /// Seconds until the token expires
    pub fn expires_in(&self) -> i64 {
        (self.claims.exp - Utc::now().timestamp()).max(0)
    }

    // ==================== Role-gated capabilities ====================

    /// Employee management is an administrator/supervisor concern
    pub fn can_manage_employees(&self) -> bool {
        self.has_role(Role::Administrator) || self.has_role(Role::Supervisor)
    }

    /// Assigning another waiter to a sale requires a supervising role;
    /// waiters assign themselves
    pub fn can_assign_waiter(&self) -> bool {
        self.has_role(Role::Administrator)
            || self.has_role(Role::Supervisor)
            || self.has_role(Role::Cashier)
    }

    /// Confirming reservations is a staff action
    pub fn can_confirm_reservations(&self) -> bool {
        self.is_staff()
    }
}

/// Token persistence
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> std::io::Result<()>;
    fn clear(&self) -> std::io::Result<()>;
}

/// In-memory token store (tests, short-lived tools)
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().expect("token lock poisoned").clone()
    }

    fn save(&self, token: &str) -> std::io::Result<()> {
        *self.token.lock().expect("token lock poisoned") = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> std::io::Result<()> {
        *self.token.lock().expect("token lock poisoned") = None;
        Ok(())
    }
}

/// Single-file token store
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            return None;
        }
        Some(token.to_string())
    }

    fn save(&self, token: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)
    }

    fn clear(&self) -> std::io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// Session lifecycle manager
///
/// Init loads a persisted token and drops it when it no longer decodes;
/// logout and 401-invalidations clear both the store and the in-memory
/// session.
pub struct SessionManager {
    store: Box<dyn TokenStore>,
    current: RwLock<Option<Session>>,
}

impl SessionManager {
    pub fn new(store: Box<dyn TokenStore>) -> Self {
        Self {
            store,
            current: RwLock::new(None),
        }
    }

    /// In-memory manager for tools that never persist a session
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryTokenStore::default()))
    }

    /// Load the persisted token, if any. An invalid or expired token is
    /// removed from the store and reads as logged-out.
    pub fn init(&self) -> Option<Session> {
        let token = self.store.load()?;
        match Session::from_token(token) {
            Ok(session) => {
                tracing::info!(username = session.username(), "session restored");
                *self.current.write().expect("session lock poisoned") = Some(session.clone());
                Some(session)
            }
            Err(e) => {
                tracing::warn!(error = %e, "persisted token rejected, clearing");
                let _ = self.store.clear();
                None
            }
        }
    }

    /// Record a successful login: decode, persist, set current
    pub fn login_succeeded(&self, token: &str) -> Result<Session, SessionError> {
        let session = Session::from_token(token)?;
        self.store.save(token)?;
        tracing::info!(username = session.username(), "session established");
        *self.current.write().expect("session lock poisoned") = Some(session.clone());
        Ok(session)
    }

    /// Explicit logout: clear the store and the in-memory session
    pub fn logout(&self) {
        let _ = self.store.clear();
        *self.current.write().expect("session lock poisoned") = None;
        tracing::info!("session cleared");
    }

    /// The backend rejected our token (401): clear everything and force
    /// re-authentication
    pub fn invalidate(&self) {
        tracing::warn!("session invalidated by backend");
        self.logout();
    }

    /// Current session, if any
    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .expect("session lock poisoned")
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }
}
