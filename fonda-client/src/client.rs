//! Unified Fonda client facade
//!
//! Owns the transport, the session context, and the in-flight guard, and
//! hands out the per-resource API services. The original interceptor
//! behavior is explicit here: a 401 from any call goes through
//! [`FondaClient::dispose`], which clears the session and strips the
//! token from the transport; a 403 only warns.

use crate::api::{
    AssignmentsApi, AuthApi, CategoriesApi, CustomersApi, EmployeesApi, ProductsApi,
    ReservationsApi, SalesApi, TablesApi,
};
use crate::session::TokenStore;
use crate::{
    ClientConfig, ClientError, ClientResult, ErrorDisposition, HttpClient, InflightSet, Session,
    SessionManager,
};

/// Unified client for the Fonda backend
pub struct FondaClient {
    http: HttpClient,
    session: SessionManager,
    inflight: InflightSet,
}

impl FondaClient {
    /// Create a client whose session lives only in memory
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: config.build_http_client(),
            session: SessionManager::in_memory(),
            inflight: InflightSet::new(),
        }
    }

    /// Create a client with a persistent session store
    pub fn with_session_store(config: ClientConfig, store: Box<dyn TokenStore>) -> Self {
        Self {
            http: config.build_http_client(),
            session: SessionManager::new(store),
            inflight: InflightSet::new(),
        }
    }

    /// Restore a persisted session, attaching its token to the transport
    pub fn restore_session(&mut self) -> Option<Session> {
        let session = self.session.init()?;
        self.http = self.http.clone().with_token(session.token());
        Some(session)
    }

    /// Login and establish the session
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<Session> {
        let response = AuthApi::new(&self.http).login(username, password).await?;
        let session = self.session.login_succeeded(&response.token)?;
        self.http = self.http.clone().with_token(session.token());
        Ok(session)
    }

    /// Teardown: clear the session and strip the token
    pub fn logout(&mut self) {
        self.session.logout();
        self.http = self.http.clone().without_token();
    }

    /// Current session, if any
    pub fn session(&self) -> Option<Session> {
        self.session.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Top-level error handling: performs the session side effect for
    /// auth failures and reports what the caller should do with the
    /// error. Never retries.
    pub fn dispose(&mut self, error: &ClientError) -> ErrorDisposition {
        let disposition = error.disposition();
        if disposition == ErrorDisposition::ClearSession {
            self.session.invalidate();
            self.http = self.http.clone().without_token();
        }
        disposition
    }

    /// Raw transport access
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    // ==================== API services ====================

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.http)
    }

    pub fn customers(&self) -> CustomersApi<'_> {
        CustomersApi::new(&self.http)
    }

    pub fn employees(&self) -> EmployeesApi<'_> {
        EmployeesApi::new(&self.http)
    }

    pub fn tables(&self) -> TablesApi<'_> {
        TablesApi::new(&self.http)
    }

    pub fn categories(&self) -> CategoriesApi<'_> {
        CategoriesApi::new(&self.http)
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(&self.http)
    }

    pub fn sales(&self) -> SalesApi<'_> {
        SalesApi::new(&self.http, &self.inflight)
    }

    pub fn reservations(&self) -> ReservationsApi<'_> {
        ReservationsApi::new(&self.http, &self.inflight)
    }

    pub fn assignments(&self) -> AssignmentsApi<'_> {
        AssignmentsApi::new(&self.http)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Claims, FileTokenStore};
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn token() -> String {
        let claims = Claims {
            sub: "admin".to_string(),
            roles: vec!["ROLE_ADMIN".to_string()],
            must_change_password: false,
            exp: chrono::Utc::now().timestamp() + 3600,
            iat: chrono::Utc::now().timestamp(),
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(b"x")).unwrap()
    }

    #[test]
    fn test_unauthorized_disposal_clears_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        FileTokenStore::new(&path).save(&token()).unwrap();

        let mut client = FondaClient::with_session_store(
            ClientConfig::default(),
            Box::new(FileTokenStore::new(&path)),
        );
        assert!(client.restore_session().is_some());
        assert!(client.is_authenticated());
        assert!(client.http().token().is_some());

        let disposition = client.dispose(&ClientError::Unauthorized);
        assert_eq!(disposition, ErrorDisposition::ClearSession);
        assert!(!client.is_authenticated());
        assert!(client.http().token().is_none());
        // The persisted token is gone as well
        assert!(FileTokenStore::new(&path).load().is_none());
    }

    #[test]
    fn test_forbidden_disposal_keeps_session() {
        let mut client = FondaClient::new(ClientConfig::default());
        client.session.login_succeeded(&token()).unwrap();

        let disposition = client.dispose(&ClientError::Forbidden("no".into()));
        assert_eq!(disposition, ErrorDisposition::Warn);
        assert!(client.is_authenticated());
    }

    #[test]
    fn test_logout_strips_token() {
        let mut client = FondaClient::new(ClientConfig::default().with_token("abc"));
        assert!(client.http().token().is_some());
        client.logout();
        assert!(client.http().token().is_none());
        assert!(!client.is_authenticated());
    }
}
