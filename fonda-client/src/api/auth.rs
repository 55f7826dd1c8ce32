//! Auth and account management API

use crate::{ClientResult, HttpClient};
use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Self-service customer registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Admin-assisted employee account creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistedRegisterRequest {
    pub username: String,
    /// Role wire name, e.g. "ROLE_WAITER"
    pub role_name: String,
    pub employee_name: String,
    pub employee_position: String,
}

/// Admin password reset result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporaryPassword {
    pub username: String,
    pub temporary_password: String,
}

#[derive(Debug, Serialize)]
struct ChangePasswordRequest<'a> {
    new_password: &'a str,
}

#[derive(Debug, Serialize)]
struct ResetPasswordRequest<'a> {
    username: &'a str,
}

/// Auth API service
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    http: &'a HttpClient,
}

impl<'a> AuthApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.http.post("api/auth/login", &request).await
    }

    /// Register a new customer account
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        self.http.post_unit("api/auth/register", request).await
    }

    /// Change the current account's password
    pub async fn change_password(&self, new_password: &str) -> ClientResult<()> {
        self.http
            .post_unit(
                "api/management/change-password",
                &ChangePasswordRequest { new_password },
            )
            .await
    }

    /// Reset a user's password (admin), returning the temporary password
    pub async fn reset_password(&self, username: &str) -> ClientResult<TemporaryPassword> {
        self.http
            .post(
                "api/management/reset-password",
                &ResetPasswordRequest { username },
            )
            .await
    }

    /// Create an employee login together with its employee record (admin)
    pub async fn create_employee_account(
        &self,
        request: &AssistedRegisterRequest,
    ) -> ClientResult<()> {
        self.http
            .post_unit("api/management/users/create-assisted", request)
            .await
    }
}
