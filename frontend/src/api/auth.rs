use reqwest::Method;
use serde_json::json;

use super::{
    client::{ApiClient, ApiGroup, Bearer},
    types::{
        ApiError, LoginRequest, LoginResponse, RefreshResponse, RegisterRequest, TwoFactorSetup,
        VerifyTwoFactorRequest,
    },
};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.request_with(
            Method::POST,
            ApiGroup::Accounts,
            "/login/",
            Some(json!(request)),
            Bearer::Anonymous,
        )
        .await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.request_with::<serde_json::Value>(
            Method::POST,
            ApiGroup::Accounts,
            "/register/",
            Some(json!(request)),
            Bearer::Anonymous,
        )
        .await
        .map(|_| ())
    }

    pub async fn refresh_access_token(&self, refresh: &str) -> Result<RefreshResponse, ApiError> {
        self.request_with(
            Method::POST,
            ApiGroup::Accounts,
            "/token/refresh/",
            Some(json!({ "refresh": refresh })),
            Bearer::Anonymous,
        )
        .await
    }

    /// Requests the QR material for the pending two-factor session.
    pub async fn generate_two_factor(&self, pending_token: &str) -> Result<TwoFactorSetup, ApiError> {
        self.request_with(
            Method::POST,
            ApiGroup::Accounts,
            "/generate-2fa/",
            Some(json!({})),
            Bearer::Token(pending_token.to_string()),
        )
        .await
    }

    pub async fn verify_two_factor(
        &self,
        pending_token: &str,
        otp_token: &str,
    ) -> Result<LoginResponse, ApiError> {
        self.request_with(
            Method::POST,
            ApiGroup::Accounts,
            "/verify-2fa/",
            Some(json!(VerifyTwoFactorRequest {
                otp_token: otp_token.trim().to_string(),
            })),
            Bearer::Token(pending_token.to_string()),
        )
        .await
    }
}
