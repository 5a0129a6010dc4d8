use contracts::shared::error::ApiError;
use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Login with email and password, returns the issued token
pub async fn login(email: String, password: String) -> Result<String, ApiError> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/auth/login"))
        .json(&request)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::warn!("login rejected: HTTP {}", status);
        // 401 here means wrong credentials, not an expired session
        return Err(ApiError::Http {
            status,
            message: if body.is_empty() {
                "Invalid email or password".to_string()
            } else {
                body
            },
        });
    }

    let payload = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(payload.token())
}
