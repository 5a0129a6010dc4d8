use serde::{Deserialize, Serialize};

use crate::shared::envelope::ApiPayload;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenData {
    pub token: String,
}

/// Ответ на логин: `{ "data": { "token": "..." } }`, иногда без обёртки.
pub type LoginResponse = ApiPayload<TokenData>;

impl LoginResponse {
    pub fn token(self) -> String {
        self.into_inner().token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_forms() {
        let wrapped: LoginResponse =
            serde_json::from_str(r#"{"data":{"token":"abc"},"message":"Login successful"}"#)
                .unwrap();
        assert_eq!(wrapped.token(), "abc");

        let bare: LoginResponse = serde_json::from_str(r#"{"token":"xyz"}"#).unwrap();
        assert_eq!(bare.token(), "xyz");
    }
}
