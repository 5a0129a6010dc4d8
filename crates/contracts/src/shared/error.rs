use thiserror::Error;

/// Ошибка вызова REST API
///
/// Единый тип ошибок для всех операций с бэкендом. Компоненты UI
/// превращают его в строку для уведомления; `Unauthorized` дополнительно
/// сбрасывает сессию.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("not authenticated")]
    Unauthorized,

    #[error("record not found")]
    NotFound,

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Maps a non-success HTTP status to an error.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => ApiError::Http {
                status,
                message: message.into(),
            },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ApiError::from_status(401, "x"), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404, "x"), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(500, "boom"),
            ApiError::Http {
                status: 500,
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_display() {
        let err = ApiError::from_status(503, "unavailable");
        assert_eq!(err.to_string(), "HTTP 503: unavailable");
        assert!(ApiError::Unauthorized.is_unauthorized());
    }
}
