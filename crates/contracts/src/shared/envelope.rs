use serde::{Deserialize, Serialize};

/// Тело ответа бэкенда.
///
/// Часть эндпоинтов отдаёт данные как есть, часть оборачивает их в
/// `{ "data": ... }` (иногда с `message`). Принимаем оба варианта.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiPayload<T> {
    Wrapped {
        data: T,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Bare(T),
}

impl<T> ApiPayload<T> {
    pub fn into_inner(self) -> T {
        match self {
            ApiPayload::Wrapped { data, .. } => data,
            ApiPayload::Bare(data) => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_and_bare() {
        let wrapped: ApiPayload<Vec<i32>> =
            serde_json::from_str(r#"{"data":[1,2,3],"message":"ok"}"#).unwrap();
        assert_eq!(wrapped.into_inner(), vec![1, 2, 3]);

        let bare: ApiPayload<Vec<i32>> = serde_json::from_str("[4,5]").unwrap();
        assert_eq!(bare.into_inner(), vec![4, 5]);
    }
}
