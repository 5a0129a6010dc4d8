use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use super::record::ListRecord;
use crate::shared::error::ApiError;

/// Агрегат, который хранится на REST-бэкенде.
pub trait Resource: ListRecord + DeserializeOwned {
    /// Payload for create/update, without server-assigned fields
    type Draft: Serialize;

    /// Путь коллекции, например `/room-category`
    const RESOURCE: &'static str;
}

/// Операции бэкенда над коллекцией записей.
///
/// В браузере реализуется поверх gloo-net, в тестах - in-memory заглушкой.
#[async_trait(?Send)]
pub trait RecordApi<R: Resource> {
    async fn list(&self) -> Result<Vec<R>, ApiError>;

    async fn get_by_id(&self, id: &str) -> Result<R, ApiError>;

    async fn create(&self, draft: &R::Draft) -> Result<R, ApiError>;

    async fn update(&self, id: &str, draft: &R::Draft) -> Result<R, ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;

    /// Меняет одно булево поле записи (`{ field: value }`)
    async fn set_field(&self, id: &str, field: &str, value: bool) -> Result<(), ApiError>;
}
