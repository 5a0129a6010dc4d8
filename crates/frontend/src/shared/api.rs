//! REST-клиент коллекций поверх gloo-net.
//!
//! Один generic `RestApi<R>` на все агрегаты: путь берётся из
//! `Resource::RESOURCE`, ответ принимается как голый JSON или в обёртке
//! `{ "data": ... }`.

use std::marker::PhantomData;

use async_trait::async_trait;
use contracts::shared::envelope::ApiPayload;
use contracts::shared::error::ApiError;
use contracts::shared::list_view::{RecordApi, Resource};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::{api_url, record_url};
use crate::system::auth::context::Session;

pub struct RestApi<R> {
    session: Session,
    _marker: PhantomData<fn() -> R>,
}

impl<R> Clone for RestApi<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for RestApi<R> {}

impl<R: Resource> RestApi<R> {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            _marker: PhantomData,
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.check(response).await
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.check(response).await
    }

    /// Non-2xx -> ApiError; 401 additionally ends the session.
    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        let error = ApiError::from_status(status, message);
        if error.is_unauthorized() {
            log::warn!("{} rejected the token, signing out", R::RESOURCE);
            self.session.sign_out();
        }
        Err(error)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<ApiPayload<T>>()
        .await
        .map(ApiPayload::into_inner)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl<R: Resource> RecordApi<R> for RestApi<R> {
    async fn list(&self) -> Result<Vec<R>, ApiError> {
        let url = api_url(R::RESOURCE);
        log::debug!("GET {}", url);
        let response = self.send(Request::get(&url)).await?;
        let records: Vec<R> = decode(response).await?;
        log::debug!("{}: {} records", R::RESOURCE, records.len());
        Ok(records)
    }

    async fn get_by_id(&self, id: &str) -> Result<R, ApiError> {
        let url = record_url(R::RESOURCE, id);
        log::debug!("GET {}", url);
        let response = self.send(Request::get(&url)).await?;
        decode(response).await
    }

    async fn create(&self, draft: &R::Draft) -> Result<R, ApiError> {
        let url = api_url(R::RESOURCE);
        log::debug!("POST {}", url);
        let response = self.send_json(Request::post(&url), draft).await?;
        decode(response).await
    }

    async fn update(&self, id: &str, draft: &R::Draft) -> Result<R, ApiError> {
        let url = record_url(R::RESOURCE, id);
        log::debug!("PATCH {}", url);
        let response = self.send_json(Request::patch(&url), draft).await?;
        match decode(response).await {
            Ok(record) => Ok(record),
            // Some endpoints answer PATCH with a bare message
            Err(ApiError::Decode(e)) => {
                log::debug!("PATCH {} returned no record ({}), refetching", url, e);
                self.get_by_id(id).await
            }
            Err(e) => Err(e),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = record_url(R::RESOURCE, id);
        log::debug!("DELETE {}", url);
        self.send(Request::delete(&url)).await?;
        Ok(())
    }

    async fn set_field(&self, id: &str, field: &str, value: bool) -> Result<(), ApiError> {
        let url = record_url(R::RESOURCE, id);
        log::debug!("PATCH {} {}={}", url, field, value);
        let mut body = serde_json::Map::new();
        body.insert(field.to_string(), serde_json::Value::Bool(value));
        self.send_json(Request::patch(&url), &body).await?;
        Ok(())
    }
}
