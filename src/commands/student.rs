//! Student Commands
//!
//! `StudentApi` over HTTP. On wasm32 reqwest goes through the browser's fetch.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Response;
use serde::de::DeserializeOwned;
use student_core::{
    classify_failure, failure_body, ApiError, ApiResult, DashboardConfig, Routes, StudentApi,
    StudentDraft, StudentId, StudentRecord,
};

#[derive(Debug, Clone)]
pub struct HttpStudentApi {
    client: reqwest::Client,
    routes: Routes,
}

impl HttpStudentApi {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            routes: Routes::new(&config.api_base_url),
        }
    }
}

fn network_error(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Pass 2xx responses through; classify everything else
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = failure_body(status.as_u16(), response.text().await);
    Err(classify_failure(status.as_u16(), content_type.as_deref(), &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    check_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl StudentApi for HttpStudentApi {
    async fn list(&self) -> ApiResult<Vec<StudentRecord>> {
        let url = self.routes.list();
        log::debug!("[API] GET {}", url);
        let response = self.client.get(&url).send().await.map_err(network_error)?;
        read_json(response).await
    }

    async fn create(&self, draft: &StudentDraft) -> ApiResult<StudentRecord> {
        let url = self.routes.create();
        log::debug!("[API] POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    async fn update(&self, id: StudentId, draft: &StudentDraft) -> ApiResult<StudentRecord> {
        let url = self.routes.update(id);
        log::debug!("[API] PUT {}", url);
        let response = self
            .client
            .put(&url)
            .json(draft)
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    async fn delete(&self, id: StudentId) -> ApiResult<()> {
        let url = self.routes.delete(id);
        log::debug!("[API] DELETE {}", url);
        let response = self.client.delete(&url).send().await.map_err(network_error)?;
        check_status(response).await.map(|_| ())
    }
}
