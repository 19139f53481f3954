use async_trait::async_trait;
use kernel::client::court::CourtClient;
use kernel::model::{court::Court, id::CourtId};
use reqwest::StatusCode;
use serde::Deserialize;
use shared::config::ApiConfig;
use shared::error::{AppError, AppResult};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct CourtClientImpl {
    client: reqwest::Client,
    base_url: String,
}

impl CourtClientImpl {
    pub fn new(cfg: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: cfg.base_url.clone(),
        }
    }
}

/// Wire shape of the courts service response.
#[derive(Debug, Deserialize)]
struct CourtDto {
    id: String,
    name: String,
    #[serde(rename = "type")]
    category: String,
    price: f64,
    #[serde(default)]
    available: bool,
}

impl From<CourtDto> for Court {
    fn from(value: CourtDto) -> Self {
        Court {
            id: value.id.into(),
            name: value.name,
            category: value.category,
            price: value.price,
        }
    }
}

#[async_trait]
impl CourtClient for CourtClientImpl {
    async fn validate_court(&self, court_id: &CourtId) -> AppResult<Court> {
        let url = format!("{}/courts/{}", self.base_url, court_id);

        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("error calling courts-api: {e}")))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::EntityNotFound("court not found".into()));
        }
        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "courts-api returned status: {}",
                response.status()
            )));
        }

        let court: CourtDto = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("error decoding courts-api response: {e}"))
        })?;

        if !court.available {
            return Err(AppError::UnprocessableEntity(
                "court not enabled for booking".into(),
            ));
        }

        Ok(court.into())
    }
}
