use async_trait::async_trait;
use kernel::client::user::UserClient;
use kernel::model::{id::UserId, user::ReservationUser};
use reqwest::StatusCode;
use serde::Deserialize;
use shared::config::ApiConfig;
use shared::error::{AppError, AppResult};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct UserClientImpl {
    client: reqwest::Client,
    base_url: String,
}

impl UserClientImpl {
    pub fn new(cfg: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: cfg.base_url.clone(),
        }
    }
}

/// Wire shape of the users service response.
#[derive(Debug, Deserialize)]
struct UserDto {
    id: i64,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
}

impl From<UserDto> for ReservationUser {
    fn from(value: UserDto) -> Self {
        ReservationUser {
            id: value.id.into(),
            username: value.username,
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
        }
    }
}

#[async_trait]
impl UserClient for UserClientImpl {
    async fn validate_user(&self, user_id: UserId) -> AppResult<ReservationUser> {
        let url = format!("{}/users/{}", self.base_url, user_id);

        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("error calling users-api: {e}")))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::EntityNotFound("user not found".into()));
        }
        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "users-api returned status: {}",
                response.status()
            )));
        }

        let user: UserDto = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("error decoding users-api response: {e}"))
        })?;

        Ok(user.into())
    }
}
