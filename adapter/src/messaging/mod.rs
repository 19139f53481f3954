use async_trait::async_trait;
use kernel::messaging::{Event, EventPublisher};
use shared::config::MessagingConfig;
use shared::error::{AppError, AppResult};

/// Publishes reservation events to NATS subjects named after the
/// routing key, e.g. `reservation.create`.
#[derive(Clone)]
pub struct NatsEventPublisher {
    client: async_nats::Client,
}

impl NatsEventPublisher {
    pub async fn connect(cfg: &MessagingConfig) -> AppResult<Self> {
        let client = async_nats::connect(cfg.url.as_str()).await.map_err(|e| {
            AppError::ExternalServiceError(format!("failed to connect to nats: {e}"))
        })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl EventPublisher for NatsEventPublisher {
    async fn publish(&self, event: Event) -> AppResult<()> {
        let subject = event.routing_key();
        let payload = serde_json::to_vec(&event)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;

        self.client
            .publish(subject.clone(), payload.into())
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("failed to publish event: {e}"))
            })?;

        tracing::debug!(subject, entity_id = %event.entity_id, "published event");
        Ok(())
    }
}
