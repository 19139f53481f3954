use crate::model::reservation::Reservation;
use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use shared::error::{AppError, AppResult};
use strum::Display;

const RESERVATION_ENTITY: &str = "reservation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventType {
    Create,
    Update,
    Cancel,
}

/// Envelope published to the event bus after a committed mutation.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub entity: String,
    pub entity_id: String,
    pub data: serde_json::Value,
    pub timestamp: i64,
}

impl Event {
    pub fn for_reservation(event_type: EventType, reservation: &Reservation) -> AppResult<Self> {
        let data = serde_json::to_value(reservation)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
        Ok(Self {
            event_type,
            entity: RESERVATION_ENTITY.to_string(),
            entity_id: reservation.id.to_string(),
            data,
            timestamp: Utc::now().timestamp(),
        })
    }

    /// Topic key the transport routes this event under.
    pub fn routing_key(&self) -> String {
        format!("{}.{}", RESERVATION_ENTITY, self.event_type)
    }
}

/// Best-effort publish capability: the caller logs failures and never rolls
/// back the mutation that preceded the publish.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: Event) -> AppResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::reservation::ReservationStatus;
    use chrono::NaiveDate;

    #[test]
    fn events_route_under_the_reservation_topic() {
        let reservation = Reservation {
            id: crate::model::id::ReservationId::new(),
            court_id: "c1".into(),
            user_id: 1.into(),
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            start_time: "10:00".into(),
            end_time: "11:00".into(),
            duration_minutes: 60,
            status: ReservationStatus::Confirmed,
            total_price: 100.0,
            court_name: "Court One".into(),
            user_name: "Alice Doe".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let event = Event::for_reservation(EventType::Create, &reservation).unwrap();
        assert_eq!(event.routing_key(), "reservation.create");
        assert_eq!(event.entity, "reservation");
        assert_eq!(event.entity_id, reservation.id.to_string());
        assert_eq!(event.data["status"], "confirmed");
        assert_eq!(event.data["start_time"], "10:00");
    }
}
