use crate::model::id::UserId;

/// User data resolved from the users service during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl ReservationUser {
    /// Display name cached on the reservation record.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
