use crate::model::id::CourtId;

/// Court data resolved from the courts service during validation. Only
/// enabled courts reach this type; the client rejects disabled ones.
/// The listed price is the full price of one slot, not a per-minute rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Court {
    pub id: CourtId,
    pub name: String,
    pub category: String,
    pub price: f64,
}
