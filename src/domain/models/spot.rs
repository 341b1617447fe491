use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum SpotCategory {
    Compact,
    Standard,
    Suv,
    Motorcycle,
}

/// Declared recurrence of a slot. Stored and echoed back, never expanded.
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct AvailabilitySlot {
    pub id: String,
    pub spot_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_recurring: bool,
    pub recurrence: Option<Recurrence>,
}

impl AvailabilitySlot {
    pub fn new(
        spot_id: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        is_recurring: bool,
        recurrence: Option<Recurrence>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            spot_id,
            start_time,
            end_time,
            is_recurring,
            recurrence,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ParkingSpot {
    pub id: String,
    pub condominium_id: String,
    pub number: String,
    pub category: SpotCategory,
    pub location: String,
    pub is_available: bool,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    /// Ordered by start. Loaded separately from the `availability_slots` table.
    #[sqlx(skip)]
    #[serde(default)]
    pub slots: Vec<AvailabilitySlot>,
}

pub struct NewSpotParams {
    pub condominium_id: String,
    pub owner_id: String,
    pub number: String,
    pub category: SpotCategory,
    pub location: String,
    pub is_available: bool,
}

impl ParkingSpot {
    pub fn new(params: NewSpotParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            condominium_id: params.condominium_id,
            number: params.number,
            category: params.category,
            location: params.location,
            is_available: params.is_available,
            owner_id: params.owner_id,
            created_at: Utc::now(),
            slots: Vec::new(),
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }
}
