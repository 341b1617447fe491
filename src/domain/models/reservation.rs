use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A booked interval on a spot. Never updated in place; cancellation deletes it.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Reservation {
    pub id: String,
    pub spot_id: String,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(spot_id: String, user_id: String, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            spot_id,
            user_id,
            start_time,
            end_time,
            created_at: Utc::now(),
        }
    }
}
