use crate::domain::models::reservation::Reservation;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A reservation with its weak spot reference resolved at read time.
#[derive(Serialize)]
pub struct RentalRecord {
    pub id: String,
    pub spot_id: String,
    pub spot_number: Option<String>,
    pub spot_owner_id: Option<String>,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl RentalRecord {
    pub fn new(reservation: Reservation, spot_number: Option<String>, spot_owner_id: Option<String>) -> Self {
        Self {
            id: reservation.id,
            spot_id: reservation.spot_id,
            spot_number,
            spot_owner_id,
            user_id: reservation.user_id,
            start_time: reservation.start_time,
            end_time: reservation.end_time,
            created_at: reservation.created_at,
        }
    }
}
