use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Condominium {
    pub id: String,
    pub name: String,
    pub address: String,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
}

impl Condominium {
    pub fn new(name: String, address: String, timezone: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            address,
            timezone,
            created_at: Utc::now(),
        }
    }

    /// Calendar days for this condominium's spots are evaluated in this zone.
    pub fn tz(&self) -> Option<Tz> {
        self.timezone.parse().ok()
    }
}
