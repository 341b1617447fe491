use crate::domain::models::spot::{Recurrence, SpotCategory};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateCondominiumRequest {
    pub name: String,
    pub address: String,
    pub timezone: Option<String>,
}

#[derive(Deserialize)]
pub struct RegisterResidentRequest {
    pub condominium_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub apartment: Option<String>,
}

#[derive(Deserialize)]
pub struct SlotRequest {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub is_recurring: bool,
    pub recurrence: Option<Recurrence>,
}

#[derive(Deserialize)]
pub struct CreateSpotRequest {
    pub number: String,
    pub category: SpotCategory,
    pub location: String,
    pub is_available: Option<bool>,
    #[serde(default)]
    pub slots: Vec<SlotRequest>,
}

#[derive(Deserialize)]
pub struct UpdateSpotRequest {
    pub number: Option<String>,
    pub category: Option<SpotCategory>,
    pub location: Option<String>,
    pub is_available: Option<bool>,
}

/// Dates (`YYYY-MM-DD`) or RFC 3339 instants; parsed in the condominium's timezone.
#[derive(Deserialize)]
pub struct RangeRequest {
    pub start: String,
    pub end: String,
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub condominium_id: Option<String>,
}
