use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateSpotRequest, RangeRequest, SlotRequest, UpdateSpotRequest};
use crate::api::extractors::acting_user::ActingUser;
use crate::domain::models::spot::{AvailabilitySlot, NewSpotParams, ParkingSpot};
use crate::domain::models::user::User;
use crate::domain::services::availability::DateRange;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

fn home_condominium(user: &User) -> Result<&str, AppError> {
    user.condominium_id.as_deref()
        .ok_or(AppError::Validation("User is not linked to a condominium".into()))
}

fn validate_slot(slot: &SlotRequest) -> Result<(), AppError> {
    if slot.end_time < slot.start_time {
        return Err(AppError::Validation("Slot end must not be before its start".into()));
    }
    if slot.recurrence.is_some() && !slot.is_recurring {
        return Err(AppError::Validation("Recurrence pattern requires is_recurring".into()));
    }
    Ok(())
}

/// Loads a spot the user may see: same condominium, or a manager over it.
pub(crate) async fn visible_spot(state: &AppState, user: &User, spot_id: &str) -> Result<ParkingSpot, AppError> {
    let spot = state.spot_repo.find_by_id(spot_id).await?
        .ok_or(AppError::NotFound("Spot not found".into()))?;

    let same_condominium = user.condominium_id.as_deref() == Some(spot.condominium_id.as_str());
    if !same_condominium && !user.can_manage(&spot.condominium_id) {
        return Err(AppError::Forbidden("Spot belongs to another condominium".into()));
    }
    Ok(spot)
}

async fn owned_spot(state: &AppState, user: &User, spot_id: &str) -> Result<ParkingSpot, AppError> {
    let spot = visible_spot(state, user, spot_id).await?;
    if !spot.is_owned_by(&user.id) {
        return Err(AppError::Forbidden("Only the owner can change this spot".into()));
    }
    Ok(spot)
}

pub async fn create_spot(
    State(state): State<Arc<AppState>>,
    ActingUser(user): ActingUser,
    Json(payload): Json<CreateSpotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let condominium_id = home_condominium(&user)?;
    if payload.number.trim().is_empty() {
        return Err(AppError::Validation("Spot number is required".into()));
    }
    for slot in &payload.slots {
        validate_slot(slot)?;
    }

    let mut spot = ParkingSpot::new(NewSpotParams {
        condominium_id: condominium_id.to_string(),
        owner_id: user.id.clone(),
        number: payload.number,
        category: payload.category,
        location: payload.location,
        is_available: payload.is_available.unwrap_or(true),
    });
    spot.slots = payload.slots.into_iter()
        .map(|s| AvailabilitySlot::new(spot.id.clone(), s.start_time, s.end_time, s.is_recurring, s.recurrence))
        .collect();

    let created = state.spot_repo.create(&spot).await?;
    info!(owner_id = %user.id, slots = created.slots.len(), "Spot registered: {}", created.id);
    Ok(Json(created))
}

pub async fn list_spots(
    State(state): State<Arc<AppState>>,
    ActingUser(user): ActingUser,
) -> Result<impl IntoResponse, AppError> {
    let condominium_id = home_condominium(&user)?;
    let spots = state.spot_repo.list_by_condominium(condominium_id).await?;
    Ok(Json(spots))
}

pub async fn list_my_spots(
    State(state): State<Arc<AppState>>,
    ActingUser(user): ActingUser,
) -> Result<impl IntoResponse, AppError> {
    let spots = state.spot_repo.list_by_owner(&user.id).await?;
    Ok(Json(spots))
}

pub async fn list_available_spots(
    State(state): State<Arc<AppState>>,
    ActingUser(user): ActingUser,
    Query(query): Query<RangeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let condominium_id = home_condominium(&user)?;
    let tz = state.reservation_service.timezone_for(condominium_id).await;
    let range = DateRange::parse(&query.start, &query.end, tz)?;

    let spots = state.reservation_service.available_spots(condominium_id, &range).await?;
    Ok(Json(spots))
}

pub async fn get_spot(
    State(state): State<Arc<AppState>>,
    ActingUser(user): ActingUser,
    Path(spot_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let spot = visible_spot(&state, &user, &spot_id).await?;
    Ok(Json(spot))
}

pub async fn update_spot(
    State(state): State<Arc<AppState>>,
    ActingUser(user): ActingUser,
    Path(spot_id): Path<String>,
    Json(payload): Json<UpdateSpotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut spot = owned_spot(&state, &user, &spot_id).await?;

    if let Some(number) = payload.number {
        if number.trim().is_empty() {
            return Err(AppError::Validation("Spot number is required".into()));
        }
        spot.number = number;
    }
    if let Some(category) = payload.category { spot.category = category; }
    if let Some(location) = payload.location { spot.location = location; }
    if let Some(is_available) = payload.is_available { spot.is_available = is_available; }

    let updated = state.spot_repo.update(&spot).await?;
    info!(available = updated.is_available, "Spot updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_spot(
    State(state): State<Arc<AppState>>,
    ActingUser(user): ActingUser,
    Path(spot_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let spot = visible_spot(&state, &user, &spot_id).await?;
    if !spot.is_owned_by(&user.id) && !user.can_manage(&spot.condominium_id) {
        warn!(user_id = %user.id, "Spot deletion denied: {}", spot.id);
        return Err(AppError::Forbidden("Only the owner or a manager can delete this spot".into()));
    }

    state.spot_repo.delete(&spot.id).await?;
    info!("Spot deleted: {}", spot.id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn add_slot(
    State(state): State<Arc<AppState>>,
    ActingUser(user): ActingUser,
    Path(spot_id): Path<String>,
    Json(payload): Json<SlotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let spot = owned_spot(&state, &user, &spot_id).await?;
    validate_slot(&payload)?;

    let slot = AvailabilitySlot::new(spot.id, payload.start_time, payload.end_time, payload.is_recurring, payload.recurrence);
    let created = state.spot_repo.add_slot(&slot).await?;
    info!(spot_id = %created.spot_id, "Availability slot added: {}", created.id);
    Ok(Json(created))
}

pub async fn update_slot(
    State(state): State<Arc<AppState>>,
    ActingUser(user): ActingUser,
    Path((spot_id, slot_id)): Path<(String, String)>,
    Json(payload): Json<SlotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let spot = owned_spot(&state, &user, &spot_id).await?;
    validate_slot(&payload)?;

    let mut slot = state.spot_repo.find_slot(&spot.id, &slot_id).await?
        .ok_or(AppError::NotFound("Slot not found".into()))?;
    slot.start_time = payload.start_time;
    slot.end_time = payload.end_time;
    slot.is_recurring = payload.is_recurring;
    slot.recurrence = payload.recurrence;

    let updated = state.spot_repo.update_slot(&slot).await?;
    Ok(Json(updated))
}

pub async fn delete_slot(
    State(state): State<Arc<AppState>>,
    ActingUser(user): ActingUser,
    Path((spot_id, slot_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let spot = owned_spot(&state, &user, &spot_id).await?;
    state.spot_repo.delete_slot(&spot.id, &slot_id).await?;
    info!(spot_id = %spot.id, "Availability slot deleted: {}", slot_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
