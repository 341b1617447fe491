use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{HistoryQuery, RangeRequest};
use crate::api::dtos::responses::RentalRecord;
use crate::api::extractors::acting_user::ActingUser;
use crate::api::handlers::spot::visible_spot;
use crate::domain::services::availability::DateRange;
use crate::domain::services::reservation_service::HistoryScope;
use crate::error::{AppError, ReservationError};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    ActingUser(user): ActingUser,
    Path(spot_id): Path<String>,
    Json(payload): Json<RangeRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("create_reservation: Starting for spot {}", spot_id);

    let spot = match visible_spot(&state, &user, &spot_id).await {
        Err(AppError::NotFound(_)) => return Err(ReservationError::SpotNotFound.into()),
        other => other?,
    };

    let tz = state.reservation_service.timezone_for(&spot.condominium_id).await;
    let range = DateRange::parse(&payload.start, &payload.end, tz)?;

    match state.reservation_service.reserve(&spot, &range, &user.id).await {
        Ok(created) => {
            info!(user_id = %user.id, start = %created.start_time, end = %created.end_time, "Reservation confirmed: {} for spot {}", created.id, spot.id);
            Ok(Json(created))
        }
        Err(e) => {
            warn!("Reservation rejected for spot {}: {}", spot.id, e);
            Err(e.into())
        }
    }
}

pub async fn list_spot_reservations(
    State(state): State<Arc<AppState>>,
    ActingUser(user): ActingUser,
    Path(spot_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let spot = visible_spot(&state, &user, &spot_id).await?;
    let reservations = state.reservation_repo.list_by_spot(&spot.id).await?;
    Ok(Json(reservations))
}

pub async fn rental_history(
    State(state): State<Arc<AppState>>,
    ActingUser(user): ActingUser,
    Query(query): Query<HistoryQuery>,
) -> Result<impl IntoResponse, AppError> {
    let scope = if user.is_manager() {
        let condominium_id = query.condominium_id.as_deref()
            .or(user.condominium_id.as_deref())
            .ok_or(AppError::Validation("condominium_id is required".into()))?;
        if !user.can_manage(condominium_id) {
            return Err(AppError::Forbidden("Not a manager of this condominium".into()));
        }
        HistoryScope::Condominium(condominium_id)
    } else {
        HistoryScope::Resident(&user.id)
    };

    let history = state.reservation_service.rental_history(scope).await?;

    let mut spots = HashMap::new();
    let mut records = Vec::with_capacity(history.len());
    for reservation in history {
        if !spots.contains_key(&reservation.spot_id) {
            let spot = state.spot_repo.find_by_id(&reservation.spot_id).await?;
            spots.insert(reservation.spot_id.clone(), spot);
        }
        let spot = spots.get(&reservation.spot_id).and_then(|s| s.as_ref());
        let number = spot.map(|s| s.number.clone());
        let owner = spot.map(|s| s.owner_id.clone());
        records.push(RentalRecord::new(reservation, number, owner));
    }

    Ok(Json(records))
}

pub async fn cancel_reservation(
    State(state): State<Arc<AppState>>,
    ActingUser(user): ActingUser,
    Path(reservation_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    match state.reservation_service.cancel(&reservation_id, &user.id).await {
        Ok(()) => {
            info!(user_id = %user.id, "Reservation cancelled: {}", reservation_id);
            Ok(Json(serde_json::json!({"status": "cancelled"})))
        }
        Err(e) => {
            warn!(user_id = %user.id, "Cancellation rejected for {}: {}", reservation_id, e);
            Err(e.into())
        }
    }
}
