use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::RegisterResidentRequest;
use crate::api::extractors::acting_user::ManagerUser;
use crate::domain::models::user::NewResidentParams;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn register_resident(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterResidentRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.full_name.trim().is_empty() || !payload.email.contains('@') {
        return Err(AppError::Validation("Full name and a valid email are required".into()));
    }

    let created = state.resident_service.register_resident(NewResidentParams {
        condominium_id: payload.condominium_id,
        full_name: payload.full_name,
        email: payload.email.trim().to_lowercase(),
        phone: payload.phone,
        apartment: payload.apartment,
    }).await?;

    info!(condominium_id = ?created.condominium_id, "Resident registration pending: {}", created.id);
    Ok(Json(created))
}

pub async fn list_pending(
    State(state): State<Arc<AppState>>,
    ManagerUser(manager): ManagerUser,
) -> Result<impl IntoResponse, AppError> {
    let pending = state.resident_service.list_pending(&manager).await?;
    Ok(Json(pending))
}

pub async fn approve_resident(
    State(state): State<Arc<AppState>>,
    ManagerUser(manager): ManagerUser,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let approved = state.resident_service.approve(&manager, &user_id).await?;
    info!(manager_id = %manager.id, "Resident approved: {}", approved.id);
    Ok(Json(approved))
}

pub async fn reject_resident(
    State(state): State<Arc<AppState>>,
    ManagerUser(manager): ManagerUser,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let rejected = state.resident_service.reject(&manager, &user_id).await?;
    info!(manager_id = %manager.id, "Resident rejected: {}", rejected.id);
    Ok(Json(rejected))
}
