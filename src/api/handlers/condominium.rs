use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateCondominiumRequest;
use crate::api::extractors::acting_user::ManagerUser;
use crate::domain::models::condominium::Condominium;
use crate::error::AppError;
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::info;

pub async fn create_condominium(
    State(state): State<Arc<AppState>>,
    ManagerUser(manager): ManagerUser,
    Json(payload): Json<CreateCondominiumRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }

    let timezone = match payload.timezone {
        Some(tz) => {
            tz.parse::<Tz>().map_err(|_| AppError::Validation(format!("Unknown timezone: {}", tz)))?;
            tz
        }
        None => state.config.default_timezone.name().to_string(),
    };

    let condominium = Condominium::new(payload.name, payload.address, timezone);
    let created = state.condominium_repo.create(&condominium).await?;

    info!(manager_id = %manager.id, "Condominium registered: {}", created.id);
    Ok(Json(created))
}

pub async fn list_condominiums(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let condominiums = state.condominium_repo.list().await?;
    Ok(Json(condominiums))
}

pub async fn get_condominium(
    State(state): State<Arc<AppState>>,
    Path(condominium_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let condominium = state.condominium_repo.find_by_id(&condominium_id).await?
        .ok_or(AppError::NotFound("Condominium not found".into()))?;
    Ok(Json(condominium))
}
