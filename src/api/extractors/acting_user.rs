use axum::{
    extract::{FromRequestParts, FromRef},
    http::{request::Parts, StatusCode},
};
use crate::state::AppState;
use crate::domain::models::user::User;
use std::sync::Arc;
use tracing::{debug, Span};

pub const USER_ID_HEADER: &str = "X-User-Id";

/// The approved user a request acts on behalf of.
///
/// Identity arrives already verified from the fronting auth layer in the
/// `X-User-Id` header; this only resolves it and enforces approval.
pub struct ActingUser(pub User);

impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts.headers.get(USER_ID_HEADER)
            .ok_or(StatusCode::UNAUTHORIZED)?
            .to_str()
            .map_err(|_| StatusCode::UNAUTHORIZED)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let user = app_state.user_repo.find_by_id(user_id).await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        if !user.is_approved() {
            debug!(user_id = %user.id, status = ?user.status, "Rejected request from unapproved user");
            return Err(StatusCode::FORBIDDEN);
        }

        Span::current().record("user_id", &user.id);
        if let Some(condominium_id) = &user.condominium_id {
            Span::current().record("condominium_id", condominium_id);
        }

        Ok(ActingUser(user))
    }
}

/// An [`ActingUser`] that is also a manager.
pub struct ManagerUser(pub User);

impl<S> FromRequestParts<S> for ManagerUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ActingUser(user) = ActingUser::from_request_parts(parts, state).await?;
        if !user.is_manager() {
            return Err(StatusCode::FORBIDDEN);
        }
        Ok(ManagerUser(user))
    }
}
