use std::sync::Arc;
use crate::domain::models::user::{NewResidentParams, User, UserStatus};
use crate::domain::ports::{CondominiumRepository, UserRepository};
use crate::error::AppError;

pub struct ResidentService {
    users: Arc<dyn UserRepository>,
    condominiums: Arc<dyn CondominiumRepository>,
}

impl ResidentService {
    pub fn new(users: Arc<dyn UserRepository>, condominiums: Arc<dyn CondominiumRepository>) -> Self {
        Self { users, condominiums }
    }

    pub async fn register_resident(&self, params: NewResidentParams) -> Result<User, AppError> {
        if self.condominiums.find_by_id(&params.condominium_id).await?.is_none() {
            return Err(AppError::NotFound("Condominium not found".into()));
        }

        if self.users.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".into()));
        }

        self.users.create(&User::new_resident(params)).await
    }

    pub async fn list_pending(&self, manager: &User) -> Result<Vec<User>, AppError> {
        if !manager.is_manager() || !manager.is_approved() {
            return Err(AppError::Forbidden("Only managers can review registrations".into()));
        }
        self.users.list_pending(manager.condominium_id.as_deref()).await
    }

    pub async fn approve(&self, manager: &User, user_id: &str) -> Result<User, AppError> {
        self.decide(manager, user_id, UserStatus::Approved).await
    }

    pub async fn reject(&self, manager: &User, user_id: &str) -> Result<User, AppError> {
        self.decide(manager, user_id, UserStatus::Rejected).await
    }

    async fn decide(&self, manager: &User, user_id: &str, status: UserStatus) -> Result<User, AppError> {
        let target = self.users.find_by_id(user_id).await?
            .ok_or(AppError::NotFound("User not found".into()))?;

        let condominium_id = target.condominium_id.as_deref().unwrap_or_default();
        if !manager.can_manage(condominium_id) {
            return Err(AppError::Forbidden("Only managers of this condominium can review registrations".into()));
        }

        if target.status != UserStatus::Pending {
            return Err(AppError::Conflict("Registration already reviewed".into()));
        }

        self.users.update_status(&target.id, status).await
    }
}
