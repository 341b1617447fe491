use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Resident,
    Manager,
}

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum UserStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub condominium_id: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub apartment: Option<String>,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

pub struct NewResidentParams {
    pub condominium_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub apartment: Option<String>,
}

impl User {
    /// Residents start out pending until a manager approves them.
    pub fn new_resident(params: NewResidentParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            condominium_id: Some(params.condominium_id),
            full_name: params.full_name,
            email: params.email,
            phone: params.phone,
            apartment: params.apartment,
            role: Role::Resident,
            status: UserStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn new_manager(full_name: String, email: String, condominium_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            condominium_id,
            full_name,
            email,
            phone: None,
            apartment: None,
            role: Role::Manager,
            status: UserStatus::Approved,
            created_at: Utc::now(),
        }
    }

    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }

    pub fn is_approved(&self) -> bool {
        self.status == UserStatus::Approved
    }

    /// Managers without a condominium oversee every condominium.
    pub fn can_manage(&self, condominium_id: &str) -> bool {
        self.is_manager()
            && self.is_approved()
            && self.condominium_id.as_deref().is_none_or(|c| c == condominium_id)
    }
}
