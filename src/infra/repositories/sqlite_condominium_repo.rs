use crate::domain::{models::condominium::Condominium, ports::CondominiumRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteCondominiumRepo {
    pool: SqlitePool,
}

impl SqliteCondominiumRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CondominiumRepository for SqliteCondominiumRepo {
    async fn create(&self, condominium: &Condominium) -> Result<Condominium, AppError> {
        sqlx::query_as::<_, Condominium>(
            "INSERT INTO condominiums (id, name, address, timezone, created_at) VALUES (?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(&condominium.id)
            .bind(&condominium.name)
            .bind(&condominium.address)
            .bind(&condominium.timezone)
            .bind(condominium.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Condominium>, AppError> {
        sqlx::query_as::<_, Condominium>("SELECT * FROM condominiums WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Condominium>, AppError> {
        sqlx::query_as::<_, Condominium>("SELECT * FROM condominiums ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
