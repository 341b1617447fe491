use crate::domain::{models::spot::{AvailabilitySlot, ParkingSpot}, ports::SpotRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteSpotRepo {
    pool: SqlitePool,
}

impl SqliteSpotRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn load_slots(&self, spot_id: &str) -> Result<Vec<AvailabilitySlot>, AppError> {
        sqlx::query_as::<_, AvailabilitySlot>(
            "SELECT * FROM availability_slots WHERE spot_id = ? ORDER BY start_time ASC"
        )
            .bind(spot_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn with_slots(&self, spots: Vec<ParkingSpot>) -> Result<Vec<ParkingSpot>, AppError> {
        let mut loaded = Vec::with_capacity(spots.len());
        for mut spot in spots {
            spot.slots = self.load_slots(&spot.id).await?;
            loaded.push(spot);
        }
        Ok(loaded)
    }
}

#[async_trait]
impl SpotRepository for SqliteSpotRepo {
    async fn create(&self, spot: &ParkingSpot) -> Result<ParkingSpot, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let mut created = sqlx::query_as::<_, ParkingSpot>(
            "INSERT INTO parking_spots (id, condominium_id, number, category, location, is_available, owner_id, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&spot.id).bind(&spot.condominium_id).bind(&spot.number).bind(spot.category)
            .bind(&spot.location).bind(spot.is_available).bind(&spot.owner_id).bind(spot.created_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        for slot in &spot.slots {
            let inserted = sqlx::query_as::<_, AvailabilitySlot>(
                "INSERT INTO availability_slots (id, spot_id, start_time, end_time, is_recurring, recurrence)
                 VALUES (?, ?, ?, ?, ?, ?)
                 RETURNING *"
            )
                .bind(&slot.id).bind(&created.id).bind(slot.start_time).bind(slot.end_time)
                .bind(slot.is_recurring).bind(slot.recurrence)
                .fetch_one(&mut *tx).await.map_err(AppError::Database)?;
            created.slots.push(inserted);
        }

        tx.commit().await.map_err(AppError::Database)?;
        created.slots.sort_by_key(|s| s.start_time);
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ParkingSpot>, AppError> {
        let spot = sqlx::query_as::<_, ParkingSpot>("SELECT * FROM parking_spots WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        match spot {
            Some(mut spot) => {
                spot.slots = self.load_slots(&spot.id).await?;
                Ok(Some(spot))
            }
            None => Ok(None),
        }
    }

    async fn list_by_condominium(&self, condominium_id: &str) -> Result<Vec<ParkingSpot>, AppError> {
        let spots = sqlx::query_as::<_, ParkingSpot>(
            "SELECT * FROM parking_spots WHERE condominium_id = ? ORDER BY number ASC"
        )
            .bind(condominium_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        self.with_slots(spots).await
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<ParkingSpot>, AppError> {
        let spots = sqlx::query_as::<_, ParkingSpot>(
            "SELECT * FROM parking_spots WHERE owner_id = ? ORDER BY number ASC"
        )
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        self.with_slots(spots).await
    }

    async fn update(&self, spot: &ParkingSpot) -> Result<ParkingSpot, AppError> {
        let mut updated = sqlx::query_as::<_, ParkingSpot>(
            "UPDATE parking_spots SET number = ?, category = ?, location = ?, is_available = ?
             WHERE id = ?
             RETURNING *"
        )
            .bind(&spot.number).bind(spot.category).bind(&spot.location).bind(spot.is_available)
            .bind(&spot.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Spot not found".into()))?;

        updated.slots = self.load_slots(&updated.id).await?;
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM parking_spots WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Spot not found".into()));
        }
        Ok(())
    }

    async fn add_slot(&self, slot: &AvailabilitySlot) -> Result<AvailabilitySlot, AppError> {
        sqlx::query_as::<_, AvailabilitySlot>(
            "INSERT INTO availability_slots (id, spot_id, start_time, end_time, is_recurring, recurrence)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&slot.id).bind(&slot.spot_id).bind(slot.start_time).bind(slot.end_time)
            .bind(slot.is_recurring).bind(slot.recurrence)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_slot(&self, spot_id: &str, slot_id: &str) -> Result<Option<AvailabilitySlot>, AppError> {
        sqlx::query_as::<_, AvailabilitySlot>("SELECT * FROM availability_slots WHERE spot_id = ? AND id = ?")
            .bind(spot_id)
            .bind(slot_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_slot(&self, slot: &AvailabilitySlot) -> Result<AvailabilitySlot, AppError> {
        sqlx::query_as::<_, AvailabilitySlot>(
            "UPDATE availability_slots SET start_time = ?, end_time = ?, is_recurring = ?, recurrence = ?
             WHERE id = ? AND spot_id = ?
             RETURNING *"
        )
            .bind(slot.start_time).bind(slot.end_time).bind(slot.is_recurring).bind(slot.recurrence)
            .bind(&slot.id).bind(&slot.spot_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Slot not found".into()))
    }

    async fn delete_slot(&self, spot_id: &str, slot_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM availability_slots WHERE spot_id = ? AND id = ?")
            .bind(spot_id)
            .bind(slot_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Slot not found".into()));
        }
        Ok(())
    }
}
