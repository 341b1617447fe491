use crate::domain::models::{
    condominium::Condominium,
    reservation::Reservation,
    spot::{AvailabilitySlot, ParkingSpot},
    user::{User, UserStatus},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait CondominiumRepository: Send + Sync {
    async fn create(&self, condominium: &Condominium) -> Result<Condominium, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Condominium>, AppError>;
    async fn list(&self) -> Result<Vec<Condominium>, AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn list_pending(&self, condominium_id: Option<&str>) -> Result<Vec<User>, AppError>;
    async fn update_status(&self, id: &str, status: UserStatus) -> Result<User, AppError>;
    /// Unknown users are not managers.
    async fn is_manager(&self, id: &str) -> Result<bool, AppError>;
}

/// Spots are returned with their slots loaded, ordered by slot start.
#[async_trait]
pub trait SpotRepository: Send + Sync {
    async fn create(&self, spot: &ParkingSpot) -> Result<ParkingSpot, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<ParkingSpot>, AppError>;
    async fn list_by_condominium(&self, condominium_id: &str) -> Result<Vec<ParkingSpot>, AppError>;
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<ParkingSpot>, AppError>;
    async fn update(&self, spot: &ParkingSpot) -> Result<ParkingSpot, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    async fn add_slot(&self, slot: &AvailabilitySlot) -> Result<AvailabilitySlot, AppError>;
    async fn find_slot(&self, spot_id: &str, slot_id: &str) -> Result<Option<AvailabilitySlot>, AppError>;
    async fn update_slot(&self, slot: &AvailabilitySlot) -> Result<AvailabilitySlot, AppError>;
    async fn delete_slot(&self, spot_id: &str, slot_id: &str) -> Result<(), AppError>;
}

/// Last-write-wins store; no isolation across calls.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn append(&self, reservation: &Reservation) -> Result<Reservation, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Reservation>, AppError>;
    /// Ordered by start time.
    async fn list_by_spot(&self, spot_id: &str) -> Result<Vec<Reservation>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Reservation>, AppError>;
    async fn list_by_spots(&self, spot_ids: &[String]) -> Result<Vec<Reservation>, AppError>;
    async fn remove(&self, id: &str) -> Result<(), AppError>;
}
