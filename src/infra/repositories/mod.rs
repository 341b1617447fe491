pub mod sqlite_condominium_repo;
pub mod sqlite_reservation_repo;
pub mod sqlite_spot_repo;
pub mod sqlite_user_repo;
