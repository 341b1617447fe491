pub mod availability;
pub mod reservation_service;
pub mod resident_service;
