pub mod condominium;
pub mod health;
pub mod reservation;
pub mod resident;
pub mod spot;
