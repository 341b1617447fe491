use std::sync::Arc;
use crate::domain::ports::{
    CondominiumRepository, ReservationRepository, SpotRepository, UserRepository,
};
use crate::domain::services::{
    reservation_service::ReservationService, resident_service::ResidentService,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub condominium_repo: Arc<dyn CondominiumRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub spot_repo: Arc<dyn SpotRepository>,
    pub reservation_repo: Arc<dyn ReservationRepository>,
    pub reservation_service: Arc<ReservationService>,
    pub resident_service: Arc<ResidentService>,
}

impl AppState {
    pub fn new(
        config: Config,
        condominium_repo: Arc<dyn CondominiumRepository>,
        user_repo: Arc<dyn UserRepository>,
        spot_repo: Arc<dyn SpotRepository>,
        reservation_repo: Arc<dyn ReservationRepository>,
    ) -> Self {
        let reservation_service = Arc::new(ReservationService::new(
            spot_repo.clone(),
            reservation_repo.clone(),
            user_repo.clone(),
            condominium_repo.clone(),
            config.default_timezone,
        ));
        let resident_service = Arc::new(ResidentService::new(user_repo.clone(), condominium_repo.clone()));

        Self {
            config,
            condominium_repo,
            user_repo,
            spot_repo,
            reservation_repo,
            reservation_service,
            resident_service,
        }
    }
}
