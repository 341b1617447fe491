use std::sync::Arc;
use chrono_tz::Tz;
use crate::domain::models::{reservation::Reservation, spot::ParkingSpot};
use crate::domain::ports::{
    CondominiumRepository, ReservationRepository, SpotRepository, UserRepository,
};
use crate::domain::services::availability::{can_satisfy, find_conflict, DateRange};
use crate::error::ReservationError;

/// Which reservations a history query should return.
pub enum HistoryScope<'a> {
    /// Every reservation on spots of this condominium.
    Condominium(&'a str),
    /// Reservations made by this user plus those on spots they own.
    Resident(&'a str),
}

/// Reserve and cancel workflows over the injected repositories.
///
/// Holds no state between calls. Does not log; callers decide what to surface.
pub struct ReservationService {
    spots: Arc<dyn SpotRepository>,
    reservations: Arc<dyn ReservationRepository>,
    users: Arc<dyn UserRepository>,
    condominiums: Arc<dyn CondominiumRepository>,
    default_tz: Tz,
}

impl ReservationService {
    pub fn new(
        spots: Arc<dyn SpotRepository>,
        reservations: Arc<dyn ReservationRepository>,
        users: Arc<dyn UserRepository>,
        condominiums: Arc<dyn CondominiumRepository>,
        default_tz: Tz,
    ) -> Self {
        Self { spots, reservations, users, condominiums, default_tz }
    }

    /// Timezone defining calendar days for a condominium's spots.
    pub async fn timezone_for(&self, condominium_id: &str) -> Tz {
        match self.condominiums.find_by_id(condominium_id).await {
            Ok(Some(condo)) => condo.tz().unwrap_or(self.default_tz),
            _ => self.default_tz,
        }
    }

    pub async fn can_satisfy(&self, spot: &ParkingSpot, range: &DateRange) -> bool {
        let tz = self.timezone_for(&spot.condominium_id).await;
        can_satisfy(spot, range, tz)
    }

    pub async fn reserve_by_id(
        &self,
        spot_id: &str,
        range: &DateRange,
        requester_id: &str,
    ) -> Result<Reservation, ReservationError> {
        let spot = self.spots.find_by_id(spot_id).await?
            .ok_or(ReservationError::SpotNotFound)?;
        self.reserve(&spot, range, requester_id).await
    }

    pub async fn reserve(
        &self,
        spot: &ParkingSpot,
        range: &DateRange,
        requester_id: &str,
    ) -> Result<Reservation, ReservationError> {
        range.validate()?;

        if spot.slots.is_empty() {
            return Err(ReservationError::NoAvailabilityDefined);
        }

        if !self.can_satisfy(spot, range).await {
            return Err(ReservationError::OutsideAvailability);
        }

        // Re-read right before the check. Narrows, but does not close, the
        // window for a concurrent append on a last-write-wins store.
        let existing = self.reservations.list_by_spot(&spot.id).await?;
        if find_conflict(&existing, range).is_some() {
            return Err(ReservationError::ConflictingReservation);
        }

        let reservation = Reservation::new(spot.id.clone(), requester_id.to_string(), range.start, range.end);
        Ok(self.reservations.append(&reservation).await?)
    }

    pub async fn cancel(&self, reservation_id: &str, requester_id: &str) -> Result<(), ReservationError> {
        let reservation = self.reservations.find_by_id(reservation_id).await?
            .ok_or(ReservationError::NotFound)?;

        if reservation.user_id != requester_id && !self.manages_reservation(&reservation, requester_id).await? {
            return Err(ReservationError::NotPermitted);
        }

        self.reservations.remove(&reservation.id).await?;
        Ok(())
    }

    /// Managers act only within their condominium. A reservation whose spot is
    /// gone can be cleared only by a manager without one.
    async fn manages_reservation(&self, reservation: &Reservation, requester_id: &str) -> Result<bool, ReservationError> {
        if !self.users.is_manager(requester_id).await? {
            return Ok(false);
        }
        let Some(manager) = self.users.find_by_id(requester_id).await? else {
            return Ok(false);
        };

        Ok(match self.spots.find_by_id(&reservation.spot_id).await? {
            Some(spot) => manager.can_manage(&spot.condominium_id),
            None => manager.condominium_id.is_none(),
        })
    }

    /// Spots of a condominium that can take `range` right now.
    pub async fn available_spots(
        &self,
        condominium_id: &str,
        range: &DateRange,
    ) -> Result<Vec<ParkingSpot>, ReservationError> {
        range.validate()?;
        let tz = self.timezone_for(condominium_id).await;

        let mut available = Vec::new();
        for spot in self.spots.list_by_condominium(condominium_id).await? {
            if !can_satisfy(&spot, range, tz) {
                continue;
            }
            let existing = self.reservations.list_by_spot(&spot.id).await?;
            if find_conflict(&existing, range).is_none() {
                available.push(spot);
            }
        }
        Ok(available)
    }

    /// Newest first.
    pub async fn rental_history(&self, scope: HistoryScope<'_>) -> Result<Vec<Reservation>, ReservationError> {
        let mut history = match scope {
            HistoryScope::Condominium(condominium_id) => {
                let spot_ids: Vec<String> = self.spots.list_by_condominium(condominium_id).await?
                    .into_iter()
                    .map(|s| s.id)
                    .collect();
                self.reservations.list_by_spots(&spot_ids).await?
            }
            HistoryScope::Resident(user_id) => {
                let owned: Vec<String> = self.spots.list_by_owner(user_id).await?
                    .into_iter()
                    .map(|s| s.id)
                    .collect();
                let mut rows = self.reservations.list_by_user(user_id).await?;
                for r in self.reservations.list_by_spots(&owned).await? {
                    if !rows.iter().any(|existing| existing.id == r.id) {
                        rows.push(r);
                    }
                }
                rows
            }
        };

        history.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(history)
    }
}
