use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use crate::domain::models::reservation::Reservation;
use crate::domain::models::spot::{AvailabilitySlot, ParkingSpot};
use crate::error::ReservationError;

/// A requested booking interval. Not validated on construction; see [`DateRange::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Accepts RFC 3339 instants or bare `YYYY-MM-DD` dates (local midnight in `tz`).
    pub fn parse(start: &str, end: &str, tz: Tz) -> Result<Self, ReservationError> {
        let range = Self {
            start: parse_instant(start, tz)?,
            end: parse_instant(end, tz)?,
        };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), ReservationError> {
        if self.end <= self.start {
            return Err(ReservationError::InvalidRange);
        }
        Ok(())
    }

    /// Half-open overlap: `start < other_end && end > other_start`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start < end && self.end > start
    }
}

fn parse_instant(raw: &str, tz: Tz) -> Result<DateTime<Utc>, ReservationError> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ReservationError::InvalidRange)?;

    local_day_start(date, tz)
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or(ReservationError::InvalidRange)
}

/// First instant of `date` in `tz`. When midnight falls in a DST gap the day
/// starts at the first local time after the gap.
fn local_day_start(date: NaiveDate, tz: Tz) -> Option<DateTime<Tz>> {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..24 * 4).find_map(|step| {
        tz.from_local_datetime(&(midnight + Duration::minutes(15 * step))).earliest()
    })
}

/// Whether `slot` fully contains `range`, comparing calendar days in `tz`.
///
/// The slot's start time applies only on its first day and its end time only on
/// its last day; the days in between are fully available. A slot ending at the
/// start of a local day (midnight, or the end of a DST gap) covers that whole day.
pub fn slot_contains(slot: &AvailabilitySlot, range: &DateRange, tz: Tz) -> bool {
    let slot_start = slot.start_time.with_timezone(&tz);
    let slot_end = slot.end_time.with_timezone(&tz);
    let req_start = range.start.with_timezone(&tz);
    let req_end = range.end.with_timezone(&tz);

    let (first_day, last_day) = (slot_start.date_naive(), slot_end.date_naive());
    let (req_first_day, req_last_day) = (req_start.date_naive(), req_end.date_naive());

    if req_first_day < first_day || req_last_day > last_day {
        return false;
    }

    if req_first_day == first_day && req_start.time() < slot_start.time() {
        return false;
    }

    let end_bound = slot_end.time();
    let date_only = local_day_start(last_day, tz).is_some_and(|start| start == slot_end);
    if req_last_day == last_day && !date_only && req_end.time() > end_bound {
        return false;
    }

    true
}

/// True only for an enabled spot with at least one slot containing a valid `range`.
pub fn can_satisfy(spot: &ParkingSpot, range: &DateRange, tz: Tz) -> bool {
    if !spot.is_available || spot.slots.is_empty() {
        return false;
    }
    if range.validate().is_err() {
        return false;
    }
    spot.slots.iter().any(|slot| slot_contains(slot, range, tz))
}

/// First existing reservation overlapping `range`, if any.
pub fn find_conflict<'a>(existing: &'a [Reservation], range: &DateRange) -> Option<&'a Reservation> {
    existing.iter().find(|r| range.overlaps(r.start_time, r.end_time))
}
