// Booking registry: the authoritative in-memory list of bookings plus the id counter.
// Route violations are errors the caller must handle; unknown ids are reported as
// plain values (Option, Lookup::Missing, CancelOutcome::NotFound) and logged.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::booking::{Booking, BookingId, BookingRef, BookingStatus, Route, TravelType};

pub const DEFAULT_MEAL_PREFERENCE: &str = "Vegetarian";

// Error types for registry operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Invalid route: origin and destination are both '{}'", .0.origin)]
    InvalidRoute(Route),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Booking ids exhausted after id {0}")]
    IdsExhausted(BookingId),
}

// Registry configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub first_id: BookingId,
    pub default_meal_preference: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            first_id: 1,
            default_meal_preference: DEFAULT_MEAL_PREFERENCE.to_string(),
        }
    }
}

impl RegistryConfig {
    // Missing fields fall back to the defaults
    pub fn from_json(raw: &str) -> Result<Self, RegistryError> {
        let config: RegistryConfig =
            serde_json::from_str(raw).map_err(|e| RegistryError::InvalidConfig(e.to_string()))?;

        if config.first_id == 0 {
            return Err(RegistryError::InvalidConfig(
                "first_id must be a positive integer".to_string(),
            ));
        }

        Ok(config)
    }
}

// Per-id result of a listing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a Booking),
    Missing(BookingId),
}

impl<'a> Lookup<'a> {
    pub fn id(&self) -> BookingId {
        match self {
            Lookup::Found(booking) => booking.id,
            Lookup::Missing(id) => *id,
        }
    }

    pub fn booking(&self) -> Option<&'a Booking> {
        match *self {
            Lookup::Found(booking) => Some(booking),
            Lookup::Missing(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    Cancelled(BookingId),
    NotFound(BookingId),
}

impl CancelOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CancelOutcome::Cancelled(_))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub total: usize,
    pub booked: usize,
    pub cancelled: usize,
    pub pending: usize,
}

impl BookingSummary {
    pub fn count(&self, status: BookingStatus) -> usize {
        match status {
            BookingStatus::Booked => self.booked,
            BookingStatus::Cancelled => self.cancelled,
            BookingStatus::Pending => self.pending,
        }
    }
}

impl fmt::Display for BookingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total bookings: {} (booked: {}, cancelled: {}, pending: {})",
            self.total, self.booked, self.cancelled, self.pending
        )
    }
}

#[derive(Debug, Clone)]
pub struct BookingRegistry {
    bookings: Vec<Booking>,
    next_id: BookingId,
    config: RegistryConfig,
}

impl Default for BookingRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl BookingRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            bookings: Vec::new(),
            next_id: config.first_id.max(1),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // Drop every booking and restart numbering from the configured first id
    pub fn reset(&mut self) {
        debug!(dropped = self.bookings.len(), "Resetting booking registry");
        self.bookings.clear();
        self.next_id = self.config.first_id.max(1);
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    // Insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter()
    }

    // Create a flight booking. A route whose origin equals its destination is
    // rejected and does not consume an id.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        route: impl Into<Route>,
        meal_preference: Option<&str>,
    ) -> Result<Booking, RegistryError> {
        let route = route.into();
        if route.is_loop() {
            return Err(RegistryError::InvalidRoute(route));
        }

        let meal_preference = meal_preference
            .unwrap_or(self.config.default_meal_preference.as_str())
            .to_string();

        // Ids are never reused, so the counter has to stay ahead of the id handed out
        let id = self.next_id;
        let next_id = id
            .checked_add(1)
            .ok_or(RegistryError::IdsExhausted(id))?;

        let booking = Booking {
            id,
            name: name.into(),
            route,
            travel_type: TravelType::Flight,
            status: BookingStatus::Booked,
            meal_preference: Some(meal_preference),
            booked_at: Utc::now(),
        };
        self.next_id = next_id;

        info!(booking_id = booking.id, name = %booking.name, "Booking created");
        self.bookings.push(booking.clone());

        Ok(booking)
    }

    pub fn find_by_id(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|booking| booking.id == id)
    }

    fn lookup(&self, id: BookingId) -> Lookup<'_> {
        match self.find_by_id(id) {
            Some(booking) => Lookup::Found(booking),
            None => {
                warn!(booking_id = id, "Booking not found");
                Lookup::Missing(id)
            }
        }
    }

    // With no ids every booking is yielded in insertion order. Otherwise each
    // requested id is resolved on its own, so a miss never stops the listing.
    pub fn list<'a>(&'a self, ids: &'a [BookingId]) -> impl Iterator<Item = Lookup<'a>> + 'a {
        let all = ids
            .is_empty()
            .then(move || self.bookings.iter().map(Lookup::Found));
        let selected =
            (!ids.is_empty()).then(move || ids.iter().map(move |&id| self.lookup(id)));

        all.into_iter()
            .flatten()
            .chain(selected.into_iter().flatten())
    }

    pub fn cancel(&mut self, target: impl Into<BookingRef>) -> CancelOutcome {
        let id = target.into().id();

        match self.bookings.iter_mut().find(|booking| booking.id == id) {
            Some(booking) => {
                booking.status.cancel();
                info!(booking_id = id, "Booking cancelled");
                CancelOutcome::Cancelled(id)
            }
            None => {
                warn!(booking_id = id, "Cannot cancel, booking not found");
                CancelOutcome::NotFound(id)
            }
        }
    }

    // Full scan on every call
    pub fn summarize(&self) -> BookingSummary {
        self.bookings
            .iter()
            .fold(BookingSummary::default(), |mut summary, booking| {
                summary.total += 1;
                match booking.status {
                    BookingStatus::Booked => summary.booked += 1,
                    BookingStatus::Cancelled => summary.cancelled += 1,
                    BookingStatus::Pending => summary.pending += 1,
                }
                summary
            })
    }

    pub fn query_by_status(&self, status: BookingStatus) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|booking| booking.status == status)
            .cloned()
            .collect()
    }
}
