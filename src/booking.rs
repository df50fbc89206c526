// Booking data model: the trip record and its fixed-variant fields

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type BookingId = u64;

// Ordered pair of location names. Construction never validates; the registry
// rejects same origin/destination pairs at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    // Exact, case-sensitive comparison
    pub fn is_loop(&self) -> bool {
        self.origin == self.destination
    }
}

impl<O: Into<String>, D: Into<String>> From<(O, D)> for Route {
    fn from((origin, destination): (O, D)) -> Self {
        Route::new(origin, destination)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

// Only Flight is ever assigned today; Train and Bus have no creation path yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TravelType {
    #[default]
    Flight,
    Train,
    Bus,
}

impl fmt::Display for TravelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TravelType::Flight => "Flight",
            TravelType::Train => "Train",
            TravelType::Bus => "Bus",
        };
        f.write_str(label)
    }
}

// Booking lifecycle. Booked -> Cancelled is the only reachable transition;
// nothing produces Pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Booked,
    Cancelled,
    Pending,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 3] = [
        BookingStatus::Booked,
        BookingStatus::Cancelled,
        BookingStatus::Pending,
    ];

    // Cancelling is unconditional, so an already cancelled booking stays cancelled
    pub fn cancel(&mut self) {
        *self = BookingStatus::Cancelled;
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Booked => "booked",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub name: String,
    pub route: Route,
    pub travel_type: TravelType,
    pub status: BookingStatus,
    pub meal_preference: Option<String>,
    pub booked_at: DateTime<Utc>,
}

impl Booking {
    pub fn is_cancelled(&self) -> bool {
        matches!(self.status, BookingStatus::Cancelled)
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking #{}: {} ({}) {} [{}], meal: {}",
            self.id,
            self.name,
            self.travel_type,
            self.route,
            self.status,
            self.meal_preference.as_deref().unwrap_or("not specified"),
        )
    }
}

// Anything the registry can resolve to a booking id: a bare id or a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRef(pub BookingId);

impl BookingRef {
    pub fn id(&self) -> BookingId {
        self.0
    }
}

impl From<BookingId> for BookingRef {
    fn from(id: BookingId) -> Self {
        BookingRef(id)
    }
}

impl From<&Booking> for BookingRef {
    fn from(booking: &Booking) -> Self {
        BookingRef(booking.id)
    }
}

impl From<Booking> for BookingRef {
    fn from(booking: Booking) -> Self {
        BookingRef(booking.id)
    }
}
