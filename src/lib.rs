// In-memory travel booking registry

pub mod booking;
pub mod registry;
pub mod shared;

// Re-export key types for convenience
pub use booking::{Booking, BookingId, BookingRef, BookingStatus, Route, TravelType};
pub use registry::{
    BookingRegistry, BookingSummary, CancelOutcome, Lookup, RegistryConfig, RegistryError,
    DEFAULT_MEAL_PREFERENCE,
};
pub use shared::{ListEntry, SharedRegistry};
