// Thread-safe handle over a single BookingRegistry.
// One lock guards the whole record set since every operation reads or writes all of it.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::booking::{Booking, BookingId, BookingRef, BookingStatus, Route};
use crate::registry::{
    BookingRegistry, BookingSummary, CancelOutcome, Lookup, RegistryConfig, RegistryError,
};

// Owned counterpart of Lookup, safe to hand out after the lock is released
#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry {
    Found(Booking),
    Missing(BookingId),
}

impl From<Lookup<'_>> for ListEntry {
    fn from(lookup: Lookup<'_>) -> Self {
        match lookup {
            Lookup::Found(booking) => ListEntry::Found(booking.clone()),
            Lookup::Missing(id) => ListEntry::Missing(id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<BookingRegistry>>,
}

impl SharedRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(BookingRegistry::new(config))),
        }
    }

    pub fn create(
        &self,
        name: impl Into<String>,
        route: impl Into<Route>,
        meal_preference: Option<&str>,
    ) -> Result<Booking, RegistryError> {
        self.inner.write().create(name, route, meal_preference)
    }

    pub fn find_by_id(&self, id: BookingId) -> Option<Booking> {
        self.inner.read().find_by_id(id).cloned()
    }

    pub fn list(&self, ids: &[BookingId]) -> Vec<ListEntry> {
        self.inner.read().list(ids).map(ListEntry::from).collect()
    }

    pub fn cancel(&self, target: impl Into<BookingRef>) -> CancelOutcome {
        self.inner.write().cancel(target)
    }

    pub fn summarize(&self) -> BookingSummary {
        self.inner.read().summarize()
    }

    pub fn query_by_status(&self, status: BookingStatus) -> Vec<Booking> {
        self.inner.read().query_by_status(status)
    }

    pub fn reset(&self) {
        self.inner.write().reset();
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl From<BookingRegistry> for SharedRegistry {
    fn from(registry: BookingRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }
}
