// Demo driver: seeds a registry and logs every outcome

use anyhow::Result;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use travel_booking_registry::{
    BookingRegistry, BookingStatus, CancelOutcome, Lookup, RegistryConfig, RegistryError,
};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travel_booking_registry=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut registry = BookingRegistry::new(RegistryConfig::default());

    let john = registry.create("John Doe", ("New York", "London"), None)?;
    info!("{}", john);
    let jane = registry.create("Jane Smith", ("Paris", "Berlin"), Some("Business"))?;
    info!("{}", jane);

    // Same origin and destination, handled here instead of aborting the run
    match registry.create("X", ("Tokyo", "Tokyo"), None) {
        Ok(booking) => info!("{}", booking),
        Err(e @ RegistryError::InvalidRoute(_)) => error!("Booking rejected: {}", e),
        Err(e) => return Err(e.into()),
    }

    info!("All bookings:");
    for lookup in registry.list(&[]) {
        if let Lookup::Found(booking) = lookup {
            info!("  {}", booking);
        }
    }

    info!("Selected bookings:");
    for lookup in registry.list(&[2, 99]) {
        match lookup {
            Lookup::Found(booking) => info!("  {}", booking),
            Lookup::Missing(id) => warn!("  Booking #{} not found", id),
        }
    }

    for target in [john.id, 42] {
        match registry.cancel(target) {
            CancelOutcome::Cancelled(id) => info!("Booking #{} cancelled", id),
            CancelOutcome::NotFound(id) => warn!("Booking #{} not found, nothing cancelled", id),
        }
    }

    for status in BookingStatus::ALL {
        let bookings = registry.query_by_status(status);
        info!("{} bookings: {}", status, bookings.len());
        for booking in &bookings {
            info!("  {}", booking);
        }
    }

    let summary = registry.summarize();
    info!("{}", summary);
    info!("Summary: {}", serde_json::to_string(&summary)?);

    Ok(())
}
