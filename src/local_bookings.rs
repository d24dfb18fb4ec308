use crate::{backend::BookingBackend, error::BookingError, types::Booking};
use std::{
    collections::{hash_map::Entry, HashMap},
    sync::{Arc, Mutex, MutexGuard},
};
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SlotKey {
    date: String,
    time: String,
}

/// In-memory ledger. Bookings are lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct LocalBookings {
    bookings: Arc<Mutex<HashMap<SlotKey, Booking>>>,
}

impl LocalBookings {
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SlotKey, Booking>>, BookingError> {
        self.bookings.lock().map_err(|err| {
            error!(?err, "Booking ledger lock is poisoned");
            BookingError::Internal(err.to_string())
        })
    }
}

impl BookingBackend for LocalBookings {
    fn bookings(&self, date: &str) -> Result<Vec<Booking>, BookingError> {
        let mut bookings: Vec<Booking> = self
            .lock()?
            .values()
            .filter(|booking| booking.date == date)
            .cloned()
            .collect();
        bookings.sort_unstable_by(|a, b| a.time.cmp(&b.time));
        Ok(bookings)
    }

    fn book(&self, booking: Booking) -> Result<Booking, BookingError> {
        let key = SlotKey {
            date: booking.date.clone(),
            time: booking.time.clone(),
        };

        match self.lock()?.entry(key) {
            Entry::Occupied(_) => Err(BookingError::SlotConflict),
            Entry::Vacant(entry) => {
                info!(
                    date = %booking.date,
                    time = %booking.time,
                    guests = booking.guests,
                    "Booking stored"
                );
                Ok(entry.insert(booking).clone())
            }
        }
    }
}
