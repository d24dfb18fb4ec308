use crate::{error::BookingError, slots::available_slots, types::Booking};
use std::collections::HashSet;

pub trait BookingBackend: Clone + Send + Sync + 'static {
    /// All bookings made for `date`.
    fn bookings(&self, date: &str) -> Result<Vec<Booking>, BookingError>;

    /// Stores `booking` unless its date and time are already taken.
    fn book(&self, booking: Booking) -> Result<Booking, BookingError>;

    fn available_times(&self, date: &str) -> Result<Vec<String>, BookingError> {
        let booked_times: HashSet<String> = self
            .bookings(date)?
            .into_iter()
            .map(|booking| booking.time)
            .collect();
        Ok(available_slots(date, &booked_times))
    }
}
