use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};

use crate::{
    backend::BookingBackend, configuration::Configuration, error::BookingError, types::Booking,
};

pub const TEST_ORIGIN: &str = "http://localhost:5173";

pub struct MockBookingBackendInner {
    pub success: AtomicBool,
    pub calls_to_bookings: AtomicU64,
    pub calls_to_book: AtomicU64,
    pub bookings: Mutex<Vec<Booking>>,
}

#[derive(Clone)]
pub struct MockBookingBackend(pub Arc<MockBookingBackendInner>);

impl MockBookingBackendInner {
    fn new() -> Self {
        Self {
            success: AtomicBool::new(true),
            calls_to_bookings: AtomicU64::default(),
            calls_to_book: AtomicU64::default(),
            bookings: Mutex::default(),
        }
    }
}

impl MockBookingBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockBookingBackendInner::new()))
    }

    fn result(&self) -> Result<(), BookingError> {
        match self.0.success.load(Ordering::SeqCst) {
            true => Ok(()),
            false => Err(BookingError::Internal("Supposed to fail".into())),
        }
    }
}

impl BookingBackend for MockBookingBackend {
    fn bookings(&self, date: &str) -> Result<Vec<Booking>, BookingError> {
        self.0.calls_to_bookings.fetch_add(1, Ordering::SeqCst);
        self.result()?;
        Ok(self
            .0
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|booking| booking.date == date)
            .cloned()
            .collect())
    }

    fn book(&self, booking: Booking) -> Result<Booking, BookingError> {
        self.0.calls_to_book.fetch_add(1, Ordering::SeqCst);
        self.result()?;
        self.0.bookings.lock().unwrap().push(booking.clone());
        Ok(booking)
    }
}

#[derive(Clone)]
pub struct TestConfiguration;

impl Configuration for TestConfiguration {
    fn port(&self) -> u16 {
        0
    }

    fn allowed_origins(&self) -> Vec<String> {
        vec![TEST_ORIGIN.into()]
    }
}
