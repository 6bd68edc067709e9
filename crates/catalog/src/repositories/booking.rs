//! Booking repository.

use domain::models::Booking;
use std::sync::Arc;

/// Repository for booking records.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    bookings: Arc<[Booking]>,
}

impl BookingRepository {
    pub fn new(bookings: impl Into<Arc<[Booking]>>) -> Self {
        Self {
            bookings: bookings.into(),
        }
    }

    pub fn all(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn count(&self) -> usize {
        self.bookings.len()
    }
}
