//! Screen controllers.
//!
//! Each controller holds the state of one screen independently of any UI
//! toolkit and reports action outcomes through a [`NotificationSink`].
//!
//! [`NotificationSink`]: domain::services::NotificationSink

pub mod admin;
pub mod booking;
pub mod customer;

pub use admin::{AdminDashboard, AdminOverview};
pub use booking::BookingPage;
pub use customer::{CustomerDashboard, CustomerSnapshot};
