//! Read-only repositories over loaded seed collections.
//!
//! Collections are immutable snapshots; cloning a repository shares them.

pub mod booking;
pub mod daily_report;
pub mod pet;
pub mod service;

pub use booking::BookingRepository;
pub use daily_report::DailyReportRepository;
pub use pet::PetRepository;
pub use service::ServiceCatalogRepository;
