//! Domain layer for ReptileCare.
//!
//! This crate contains:
//! - Domain models (Pet, Booking, DailyReport, ServicePackage, settings, export requests)
//! - Business logic services (pricing, filtering, aggregation, export, settings drafts)
//! - Domain error types

pub mod models;
pub mod services;
