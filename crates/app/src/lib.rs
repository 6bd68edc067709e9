//! ReptileCare application layer.
//!
//! Wires configuration, logging, metrics and the seeded catalog into the
//! booking, customer and admin screen controllers.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod screens;

pub use app::App;
pub use config::Config;
pub use error::AppError;
