//! Shared utilities and common types for ReptileCare.
//!
//! This crate provides common functionality used across all other crates:
//! - Field validators for `validator` derives
//! - Inclusive calendar date ranges
//! - Currency formatting for display

pub mod date_range;
pub mod money;
pub mod validation;
