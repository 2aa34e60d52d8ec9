//! Medical frailty exemption screening.
//!
//! The [`eligibility`] module holds the hybrid determination engine; the remaining modules carry
//! the configuration, error and telemetry plumbing shared with the API service.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod telemetry;
