//! Deterministic, explainable decision core for menopause assessment
//! questionnaires, plus the configuration and telemetry plumbing the API
//! service builds on.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
