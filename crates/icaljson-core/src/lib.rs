//! Shared building blocks for the icaljson workspace: error type, settings,
//! build information and constants.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod error;
