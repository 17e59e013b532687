//! Interpretation of calendar values against external data.

pub mod timezone;
