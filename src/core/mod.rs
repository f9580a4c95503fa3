//! Core library components.
//!
//! This module contains the reusable logic for drawing secure key material
//! and encoding it for configuration files.

pub mod constants;
pub mod entropy;
pub mod secret;
pub mod strength;
pub mod types;
