//! Pinboard Identity - user accounts for a social bookmarking backend
//!
//! This crate holds the user identity core: self-validating value objects,
//! the `User` aggregate with its soft-delete lifecycle, creation and sparse
//! update rules, and the handlers that drive them through ports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
