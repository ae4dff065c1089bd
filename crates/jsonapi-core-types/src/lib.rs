//! Core types shared across the JSON:API validation facilities
//!
//! This crate provides foundational constants used by both the validator
//! and the logging facility:
//!
//! - **Document members**: the fixed top-level and resource member names
//! - **Schema constants**: Canonical field keys and event names

pub mod members;
pub mod schema;
