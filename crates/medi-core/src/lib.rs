//! # medi-core
//!
//! Core domain types, status enums, and error types for Medisort.
//!
//! This crate provides the foundational types shared across all Medisort crates:
//! - Entity structs for the scan domain (requests, classification results,
//!   disposal instructions)
//! - The disposal category enumeration with its severity ordering
//! - The scan lifecycle state machine
//! - Cross-cutting error types
//! - Boundary response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
