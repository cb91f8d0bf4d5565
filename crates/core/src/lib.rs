//! Core domain types and contracts for the courtsync project.
//!
//! This crate is backend-agnostic: it defines the domain model (clubs,
//! courts, slots, availability), the domain events that drive cache
//! invalidation, and the traits the `courtsync` binary implements
//! (cache store, place index, upstream courts client).

pub mod cache;
pub mod client;
pub mod courts;
