//! Entity to model mappers
//!
//! This module provides conversions between domain entities (market-core) and
//! database models. Rows carrying discriminator columns (`content_type`,
//! `kind`, `reason`) convert via `TryFrom`, surfacing unknown values as
//! validation errors instead of panicking.

mod comment;
mod contract;
mod notification;
mod reaction;
mod user;
