// SPDX-License-Identifier: GPL-3.0-only

//! Canonical domain models for drive-health reporting
//!
//! This crate defines the single source of truth for the drive domain types.
//! These models are used throughout the stack:
//!
//! - **drive-health**: builds and returns these types from its public API
//! - enumeration backends and presentation layers consume them as-is
//!
//! The types are plain data: construction and mutation policy live in
//! `drive-health`, which assembles a `DriveIdentity` once per enumeration
//! pass and fills the SMART slot during the failure-prediction pass.

pub mod drive;
pub mod smart;

pub use drive::{BusType, DriveIdentity, MediaType};
pub use smart::{AttributeReading, SmartData, attribute_name};
