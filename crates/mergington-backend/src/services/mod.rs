//! Backend services for the activity catalog and sign-ups.
//!
//! This module provides the service layer abstraction over the activity
//! directory, its in-memory implementation, and the startup catalog.

pub mod activities;
pub mod catalog;

pub use activities::*;
