//! Core shared types for EmuSAK
//!
//! This crate contains:
//! - Data models for emulator installations and their games
//! - Title databases and the name resolver cascade
//! - Features panel state: filtering, tab routing, actions
//! - Error types
//! - egui rendering of the features panel (with `ui` feature)

pub mod models;
pub mod error;
pub mod title_db;
pub mod features;

#[cfg(feature = "ui")]
pub mod ui;

pub use models::*;
pub use error::*;
pub use title_db::*;
pub use features::*;

#[cfg(feature = "ui")]
pub use ui::*;
