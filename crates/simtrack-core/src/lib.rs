//! simtrack-core — Profiles, session generation, feedback and the results menu.
//!
//! This crate holds everything simtrack does apart from drawing charts: the
//! data model, the random session generator, console feedback and tables,
//! the interactive menu, and configuration.

pub mod config;
pub mod error;
pub mod generator;
pub mod menu;
pub mod mock;
pub mod model;
pub mod profile;
pub mod table;
pub mod traits;

pub use error::SelectionError;
pub use generator::{MetricSource, RngSource, SessionGenerator};
pub use model::{EmotionalState, FeedbackTier, SessionRecord};
pub use profile::{Profile, ShowOutcome};
