//! Application services

pub mod inheritance;
pub mod reveal;

pub use inheritance::{InheritanceReport, InheritanceService};
pub use reveal::{RevealOutcome, RevealService, RevealToken};
