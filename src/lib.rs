//! Blood type inheritance resolver and inheritance tree presenter.
//!
//! Layers, innermost first:
//! - [`domain`]: blood type entities, the resolver, the presentation tree
//! - [`application`]: services orchestrating resolution and node reveal
//! - [`infrastructure`]: pacing, terminal canvas, service wiring
//! - [`cli`]: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{resolve, AboPhenotype, ChildSet, DomainError, Genotype, RhSign};
