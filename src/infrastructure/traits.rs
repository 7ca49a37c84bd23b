//! I/O boundary traits for testability
//!
//! These traits abstract timing and drawing, allowing the reveal driver
//! to be tested with recording implementations.

use std::io;
use std::time::Duration;

use crate::domain::{Explanation, RevealStep};

/// Waits between reveal steps.
pub trait Pacer: Send + Sync {
    /// Block for the given duration.
    fn pause(&self, duration: Duration);
}

/// Drawing surface for the inheritance tree.
pub trait Canvas {
    /// Remove everything drawn by a previous presentation.
    fn clear(&mut self) -> io::Result<()>;

    /// Draw the edge connecting a node to its parent.
    fn draw_edge(&mut self, from: &str, to: &str) -> io::Result<()>;

    /// Draw the node itself.
    fn draw_node(&mut self, step: &RevealStep) -> io::Result<()>;

    /// Replace the explanation panel content.
    fn show_explanation(&mut self, explanation: Explanation) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Sleeps the current thread.
#[derive(Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
