//! Reveal service
//!
//! Plays an inheritance tree onto a canvas one node at a time. Starting a new
//! presentation cancels the one in flight.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::PresentationTree;
use crate::infrastructure::traits::{Canvas, Pacer};

/// How a presentation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    Completed { revealed: usize },
    Cancelled { revealed: usize },
}

impl RevealOutcome {
    pub fn revealed(self) -> usize {
        match self {
            RevealOutcome::Completed { revealed } | RevealOutcome::Cancelled { revealed } => {
                revealed
            }
        }
    }
}

/// Handle on one presentation. Stale once a newer presentation starts.
#[derive(Debug, Clone)]
pub struct RevealToken {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl RevealToken {
    pub fn is_cancelled(&self) -> bool {
        self.current.load(Ordering::SeqCst) != self.generation
    }

    /// Cancel this presentation; no effect if it is already stale.
    pub fn cancel(&self) {
        let _ = self.current.compare_exchange(
            self.generation,
            self.generation + 1,
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
    }
}

/// Service driving the step-by-step tree reveal.
pub struct RevealService {
    pacer: Arc<dyn Pacer>,
    interval: Duration,
    generation: Arc<AtomicU64>,
}

impl RevealService {
    /// Create a reveal service. A zero interval renders immediately.
    pub fn new(pacer: Arc<dyn Pacer>, interval: Duration) -> Self {
        Self {
            pacer,
            interval,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start a new presentation, invalidating any earlier token.
    pub fn start(&self) -> RevealToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("start: generation={}", generation);
        RevealToken {
            generation,
            current: Arc::clone(&self.generation),
        }
    }

    /// Start and play a presentation in one go.
    pub fn present(
        &self,
        tree: &PresentationTree,
        canvas: &mut dyn Canvas,
    ) -> ApplicationResult<RevealOutcome> {
        let token = self.start();
        self.play(tree, canvas, &token)
    }

    /// Reveal every node of `tree` until done or `token` is cancelled.
    ///
    /// Each step draws the edge from its parent, then the node, then its
    /// explanation if it has one.
    #[instrument(level = "debug", skip_all, fields(parent1 = %tree.parent1, parent2 = %tree.parent2))]
    pub fn play(
        &self,
        tree: &PresentationTree,
        canvas: &mut dyn Canvas,
        token: &RevealToken,
    ) -> ApplicationResult<RevealOutcome> {
        let steps = tree.reveal_steps();
        let mut revealed = 0;

        if token.is_cancelled() {
            return Ok(RevealOutcome::Cancelled { revealed });
        }
        canvas.clear().map_err(|e| canvas_err("clear canvas", e))?;

        for step in &steps {
            if token.is_cancelled() {
                info!("reveal cancelled after {} of {} nodes", revealed, steps.len());
                return Ok(RevealOutcome::Cancelled { revealed });
            }

            if let Some(parent) = &step.parent_label {
                canvas
                    .draw_edge(parent, &step.label)
                    .map_err(|e| canvas_err("draw edge", e))?;
            }
            canvas
                .draw_node(step)
                .map_err(|e| canvas_err("draw node", e))?;
            if let Some(explanation) = step.explanation {
                canvas
                    .show_explanation(explanation)
                    .map_err(|e| canvas_err("show explanation", e))?;
            }
            revealed += 1;
            debug!("revealed step {}: {}", step.index, step.label);

            if !step.is_last_of(steps.len()) && !self.interval.is_zero() {
                self.pacer.pause(self.interval);
            }
        }

        Ok(RevealOutcome::Completed { revealed })
    }
}

fn canvas_err(context: &str, source: std::io::Error) -> ApplicationError {
    ApplicationError::operation_failed(context, source)
}
