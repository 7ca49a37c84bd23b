//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{InheritanceService, RevealService};
use crate::config::Settings;
use crate::infrastructure::traits::{Pacer, ThreadPacer};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Reveal timing abstraction
    pub pacer: Arc<dyn Pacer>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(ThreadPacer))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, pacer: Arc<dyn Pacer>) -> Self {
        Self {
            settings: Arc::new(settings),
            pacer,
        }
    }

    pub fn inheritance_service(&self) -> InheritanceService {
        InheritanceService::new()
    }

    /// Reveal service paced by the configured interval.
    pub fn reveal_service(&self) -> RevealService {
        RevealService::new(Arc::clone(&self.pacer), self.settings.reveal.interval())
    }
}
