//! Stateless helpers handed to plugins alongside the services.

use ponder_core::{CanonicalColor, ColorResolver};
use std::sync::Arc;

use crate::scheduler::{Autosave, AutosaveScheduler, TaskHandle};

/// Color resolution and autosave scheduling.
#[derive(Clone)]
pub struct Toolbox {
    color_resolver: ColorResolver,
    scheduler: AutosaveScheduler,
}

impl Toolbox {
    pub fn new(color_resolver: ColorResolver, scheduler: AutosaveScheduler) -> Self {
        Self {
            color_resolver,
            scheduler,
        }
    }

    pub fn color_resolver(&self) -> &ColorResolver {
        &self.color_resolver
    }

    pub fn scheduler(&self) -> &AutosaveScheduler {
        &self.scheduler
    }

    pub fn resolve_color(&self, input: &str) -> Option<CanonicalColor> {
        self.color_resolver.resolve(input)
    }

    pub fn schedule_autosave(&self, target: Arc<dyn Autosave>) -> TaskHandle {
        self.scheduler.schedule_autosave(target)
    }
}
