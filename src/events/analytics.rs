//! Analytics event handling.
//!
//! Events are produced by the navigation controller and consumed on a
//! detached thread. The sink is optional: when absent or disconnected,
//! dispatch degrades silently.

use crate::state::Section;
use log::*;

/// Specify different analytics event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    CustomMetric { name: &'static str, value: f64 },
    QuadrantClick { section: Section, timestamp: i64 },
}

/// Specify struct for recording analytics events.
///
pub struct Handler;

impl Handler {
    /// Return new instance.
    ///
    pub fn new() -> Self {
        Handler
    }

    /// Handle analytics events by type.
    ///
    pub fn handle(&self, event: Event) {
        match event {
            Event::CustomMetric { name, value } => {
                info!("custom_metric: {} = {:.1}ms", name, value);
            }
            Event::QuadrantClick { section, timestamp } => {
                info!(
                    "quadrant_click: section={} timestamp={}",
                    section.slug(),
                    timestamp
                );
            }
        }
    }
}
