//! Startup health probe
//!
//! Advisory only: the result is logged, never rendered, and nothing waits
//! on it.

use super::App;
use crate::api;
use tracing::{info, warn};

impl App {
    pub fn start_health_check(&mut self) {
        if self.health_check_started {
            return;
        }
        self.health_check_started = true;

        let base_url = self.settings.api_url_or_default();
        std::thread::spawn(move || match api::check_health_blocking(&base_url) {
            Ok(health) => {
                info!(
                    groq_available = health.groq_available,
                    model_loaded = health.model_loaded,
                    status = health.status.as_deref().unwrap_or("unknown"),
                    "API health check"
                );
                if !health.groq_available {
                    warn!("Groq API not configured, AI suggestions will not be available");
                }
            }
            Err(e) => warn!(error = %e, "Failed to check API health"),
        });
    }
}
