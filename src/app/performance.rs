//! Model performance dashboard fetch

use super::App;
use crate::types::Alert;
use eframe::egui;
use tracing::info;

impl App {
    pub fn fetch_performance(&mut self, ctx: &egui::Context) {
        let seq = self.performance_slot.lock().unwrap().begin();
        info!(seq, "Fetching model performance");

        let api = self.api.clone();
        let slot = self.performance_slot.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = api.performance().await.map_err(|e| e.to_string());
            if slot.lock().unwrap().complete(seq, result) {
                ctx.request_repaint();
            }
        });
    }

    pub(super) fn poll_performance(&mut self) {
        let Some(outcome) = self.performance_slot.lock().unwrap().take() else {
            return;
        };
        match outcome {
            Ok(metrics) => {
                info!(
                    total_predictions = metrics.total_predictions,
                    feedback_count = metrics.feedback_count,
                    "Performance metrics loaded"
                );
                self.performance = Some(metrics);
                self.show_performance_modal = true;
            }
            Err(e) => self.alert = Some(Alert::error(e)),
        }
    }
}
