//! Single-student analysis request

use super::App;
use crate::constants::SCORE_FIELDS;
use crate::types::{Alert, StudentMetrics};
use eframe::egui;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Parse a score field the way the original form did: anything that is not a
/// number becomes NaN and is forwarded to the backend as-is (null on the wire).
pub(crate) fn parse_score(input: &str) -> f64 {
    input.trim().parse().unwrap_or(f64::NAN)
}

impl App {
    /// Build the analyze payload from the form. No client-side validation.
    fn collect_metrics(&self) -> StudentMetrics {
        let s = |i: usize| parse_score(&self.score_inputs[i]);
        StudentMetrics {
            student_id: self.student_id_input.trim().to_string(),
            attendance: s(0),
            homework: s(1),
            classwork: s(2),
            class_focus: s(3),
            exam: s(4),
            problem_solving: s(5),
            communication: s(6),
            discipline: s(7),
        }
    }

    pub fn start_analyze(&mut self, ctx: &egui::Context) {
        let metrics = self.collect_metrics();

        // A newer submission supersedes any outstanding one
        if let Some(token) = self.analyze_cancel.take() {
            debug!("Cancelling superseded analysis request");
            token.cancel();
        }
        let token = CancellationToken::new();
        self.analyze_cancel = Some(token.clone());

        let seq = self.analyze_slot.lock().unwrap().begin();
        info!(student_id = %metrics.student_id, seq, "Starting analysis request");

        let api = self.api.clone();
        let slot = self.analyze_slot.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = tokio::select! {
                _ = token.cancelled() => return,
                r = api.analyze(&metrics) => r.map_err(|e| e.to_string()),
            };
            if slot.lock().unwrap().complete(seq, result) {
                ctx.request_repaint();
            }
        });
    }

    pub(super) fn poll_analyze(&mut self) {
        let Some(outcome) = self.analyze_slot.lock().unwrap().take() else {
            return;
        };
        match outcome {
            Ok(result) => {
                info!(
                    student_id = %result.student_id,
                    overall_rating = result.overall_rating,
                    tier = %result.tier,
                    "Analysis complete"
                );
                self.current_analysis = Some(result);
                self.scroll_to_results = true;
            }
            Err(e) => self.alert = Some(Alert::error(e)),
        }
    }

    /// Field label shown next to each score input
    pub fn score_field_label(index: usize) -> &'static str {
        match SCORE_FIELDS[index] {
            "attendance" => "Attendance (%)",
            "homework" => "Homework (0-10)",
            "classwork" => "Classwork (0-10)",
            "class_focus" => "Class Focus (%)",
            "exam" => "Exam (%)",
            "problem_solving" => "Problem Solving (0-10)",
            "communication" => "Communication (0-10)",
            "discipline" => "Discipline (0-10)",
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_score_accepts_numbers() {
        assert_eq!(parse_score("85"), 85.0);
        assert_eq!(parse_score(" 7.5 "), 7.5);
    }

    #[test]
    fn parse_score_maps_junk_to_nan() {
        assert!(parse_score("").is_nan());
        assert!(parse_score("abc").is_nan());
        assert!(parse_score("7,5").is_nan());
    }
}
