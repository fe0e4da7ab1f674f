//! Prediction feedback submission

use super::App;
use crate::types::{Alert, AnalysisResult, FeedbackRecord};
use eframe::egui;
use tracing::info;

/// Check a feedback submission before any request is made: there must be a
/// current analysis, and the entered rating must be a number in [0, 100].
pub(crate) fn validate_feedback(
    current: Option<&AnalysisResult>,
    input: &str,
) -> Result<FeedbackRecord, String> {
    let analysis = current.ok_or_else(|| "No analysis to provide feedback for".to_string())?;

    let actual: f64 = input
        .trim()
        .parse()
        .map_err(|_| "Please enter a valid rating between 0 and 100".to_string())?;
    if !(0.0..=100.0).contains(&actual) {
        return Err("Please enter a valid rating between 0 and 100".to_string());
    }

    Ok(FeedbackRecord {
        student_id: analysis.student_id.clone(),
        predicted_rating: analysis.overall_rating,
        actual_rating: actual,
        weak_category: analysis.weak_category.clone(),
    })
}

impl App {
    pub fn submit_feedback(&mut self, ctx: &egui::Context) {
        let record = match validate_feedback(
            self.current_analysis.as_ref(),
            &self.actual_rating_input,
        ) {
            Ok(record) => record,
            Err(msg) => {
                self.alert = Some(Alert::error(msg));
                return;
            }
        };

        let seq = self.feedback_slot.lock().unwrap().begin();
        info!(
            student_id = %record.student_id,
            actual_rating = record.actual_rating,
            predicted_rating = record.predicted_rating,
            "Submitting feedback"
        );

        let api = self.api.clone();
        let slot = self.feedback_slot.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = api.submit_feedback(&record).await.map_err(|e| e.to_string());
            if slot.lock().unwrap().complete(seq, result) {
                ctx.request_repaint();
            }
        });
    }

    pub(super) fn poll_feedback(&mut self) {
        let Some(outcome) = self.feedback_slot.lock().unwrap().take() else {
            return;
        };
        match outcome {
            Ok(()) => {
                info!("Feedback recorded");
                self.actual_rating_input.clear();
                self.alert = Some(Alert::success(
                    "Feedback submitted",
                    "The model will learn from your input.",
                ));
            }
            Err(e) => self.alert = Some(Alert::error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScoreMap;

    fn analysis() -> AnalysisResult {
        AnalysisResult {
            student_id: "STU001".into(),
            overall_rating: 78.4,
            tier: "EXCELLENT".into(),
            all_scores: ScoreMap::from(vec![("Exam".to_string(), 65.0)]),
            weak_category: "Exam".into(),
            recommendation: "Practice exam strategy.".into(),
            ai_suggestions: None,
            timestamp: None,
        }
    }

    #[test]
    fn rejected_without_current_analysis() {
        assert!(validate_feedback(None, "87.5").is_err());
        // Input values are irrelevant without an analysis
        assert!(validate_feedback(None, "50").is_err());
    }

    #[test]
    fn rejected_out_of_range() {
        let a = analysis();
        assert!(validate_feedback(Some(&a), "150").is_err());
        assert!(validate_feedback(Some(&a), "-1").is_err());
        assert!(validate_feedback(Some(&a), "NaN").is_err());
    }

    #[test]
    fn rejected_non_numeric() {
        let a = analysis();
        assert!(validate_feedback(Some(&a), "").is_err());
        assert!(validate_feedback(Some(&a), "eighty").is_err());
    }

    #[test]
    fn accepted_in_range_with_exact_value() {
        let a = analysis();
        let record = validate_feedback(Some(&a), "87.5").unwrap();
        assert_eq!(record.actual_rating, 87.5);
        assert_eq!(record.predicted_rating, 78.4);
        assert_eq!(record.student_id, "STU001");
        assert_eq!(record.weak_category, "Exam");
    }

    #[test]
    fn boundary_values_accepted() {
        let a = analysis();
        assert!(validate_feedback(Some(&a), "0").is_ok());
        assert!(validate_feedback(Some(&a), "100").is_ok());
    }
}
