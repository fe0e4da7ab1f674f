//! Common types and data structures

use chrono::NaiveDateTime;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Which main tab is active. Switching is always done with an explicit
/// target, never inferred from the triggering widget.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Analyze,
    Batch,
}

/// Form payload for a single-student analysis. Score fields are parsed from
/// free text; an empty or unparsable field becomes NaN, which serde_json
/// writes as `null` for the backend to deal with.
#[derive(Debug, Clone, Serialize)]
pub struct StudentMetrics {
    pub student_id: String,
    pub attendance: f64,
    pub homework: f64,
    pub classwork: f64,
    pub class_focus: f64,
    pub exam: f64,
    pub problem_solving: f64,
    pub communication: f64,
    pub discipline: f64,
}

/// Category scores keyed by display name, in the order the backend sent them.
/// A plain HashMap would shuffle the score bars between analyses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreMap(Vec<(String, f64)>);

impl ScoreMap {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl From<Vec<(String, f64)>> for ScoreMap {
    fn from(entries: Vec<(String, f64)>) -> Self {
        Self(entries)
    }
}

impl<'de> Deserialize<'de> for ScoreMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScoreMapVisitor;

        impl<'de> Visitor<'de> for ScoreMapVisitor {
            type Value = ScoreMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category name to score")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, f64>()? {
                    entries.push((key, value));
                }
                Ok(ScoreMap(entries))
            }
        }

        deserializer.deserialize_map(ScoreMapVisitor)
    }
}

/// Analysis response from POST /api/analyze. Unknown fields (success flag,
/// raw subcategories) are ignored at the boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResult {
    pub student_id: String,
    pub overall_rating: f64,
    pub tier: String,
    pub all_scores: ScoreMap,
    pub weak_category: String,
    pub recommendation: String,
    #[serde(default)]
    pub ai_suggestions: Option<String>,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

impl AnalysisResult {
    /// Weak-category callout, score looked up from all_scores
    pub fn weak_category_label(&self) -> String {
        let score = self.all_scores.get(&self.weak_category).unwrap_or(0.0);
        format!("{} ({:.1}/100)", self.weak_category, score)
    }
}

/// Feedback payload for POST /api/feedback
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRecord {
    pub student_id: String,
    pub predicted_rating: f64,
    pub actual_rating: f64,
    pub weak_category: String,
}

/// Per-row result in a CSV batch response
#[derive(Debug, Clone, Deserialize)]
pub struct CsvRowResult {
    pub student_id: String,
    pub overall_rating: f64,
}

/// Response from POST /api/upload-csv
#[derive(Debug, Clone, Deserialize)]
pub struct CsvUploadSummary {
    pub count: usize,
    pub results: Vec<CsvRowResult>,
}

/// Model performance payload from GET /api/performance
#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceMetrics {
    pub total_predictions: i64,
    pub feedback_count: i64,
    pub average_error: f64,
    pub improvement_rate: f64,
    pub current_weights: ScoreMap,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceResponse {
    pub metrics: PerformanceMetrics,
}

/// Response from GET /api/health. Logged at startup, never rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
    pub groq_available: bool,
    #[serde(default)]
    pub model_loaded: bool,
}

/// Severity of a blocking alert modal
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

/// Blocking alert shown over everything else until dismissed
#[derive(Clone)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Bookkeeping for one background API call type. Each new request takes a
/// fresh sequence number; a completion carrying a stale number is dropped, so
/// the newest issued request wins regardless of resolution order.
pub struct RequestSlot<T> {
    seq: u64,
    in_flight: Option<u64>,
    outcome: Option<Result<T, String>>,
}

impl<T> Default for RequestSlot<T> {
    fn default() -> Self {
        Self {
            seq: 0,
            in_flight: None,
            outcome: None,
        }
    }
}

impl<T> RequestSlot<T> {
    /// Register a new request, superseding any outstanding one.
    /// Returns the sequence number the completion must present.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.in_flight = Some(self.seq);
        self.outcome = None;
        self.seq
    }

    /// Record a completion. Returns false if the request was superseded.
    pub fn complete(&mut self, seq: u64, result: Result<T, String>) -> bool {
        if self.in_flight != Some(seq) {
            return false;
        }
        self.in_flight = None;
        self.outcome = Some(result);
        true
    }

    /// Take the recorded outcome, if any. Called from the UI thread each frame.
    pub fn take(&mut self) -> Option<Result<T, String>> {
        self.outcome.take()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_map_preserves_backend_order() {
        let json = r#"{"Attendance": 82.0, "Homework/Classwork": 71.5, "Class Focus": 90.0, "Exam": 65.0, "Skills": 77.3}"#;
        let scores: ScoreMap = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = scores.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            ["Attendance", "Homework/Classwork", "Class Focus", "Exam", "Skills"]
        );
        assert_eq!(scores.get("Exam"), Some(65.0));
        assert_eq!(scores.get("Nope"), None);
    }

    #[test]
    fn analysis_result_with_ai_suggestions() {
        let json = r#"{
            "success": true,
            "student_id": "STU001",
            "overall_rating": 78.4,
            "tier": "EXCELLENT",
            "all_scores": {"Attendance": 85.0, "Exam": 72.0},
            "weak_category": "Exam",
            "recommendation": "Practice exam strategy.",
            "ai_suggestions": "1. Review past papers",
            "timestamp": "2025-11-03T14:21:07.123456"
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.student_id, "STU001");
        assert_eq!(result.ai_suggestions.as_deref(), Some("1. Review past papers"));
        assert!(result.timestamp.is_some());
        assert_eq!(result.weak_category_label(), "Exam (72.0/100)");
    }

    #[test]
    fn analysis_result_without_optional_fields() {
        let json = r#"{
            "student_id": "STU002",
            "overall_rating": 55.0,
            "tier": "DEVELOPING",
            "all_scores": {"Attendance": 55.0},
            "weak_category": "Attendance",
            "recommendation": "Improve class presence."
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.ai_suggestions.is_none());
        assert!(result.timestamp.is_none());
    }

    #[test]
    fn weak_category_label_survives_missing_key() {
        let result = AnalysisResult {
            student_id: "X".into(),
            overall_rating: 0.0,
            tier: String::new(),
            all_scores: ScoreMap::default(),
            weak_category: "Exam".into(),
            recommendation: String::new(),
            ai_suggestions: None,
            timestamp: None,
        };
        assert_eq!(result.weak_category_label(), "Exam (0.0/100)");
    }

    #[test]
    fn performance_response_unwraps_metrics() {
        let json = r#"{
            "success": true,
            "metrics": {
                "total_predictions": 42,
                "feedback_count": 7,
                "average_error": 4.83,
                "improvement_rate": 12.5,
                "current_weights": {"attendance": 0.15, "homework": 0.1}
            },
            "timestamp": "2025-11-03T14:21:07"
        }"#;
        let response: PerformanceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.metrics.total_predictions, 42);
        assert_eq!(response.metrics.current_weights.get("attendance"), Some(0.15));
    }

    #[test]
    fn request_slot_drops_stale_completion() {
        let mut slot: RequestSlot<u32> = RequestSlot::default();
        let first = slot.begin();
        let second = slot.begin();
        assert!(slot.is_in_flight());

        // First request resolves after being superseded: dropped
        assert!(!slot.complete(first, Ok(1)));
        assert!(slot.take().is_none());
        assert!(slot.is_in_flight());

        // Newest request lands regardless of resolution order
        assert!(slot.complete(second, Ok(2)));
        assert!(!slot.is_in_flight());
        assert_eq!(slot.take(), Some(Ok(2)));
        assert!(slot.take().is_none());
    }

    #[test]
    fn request_slot_begin_clears_previous_outcome() {
        let mut slot: RequestSlot<u32> = RequestSlot::default();
        let seq = slot.begin();
        assert!(slot.complete(seq, Err("boom".to_string())));
        slot.begin();
        assert!(slot.take().is_none());
    }

    #[test]
    fn nan_scores_serialize_as_null() {
        let metrics = StudentMetrics {
            student_id: "STU001".into(),
            attendance: 85.0,
            homework: f64::NAN,
            classwork: 7.0,
            class_focus: 75.0,
            exam: 72.0,
            problem_solving: 8.0,
            communication: 7.0,
            discipline: 8.0,
        };
        let json = serde_json::to_value(&metrics).unwrap();
        assert!(json["homework"].is_null());
        assert_eq!(json["attendance"], 85.0);
    }
}
