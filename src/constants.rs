//! Application constants and configuration

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default backend base URL, overridable in settings
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Score input fields, in form order. Attendance/class focus/exam are entered
/// on a 0-100 scale, the rest as 0-10 marks; the backend does the scaling.
pub const SCORE_FIELDS: [&str; 8] = [
    "attendance",
    "homework",
    "classwork",
    "class_focus",
    "exam",
    "problem_solving",
    "communication",
    "discipline",
];

/// Sample dataset offered for download from the batch tab. Byte content is
/// fixed: header plus three rows, newline separated, no trailing newline.
pub const SAMPLE_CSV: &str = "\
student_id,attendance,homework,classwork,class_focus,exam,problem_solving,communication,discipline
STU001,85,8,7,75,72,8,7,8
STU002,70,6,6,60,55,6,6,5
STU003,95,9,9,90,88,9,8,9";

pub const SAMPLE_CSV_FILENAME: &str = "sample_students.csv";
