//! CSV batch upload and sample dataset export

use super::App;
use crate::constants::{SAMPLE_CSV, SAMPLE_CSV_FILENAME};
use crate::types::Alert;
use eframe::egui;
use std::path::PathBuf;
use tracing::{info, warn};

impl App {
    /// Open the native file picker; a selected file uploads immediately,
    /// matching the original file-input-change behavior.
    pub fn pick_and_upload_csv(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .pick_file()
        else {
            return;
        };
        self.start_upload(ctx, path);
    }

    pub fn start_upload(&mut self, ctx: &egui::Context, path: PathBuf) {
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read CSV file");
                self.alert = Some(Alert::error(format!("Could not read file: {}", e)));
                return;
            }
        };
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload.csv".to_string());

        let seq = self.upload_slot.lock().unwrap().begin();
        info!(file = %file_name, bytes = bytes.len(), seq, "Uploading CSV");
        self.pending_upload = Some(path);

        let api = self.api.clone();
        let slot = self.upload_slot.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = api
                .upload_csv(file_name, bytes)
                .await
                .map_err(|e| e.to_string());
            if slot.lock().unwrap().complete(seq, result) {
                ctx.request_repaint();
            }
        });
    }

    pub(super) fn poll_upload(&mut self) {
        let Some(outcome) = self.upload_slot.lock().unwrap().take() else {
            return;
        };
        // The pending file resets regardless of outcome
        self.pending_upload = None;
        match outcome {
            Ok(summary) => {
                info!(count = summary.count, "CSV batch analyzed");
                self.batch_summary = Some(summary);
            }
            Err(e) => self.alert = Some(Alert::error(e)),
        }
    }

    /// Write the fixed sample dataset wherever the user points the save
    /// dialog. Purely local, no backend involved.
    pub fn save_sample_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .set_file_name(SAMPLE_CSV_FILENAME)
            .save_file()
        else {
            return;
        };
        match std::fs::write(&path, SAMPLE_CSV) {
            Ok(()) => info!(path = %path.display(), "Sample CSV saved"),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to save sample CSV");
                self.alert = Some(Alert::error(format!("Could not save file: {}", e)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::constants::SAMPLE_CSV;

    #[test]
    fn sample_csv_bytes_are_exact() {
        let expected = "student_id,attendance,homework,classwork,class_focus,exam,problem_solving,communication,discipline\n\
                        STU001,85,8,7,75,72,8,7,8\n\
                        STU002,70,6,6,60,55,6,6,5\n\
                        STU003,95,9,9,90,88,9,8,9";
        assert_eq!(SAMPLE_CSV, expected);
        assert!(!SAMPLE_CSV.ends_with('\n'));
        assert_eq!(SAMPLE_CSV.lines().count(), 4);
    }
}
