//! App module - contains the main application state and logic

mod analyze;
mod batch;
mod feedback;
mod health;
mod performance;

use crate::api::ApiClient;
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Form state (free text, parsed at submit time)
    pub(crate) student_id_input: String,
    pub(crate) score_inputs: [String; 8],
    pub(crate) actual_rating_input: String,

    // Most recent analysis. Set by a successful analyze, read by feedback,
    // cleared when the results card is dismissed.
    pub(crate) current_analysis: Option<AnalysisResult>,
    pub(crate) scroll_to_results: bool,

    // Tabs
    pub(crate) active_tab: Tab,

    // Backend access
    pub(crate) api: ApiClient,
    pub(crate) runtime: tokio::runtime::Runtime,

    // One slot per background call type; stale completions are dropped
    pub(crate) analyze_slot: Arc<Mutex<RequestSlot<AnalysisResult>>>,
    pub(crate) feedback_slot: Arc<Mutex<RequestSlot<()>>>,
    pub(crate) upload_slot: Arc<Mutex<RequestSlot<CsvUploadSummary>>>,
    pub(crate) performance_slot: Arc<Mutex<RequestSlot<PerformanceMetrics>>>,
    pub(crate) analyze_cancel: Option<CancellationToken>,

    // Batch upload state
    pub(crate) pending_upload: Option<PathBuf>,
    pub(crate) batch_summary: Option<CsvUploadSummary>,

    // Performance modal
    pub(crate) performance: Option<PerformanceMetrics>,
    pub(crate) show_performance_modal: bool,

    // Blocking alert
    pub(crate) alert: Option<Alert>,

    // Settings
    pub(crate) settings: Settings,
    pub(crate) show_settings: bool,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,

    // Startup
    pub(crate) health_check_started: bool,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let api = ApiClient::new(&settings.api_url_or_default());

        Self {
            student_id_input: String::new(),
            score_inputs: Default::default(),
            actual_rating_input: String::new(),
            current_analysis: None,
            scroll_to_results: false,
            active_tab: Tab::Analyze,
            api,
            runtime: tokio::runtime::Runtime::new().unwrap(),
            analyze_slot: Arc::new(Mutex::new(RequestSlot::default())),
            feedback_slot: Arc::new(Mutex::new(RequestSlot::default())),
            upload_slot: Arc::new(Mutex::new(RequestSlot::default())),
            performance_slot: Arc::new(Mutex::new(RequestSlot::default())),
            analyze_cancel: None,
            pending_upload: None,
            batch_summary: None,
            performance: None,
            show_performance_modal: false,
            alert: None,
            settings,
            show_settings: false,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
            health_check_started: false,
            logo_texture: None,
        }
    }

    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.save(&self.data_dir);
    }

    /// Rebuild the API client after the backend URL changed in settings
    pub fn apply_api_url(&mut self) {
        self.api = ApiClient::new(&self.settings.api_url_or_default());
    }

    /// Switch the active tab. The target is always passed explicitly.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Drain completed background calls into UI state. Called every frame.
    pub fn poll_api_results(&mut self) {
        self.poll_analyze();
        self.poll_feedback();
        self.poll_upload();
        self.poll_performance();
    }

    /// Whether the blocking loading overlay is up. Derived from the in-flight
    /// slots so one completion cannot hide the overlay while another call is
    /// still running. Feedback intentionally does not block, matching the
    /// original client.
    pub fn is_loading(&self) -> bool {
        self.analyze_slot.lock().unwrap().is_in_flight()
            || self.upload_slot.lock().unwrap().is_in_flight()
            || self.performance_slot.lock().unwrap().is_in_flight()
    }

    /// Dismiss the results card and clear the stored analysis
    pub fn close_results(&mut self) {
        self.current_analysis = None;
    }
}
