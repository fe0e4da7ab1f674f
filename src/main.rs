#![windows_subsystem = "windows"]
//! Student Rating Client - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod api;
mod app;
mod constants;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use tracing::info;
use types::*;
use ui::components;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "student-rating-client.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,student_rating_client=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Student Rating Client starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1000.0, 760.0)))
        .with_min_inner_size([760.0, 560.0])
        .with_title("Student Rating Client");

    // Window/taskbar icon rasterized from the embedded logo
    {
        let (rgba, w, h) = utils::rasterize_logo_square(64);
        let icon = egui::IconData { rgba, width: w, height: h };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Student Rating Client",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Advisory health probe, once, on the first frame
        self.start_health_check();

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Drain completed background calls into UI state
        self.poll_api_results();

        self.render_top_bar(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin { left: 24, right: 24, top: 16, bottom: 16 }),
            )
            .show(ctx, |ui| match self.active_tab {
                Tab::Analyze => self.render_analyze_tab(ui, ctx),
                Tab::Batch => self.render_batch_tab(ui, ctx),
            });

        // Modals render above the panels
        self.render_performance_modal(ctx);
        self.render_batch_summary_modal(ctx);
        self.render_settings_modal(ctx);
        self.render_alert_modal(ctx);
        self.render_loading_overlay(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_settings();
        info!("Student Rating Client exiting");
    }
}

// ============================================================================
// TOP BAR & TABS
// ============================================================================

/// Tab-style button with an accent underline on the active tab.
/// Returns true when clicked.
fn tab_button(ui: &mut egui::Ui, icon: &str, label: &str, active: bool) -> bool {
    let text = format!("{}  {}", icon, label);
    let galley = ui.painter().layout_no_wrap(
        text.clone(),
        egui::FontId::proportional(theme::FONT_BODY),
        theme::TEXT_PRIMARY,
    );
    let desired = egui::vec2(galley.size().x + 20.0, theme::TOP_BAR_HEIGHT - 8.0);
    let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let color = if active {
            theme::TEXT_PRIMARY
        } else if response.hovered() {
            theme::TEXT_MUTED
        } else {
            theme::TEXT_DIM
        };
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(theme::FONT_BODY),
            color,
        );
        if active {
            let underline = egui::Rect::from_min_max(
                egui::pos2(rect.min.x + 6.0, rect.max.y - 2.0),
                egui::pos2(rect.max.x - 6.0, rect.max.y),
            );
            ui.painter()
                .rect_filled(underline, theme::RADIUS_SMALL, theme::ACCENT);
        }
    }

    response.clicked()
}

impl App {
    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar")
            .exact_height(theme::TOP_BAR_HEIGHT)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(16, 0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    // Logo + title
                    let texture = self.logo_texture.get_or_insert_with(|| {
                        let (pixels, w, h) = utils::rasterize_logo(56);
                        ctx.load_texture(
                            "logo",
                            egui::ColorImage::from_rgba_unmultiplied(
                                [w as usize, h as usize],
                                &pixels,
                            ),
                            egui::TextureOptions::LINEAR,
                        )
                    });
                    ui.image(egui::load::SizedTexture::new(
                        texture.id(),
                        egui::vec2(28.0, 28.0),
                    ));
                    ui.add_space(4.0);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("STUDENT RATING")
                                .size(theme::FONT_LABEL)
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                        )
                        .selectable(false),
                    );
                    ui.add_space(16.0);

                    if tab_button(
                        ui,
                        egui_phosphor::regular::STUDENT,
                        "Analyze",
                        self.active_tab == Tab::Analyze,
                    ) {
                        self.switch_tab(Tab::Analyze);
                    }
                    if tab_button(
                        ui,
                        egui_phosphor::regular::FILE_CSV,
                        "Batch",
                        self.active_tab == Tab::Batch,
                    ) {
                        self.switch_tab(Tab::Batch);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let gear = ui.add(theme::button(egui_phosphor::regular::GEAR.to_string()));
                        if gear.clicked() {
                            self.show_settings = true;
                        }
                        let perf = ui.add(theme::button(format!(
                            "{}  Performance",
                            egui_phosphor::regular::CHART_BAR
                        )));
                        if perf.clicked() {
                            self.fetch_performance(ctx);
                        }
                    });
                });
            });
    }
}

// ============================================================================
// ANALYZE TAB
// ============================================================================

impl App {
    fn render_analyze_tab(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                    ui.set_max_width(640.0);
                    self.render_form_card(ui, ctx);
                    ui.add_space(theme::SPACING_LG);
                    if self.current_analysis.is_some() {
                        self.render_results_card(ui, ctx);
                    }
                    ui.add_space(theme::SPACING_XL);
                });
            });
    }

    fn score_field(ui: &mut egui::Ui, label: &str, value: &mut String) {
        ui.add(
            egui::Label::new(
                egui::RichText::new(label)
                    .size(theme::FONT_SECTION)
                    .color(theme::TEXT_DIM),
            )
            .selectable(false),
        );
        theme::input_frame().show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(value)
                    .frame(false)
                    .desired_width(ui.available_width()),
            );
        });
        ui.add_space(theme::SPACING_SM);
    }

    fn render_form_card(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        theme::card_frame().show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("STUDENT METRICS")
                        .size(theme::FONT_SECTION)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_MD);

            Self::score_field(ui, "Student ID", &mut self.student_id_input);

            // Eight score fields, two per row, in form order
            for pair in (0..self.score_inputs.len()).step_by(2) {
                ui.columns(2, |cols| {
                    let labels = [
                        Self::score_field_label(pair),
                        Self::score_field_label(pair + 1),
                    ];
                    Self::score_field(&mut cols[0], labels[0], &mut self.score_inputs[pair]);
                    Self::score_field(&mut cols[1], labels[1], &mut self.score_inputs[pair + 1]);
                });
            }

            ui.add_space(theme::SPACING_MD);
            let analyze = ui.add(theme::button_accent(format!(
                "{}  Analyze Student",
                egui_phosphor::regular::MAGNIFYING_GLASS
            )));
            if analyze.clicked() {
                self.start_analyze(ctx);
            }
        });
    }

    fn render_results_card(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let Some(analysis) = self.current_analysis.clone() else {
            return;
        };

        let mut close_clicked = false;
        let response = theme::card_frame()
            .show(ui, |ui| {
                // Header: student id + close button
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("ANALYSIS RESULTS")
                                .size(theme::FONT_SECTION)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(theme::button(egui_phosphor::regular::X.to_string()))
                            .clicked()
                        {
                            close_clicked = true;
                        }
                    });
                });
                ui.add_space(theme::SPACING_SM);

                // Overall rating + tier
                let tier_color = theme::tier_color(&analysis.tier);
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!("{:.1}", analysis.overall_rating))
                                .size(theme::RATING_DISPLAY_SIZE)
                                .strong()
                                .color(tier_color),
                        )
                        .selectable(false),
                    );
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("/100")
                                .size(theme::FONT_HEADING)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                    ui.add_space(theme::SPACING_MD);
                    ui.vertical(|ui| {
                        ui.add_space(10.0);
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&analysis.tier)
                                    .size(theme::FONT_HEADING)
                                    .strong()
                                    .color(tier_color),
                            )
                            .selectable(false),
                        );
                        let mut sub = analysis.student_id.clone();
                        if let Some(ts) = analysis.timestamp {
                            sub = format!("{}  ·  {}", sub, ts.format("%H:%M:%S"));
                        }
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(sub)
                                    .size(theme::FONT_SMALL)
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                    });
                });

                ui.add_space(theme::SPACING_MD);
                ui.separator();
                ui.add_space(theme::SPACING_MD);

                // Category breakdown, in backend order
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("CATEGORY BREAKDOWN")
                            .size(theme::FONT_SECTION)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_SM);
                for (category, score) in analysis.all_scores.iter() {
                    components::score_bar(ui, category, score);
                }

                ui.add_space(theme::SPACING_MD);

                // Weak category + recommendation
                theme::section_frame().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.colored_label(
                            theme::STATUS_WARNING,
                            egui_phosphor::regular::LIGHTBULB,
                        );
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new("Focus area:")
                                    .size(theme::FONT_LABEL)
                                    .color(theme::TEXT_MUTED),
                            )
                            .selectable(false),
                        );
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(analysis.weak_category_label())
                                    .size(theme::FONT_LABEL)
                                    .strong()
                                    .color(theme::STATUS_WARNING),
                            )
                            .selectable(false),
                        );
                    });
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(&analysis.recommendation)
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_SECONDARY),
                        )
                        .wrap(),
                    );
                });

                // AI improvement plan, only when the backend sent one
                if let Some(suggestions) = &analysis.ai_suggestions {
                    ui.add_space(theme::SPACING_SM);
                    theme::section_frame().show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.colored_label(theme::ACCENT, egui_phosphor::regular::ROBOT);
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new("AI Improvement Plan")
                                        .size(theme::FONT_LABEL)
                                        .strong()
                                        .color(theme::ACCENT_LIGHT),
                                )
                                .selectable(false),
                            );
                        });
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(suggestions)
                                    .size(theme::FONT_LABEL)
                                    .color(theme::TEXT_SECONDARY),
                            )
                            .wrap(),
                        );
                    });
                }

                ui.add_space(theme::SPACING_MD);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                // Feedback row
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Actual rating (0-100):")
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_MUTED),
                        )
                        .selectable(false),
                    );
                    theme::input_frame().show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut self.actual_rating_input)
                                .frame(false)
                                .desired_width(70.0),
                        );
                    });
                    let submit = ui.add(theme::button_accent(format!(
                        "{}  Submit Feedback",
                        egui_phosphor::regular::PAPER_PLANE_TILT
                    )));
                    if submit.clicked() {
                        self.submit_feedback(ctx);
                    }
                });
            })
            .response;

        if self.scroll_to_results {
            self.scroll_to_results = false;
            response.scroll_to_me(Some(egui::Align::TOP));
        }

        if close_clicked {
            self.close_results();
        }
    }
}

// ============================================================================
// BATCH TAB
// ============================================================================

impl App {
    fn render_batch_tab(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                    ui.set_max_width(640.0);

                    theme::card_frame().show(ui, |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new("BATCH ANALYSIS")
                                    .size(theme::FONT_SECTION)
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                        ui.add_space(theme::SPACING_MD);
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(
                                    "Upload a CSV with one row per student. Expected columns: \
                                     student_id, attendance, homework, classwork, class_focus, \
                                     exam, problem_solving, communication, discipline.",
                                )
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_MUTED),
                            )
                            .wrap(),
                        );
                        ui.add_space(theme::SPACING_MD);

                        ui.horizontal(|ui| {
                            let upload = ui.add(theme::button_accent(format!(
                                "{}  Upload CSV...",
                                egui_phosphor::regular::UPLOAD_SIMPLE
                            )));
                            if upload.clicked() {
                                self.pick_and_upload_csv(ctx);
                            }
                            if let Some(path) = &self.pending_upload {
                                ui.spinner();
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(
                                            path.file_name()
                                                .map(|n| n.to_string_lossy().to_string())
                                                .unwrap_or_default(),
                                        )
                                        .size(theme::FONT_LABEL)
                                        .color(theme::TEXT_DIM),
                                    )
                                    .selectable(false),
                                );
                            }
                        });

                        ui.add_space(theme::SPACING_MD);
                        ui.separator();
                        ui.add_space(theme::SPACING_MD);

                        ui.horizontal(|ui| {
                            let sample = ui.add(theme::button(format!(
                                "{}  Download Sample CSV",
                                egui_phosphor::regular::DOWNLOAD_SIMPLE
                            )));
                            if sample.clicked() {
                                self.save_sample_csv();
                            }
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new("Three example students, generated locally.")
                                        .size(theme::FONT_SMALL)
                                        .color(theme::TEXT_DIM),
                                )
                                .selectable(false),
                            );
                        });
                    });
                });
            });
    }
}

// ============================================================================
// MODALS
// ============================================================================

impl App {
    fn render_performance_modal(&mut self, ctx: &egui::Context) {
        if !self.show_performance_modal {
            return;
        }
        let Some(metrics) = self.performance.clone() else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("performance_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(440.0);
            ui.set_max_width(440.0);

            ui.horizontal(|ui| {
                ui.colored_label(theme::ACCENT, egui_phosphor::regular::CHART_BAR);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Model Performance")
                            .size(theme::FONT_HEADING)
                            .strong(),
                    )
                    .selectable(false),
                );
            });
            ui.add_space(theme::SPACING_MD);

            // Four summary cards, two per row
            let spacing = ui.spacing().item_spacing.x;
            let card_w = (ui.available_width() - spacing) / 2.0;
            ui.horizontal(|ui| {
                components::metric_card(
                    ui,
                    card_w,
                    "TOTAL PREDICTIONS",
                    &metrics.total_predictions.to_string(),
                );
                components::metric_card(
                    ui,
                    card_w,
                    "FEEDBACK COUNT",
                    &metrics.feedback_count.to_string(),
                );
            });
            ui.horizontal(|ui| {
                components::metric_card(
                    ui,
                    card_w,
                    "AVERAGE ERROR",
                    &format!("{:.2}", metrics.average_error),
                );
                components::metric_card(
                    ui,
                    card_w,
                    "IMPROVEMENT RATE",
                    &format!("{:.2}%", metrics.improvement_rate),
                );
            });

            ui.add_space(theme::SPACING_LG);
            ui.add(
                egui::Label::new(
                    egui::RichText::new("CURRENT WEIGHTS")
                        .size(theme::FONT_SECTION)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_SM);

            {
                use egui_extras::{Column, TableBuilder};
                TableBuilder::new(ui)
                    .striped(true)
                    .column(Column::remainder())
                    .column(Column::auto().at_least(130.0))
                    .header(20.0, |mut header| {
                        header.col(|ui| {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new("CATEGORY")
                                        .size(theme::FONT_SMALL)
                                        .color(theme::TEXT_DIM),
                                )
                                .selectable(false),
                            );
                        });
                        header.col(|ui| {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new("WEIGHT")
                                        .size(theme::FONT_SMALL)
                                        .color(theme::TEXT_DIM),
                                )
                                .selectable(false),
                            );
                        });
                    })
                    .body(|mut body| {
                        for (name, weight) in metrics.current_weights.iter() {
                            body.row(22.0, |mut row| {
                                row.col(|ui| {
                                    ui.label(
                                        egui::RichText::new(name).size(theme::FONT_LABEL),
                                    );
                                });
                                row.col(|ui| {
                                    ui.label(
                                        egui::RichText::new(components::weight_label(weight))
                                            .size(theme::FONT_LABEL)
                                            .color(theme::TEXT_MUTED),
                                    );
                                });
                            });
                        }
                    });
            }

            ui.add_space(theme::SPACING_XL);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let close = ui.add(theme::button(format!("{}  Close", egui_phosphor::regular::X)));
                if close.clicked() {
                    self.show_performance_modal = false;
                }
            });
        });
        if modal_response.should_close() {
            self.show_performance_modal = false;
        }
    }

    fn render_batch_summary_modal(&mut self, ctx: &egui::Context) {
        let Some(summary) = self.batch_summary.clone() else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("batch_summary_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(360.0);
            ui.set_max_width(360.0);

            ui.horizontal(|ui| {
                ui.colored_label(theme::STATUS_SUCCESS, egui_phosphor::regular::CHECK_CIRCLE);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!("Analyzed {} students", summary.count))
                            .size(theme::FONT_HEADING)
                            .strong(),
                    )
                    .selectable(false),
                );
            });
            ui.add_space(theme::SPACING_MD);

            egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                for row in &summary.results {
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&row.student_id)
                                    .size(theme::FONT_LABEL)
                                    .color(theme::TEXT_SECONDARY),
                            )
                            .selectable(false),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(format!(
                                            "{:.1}/100",
                                            row.overall_rating
                                        ))
                                        .size(theme::FONT_LABEL)
                                        .color(theme::score_color(row.overall_rating)),
                                    )
                                    .selectable(false),
                                );
                            },
                        );
                    });
                }
            });

            ui.add_space(theme::SPACING_XL);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let ok = ui.add(theme::button_accent(format!(
                    "{}  OK",
                    egui_phosphor::regular::CHECK
                )));
                if ok.clicked() {
                    self.batch_summary = None;
                }
            });
        });
        if modal_response.should_close() {
            self.batch_summary = None;
        }
    }

    fn render_settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let mut done = false;
        let modal = egui::Modal::new(egui::Id::new("settings_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(320.0);
            ui.set_max_width(320.0);

            ui.horizontal(|ui| {
                ui.colored_label(theme::ACCENT, egui_phosphor::regular::GEAR);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Settings").size(theme::FONT_HEADING).strong(),
                    )
                    .selectable(false),
                );
            });
            ui.add_space(theme::SPACING_MD);

            ui.add(
                egui::Label::new(
                    egui::RichText::new("Backend URL")
                        .size(theme::FONT_SECTION)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
            theme::input_frame().show(ui, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.settings.api_url)
                        .frame(false)
                        .desired_width(ui.available_width()),
                );
            });

            ui.add_space(theme::SPACING_LG);
            ui.horizontal(|ui| {
                let logs = ui.add(theme::button(format!(
                    "{}  Open Logs Folder",
                    egui_phosphor::regular::FOLDER_OPEN
                )));
                if logs.clicked() {
                    let _ = open::that(utils::get_logs_dir());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let save = ui.add(theme::button_accent(format!(
                        "{}  Done",
                        egui_phosphor::regular::CHECK
                    )));
                    if save.clicked() {
                        done = true;
                    }
                });
            });
        });

        if done || modal_response.should_close() {
            self.apply_api_url();
            self.save_settings();
            self.show_settings = false;
        }
    }

    fn render_alert_modal(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.alert.clone() else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("alert_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(320.0);
            ui.set_max_width(320.0);

            ui.vertical_centered(|ui| {
                ui.add_space(4.0);
                match alert.kind {
                    AlertKind::Error => {
                        ui.label(
                            egui::RichText::new(egui_phosphor::regular::WARNING)
                                .size(32.0)
                                .color(theme::STATUS_ERROR),
                        );
                    }
                    AlertKind::Success => {
                        ui.label(
                            egui::RichText::new(egui_phosphor::regular::CHECK_CIRCLE)
                                .size(32.0)
                                .color(theme::STATUS_SUCCESS),
                        );
                    }
                }
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(&alert.title)
                        .size(theme::FONT_HEADING)
                        .strong(),
                );
                ui.add_space(theme::SPACING_SM);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(&alert.message)
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    )
                    .wrap(),
                );
                ui.add_space(theme::SPACING_XL);
                let ok = ui.add(theme::button_accent(format!(
                    "{}  OK",
                    egui_phosphor::regular::CHECK
                )));
                if ok.clicked() {
                    self.alert = None;
                }
            });
        });
        if modal_response.should_close() {
            self.alert = None;
        }
    }

    /// Blocking overlay while an analyze/upload/performance call is in
    /// flight. It has no close affordance; it drops when the call completes.
    fn render_loading_overlay(&mut self, ctx: &egui::Context) {
        if !self.is_loading() {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("loading_overlay"))
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let _ = modal.show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Contacting server...")
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_SECONDARY),
                    )
                    .selectable(false),
                );
            });
        });
    }
}
