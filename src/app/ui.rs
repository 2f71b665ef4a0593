use super::{AdminAction, SubmitPhase, XeroxUploader};
use crate::notify::Severity;
use crate::upload::{validator, FileCandidate, UploadOutcome};
use crate::utils::file_size::FileSizeUtils;
use eframe::egui::{self, Align, Align2, Color32, RichText};
use rfd::FileDialog;

const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);
const SUCCESS_GREEN: Color32 = Color32::from_rgb(0, 180, 0);
const ERROR_RED: Color32 = Color32::from_rgb(220, 50, 50);

fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Info => Color32::from_rgb(90, 140, 220),
        Severity::Success => SUCCESS_GREEN,
        Severity::Warning => Color32::from_rgb(230, 160, 30),
        Severity::Error => ERROR_RED,
    }
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "ℹ",
        Severity::Success => "✅",
        Severity::Warning => "⚠",
        Severity::Error => "❌",
    }
}

impl XeroxUploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let total_height = ui.available_height();
            let footer_height = 40.0;
            let footer_margin = 15.0;
            let content_height = total_height - footer_height - footer_margin;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    ui.add_space(15.0);
                    ui.vertical_centered(|ui| {
                        ui.heading("Cyber Café Xerox Service");
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new("Send a document to the print counter")
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    });

                    ui.add_space(15.0);
                    self.render_banners(ui);

                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.label("Service endpoint");
                            ui.add_space(4.0);
                            ui.label("ℹ").on_hover_text_at_pointer(
                                "Where the file is sent. Leave the default unless\n\
                                the attendant gives you a different address.",
                            );
                        });
                        ui.add_space(4.0);
                        ui.add_enabled_ui(!self.state.is_submitting(), |ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.endpoint)
                                    .desired_width(ui.available_width())
                                    .font(egui::TextStyle::Monospace)
                                    .hint_text("http://localhost:5000/upload"),
                            );
                        });
                    });

                    ui.add_space(15.0);
                    self.render_file_picker(ui);

                    ui.add_space(15.0);
                    self.render_submit_controls(ui);

                    if !matches!(self.state.phase, SubmitPhase::Idle) {
                        ui.add_space(15.0);
                        ui.group(|ui| {
                            ui.label(self.state.status_text());
                            let progress_bar =
                                egui::ProgressBar::new(self.state.display_fraction())
                                    .show_percentage()
                                    .animate(self.state.is_submitting())
                                    .fill(ACCENT);
                            ui.add(progress_bar);
                        });
                    }

                    if !self.state.history.is_empty() {
                        ui.add_space(10.0);
                        self.render_history(ui);
                    }

                    ui.add_space(20.0);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(footer_margin);
                self.render_footer(ui);
            });
        });

        self.render_toasts(ctx);
    }

    fn render_banners(&mut self, ui: &mut egui::Ui) {
        let mut dismissed = None;
        for (index, banner) in self.banners.iter().enumerate() {
            let color = severity_color(banner.severity);
            egui::Frame::none()
                .fill(color.gamma_multiply(0.15))
                .stroke(egui::Stroke::new(1.0, color))
                .rounding(4.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(severity_icon(banner.severity));
                        ui.label(&banner.message);
                        ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                            if ui.small_button("✖").clicked() {
                                dismissed = Some(index);
                            }
                        });
                    });
                });
            ui.add_space(6.0);
        }
        if let Some(index) = dismissed {
            self.banners.dismiss(index);
        }
    }

    fn render_file_picker(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.add_enabled_ui(!self.state.is_submitting(), |ui| {
                    if ui.button("📁 Choose File").clicked() {
                        if let Some(paths) = FileDialog::new()
                            .add_filter("Documents & images", &validator::ALLOWED_EXTENSIONS)
                            .pick_files()
                        {
                            let candidates: Result<Vec<_>, String> = paths
                                .iter()
                                .map(|path| FileCandidate::from_path(path))
                                .collect();
                            match candidates {
                                Ok(files) => self.files_chosen(files),
                                Err(error) => self.dialogs.alert(&error),
                            }
                        }
                    }
                });

                match &self.state.selection {
                    Some(file) => {
                        ui.label(format!(
                            "{} ({})",
                            file.name,
                            FileSizeUtils::format_size(file.size)
                        ));
                        if !self.state.is_submitting() && ui.small_button("✖").clicked() {
                            self.run_admin(AdminAction::DiscardSelection);
                        }
                    }
                    None => {
                        ui.label(
                            RichText::new("No file selected")
                                .color(ui.visuals().text_color().gamma_multiply(0.6)),
                        );
                    }
                }
            });
        });
    }

    fn render_submit_controls(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            match self.state.phase {
                SubmitPhase::Submitting => {
                    // Busy state: the control stays visible but refuses input,
                    // so the form cannot be submitted twice.
                    ui.add_enabled(
                        false,
                        egui::Button::new("⏳ Uploading...").min_size(egui::vec2(200.0, 40.0)),
                    );
                }
                SubmitPhase::Done => {
                    if ui.button("🔄 New Upload").clicked() {
                        self.state.reset_for_new_upload();
                    }
                    ui.add_space(5.0);
                    if ui.button("🗑 Clear History").clicked() {
                        self.run_admin(AdminAction::ClearHistory);
                    }
                }
                SubmitPhase::Idle => {
                    let can_submit = self.state.selection.is_some();
                    ui.add_enabled_ui(can_submit, |ui| {
                        let button = egui::Button::new("📤 Send to Counter")
                            .min_size(egui::vec2(200.0, 40.0));
                        if ui.add(button).clicked() {
                            let now = ui.input(|i| i.time);
                            self.start_upload(now);
                        }
                    });
                }
            }
        });
    }

    fn render_history(&mut self, ui: &mut egui::Ui) {
        if ui
            .button(if self.state.show_history {
                "Hide History"
            } else {
                "Show History"
            })
            .clicked()
        {
            self.state.show_history = !self.state.show_history;
        }

        if self.state.show_history {
            egui::ScrollArea::vertical()
                .max_height(200.0)
                .show(ui, |ui| {
                    egui::Frame::none()
                        .fill(ui.style().visuals.extreme_bg_color)
                        .show(ui, |ui| {
                            ui.add_space(8.0);
                            for record in &self.state.history {
                                match &record.outcome {
                                    UploadOutcome::Accepted { stored_name } => {
                                        ui.horizontal(|ui| {
                                            ui.label("✅");
                                            ui.colored_label(
                                                SUCCESS_GREEN,
                                                format!("{} → {}", record.name, stored_name),
                                            );
                                        });
                                    }
                                    UploadOutcome::Rejected(reason) => {
                                        ui.horizontal(|ui| {
                                            ui.label("⚠");
                                            ui.colored_label(
                                                ERROR_RED,
                                                format!("{} - {}", record.name, reason),
                                            );
                                        });
                                    }
                                    UploadOutcome::Failed(reason) => {
                                        ui.horizontal(|ui| {
                                            ui.label("❌");
                                            ui.colored_label(
                                                ERROR_RED,
                                                format!("{} - {}", record.name, reason),
                                            );
                                        });
                                    }
                                }
                                ui.add_space(4.0);
                            }
                            ui.add_space(8.0);
                        });
                });
        }
    }

    fn render_toasts(&mut self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
            .show(ctx, |ui| {
                for (index, toast) in self.toasts.iter().enumerate() {
                    let color = severity_color(toast.severity);
                    egui::Frame::none()
                        .fill(ui.style().visuals.extreme_bg_color)
                        .stroke(egui::Stroke::new(1.0, color))
                        .rounding(4.0)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(severity_icon(toast.severity));
                                ui.colored_label(color, &toast.message);
                                if ui.small_button("✖").clicked() {
                                    dismissed = Some(index);
                                }
                            });
                        });
                    ui.add_space(6.0);
                }
            });
        if let Some(index) = dismissed {
            self.toasts.dismiss(index);
        }
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        let footer_width = 260.0;
        let indent = (ui.available_width() - footer_width) / 2.0;

        ui.horizontal(|ui| {
            ui.add_space(indent);
            ui.scope(|ui| {
                ui.set_width(footer_width);
                ui.horizontal_centered(|ui| {
                    ui.label("Questions? Ask at the counter or visit");
                    if ui
                        .add(
                            egui::Label::new(RichText::new("the service page").color(ACCENT))
                                .sense(egui::Sense::click()),
                        )
                        .clicked()
                    {
                        let _ = open::that("https://cyber-cafe-xerox-app.onrender.com/");
                    }
                });
            });
        });

        if let Some(error) = &self.state.error_message {
            ui.add_space(5.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(ERROR_RED, error);
            });
        }
    }
}
