use std::path::PathBuf;

use egui::{Align2, Color32, CornerRadius, FontId, Id, LayerId, Order};

use crate::controller::{AppState, MergeOutcome};
use crate::error::Error;

use super::console::show_console;
use super::dialogs;
use super::file_list::{self, show_file_list, FileListState};

pub const APP_TITLE: &str = "PDF Merger (Drag & Drop)";

// Colors
const COLOR_BAR_BG: Color32 = Color32::from_rgb(0x2b, 0x2b, 0x2b);
const COLOR_CONSOLE_BG: Color32 = Color32::from_rgb(0x1e, 0x1e, 0x1e);
const COLOR_DROP_TINT: Color32 = Color32::from_rgba_premultiplied(0x00, 0x3c, 0x6b, 0x60);

pub struct DropMergeApp {
    state: AppState,
    file_list: FileListState,
}

impl Default for DropMergeApp {
    fn default() -> Self {
        Self::new()
    }
}

impl DropMergeApp {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            file_list: FileListState::default(),
        }
    }

    /// Pull completed drop events out of the frame input. egui reports all
    /// files released in one gesture within a single frame, which is exactly
    /// one drop event for the controller.
    fn collect_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });

        if !dropped.is_empty() {
            self.state.handle_drop(&dropped);
        }
    }

    fn run_merge(&mut self) {
        match self.state.merge_with_prompt(dialogs::prompt_save_path) {
            MergeOutcome::TooFewFiles { have } => {
                dialogs::warning("Error", &Error::TooFewFiles(have).to_string());
            }
            MergeOutcome::Cancelled => {}
            MergeOutcome::Merged(report) => {
                dialogs::info(
                    "Success",
                    &format!("Merged PDF saved: {}", report.output.display()),
                );
            }
            MergeOutcome::Failed(err) => {
                dialogs::error("Error", &Error::Merge(err).to_string());
            }
        }
    }

    fn paint_drop_hover(&self, ctx: &egui::Context) {
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
        if !hovering {
            return;
        }

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("drop_overlay")));
        let rect = ctx.screen_rect();
        painter.rect_filled(rect, CornerRadius::ZERO, COLOR_DROP_TINT);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "Drop PDF files here",
            FontId::proportional(18.0),
            Color32::WHITE,
        );
    }
}

impl eframe::App for DropMergeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.collect_dropped_files(ctx);

        // Console at the very bottom
        egui::TopBottomPanel::bottom("console_panel")
            .resizable(true)
            .default_height(140.0)
            .min_height(60.0)
            .frame(
                egui::Frame::NONE
                    .fill(COLOR_CONSOLE_BG)
                    .inner_margin(egui::Margin::same(6)),
            )
            .show(ctx, |ui| {
                show_console(ui, &self.state.console);
            });

        // Merge button between list and console
        egui::TopBottomPanel::bottom("merge_bar")
            .exact_height(40.0)
            .frame(
                egui::Frame::NONE
                    .fill(COLOR_BAR_BG)
                    .inner_margin(egui::Margin::symmetric(8, 6)),
            )
            .show(ctx, |ui| {
                let button = egui::Button::new("Merge PDFs");
                if ui.add_sized([ui.available_width(), 28.0], button).clicked() {
                    self.run_merge();
                }
            });

        // File list fills the rest
        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(file_list::COLOR_BG)
                    .inner_margin(egui::Margin::same(4)),
            )
            .show(ctx, |ui| {
                show_file_list(ui, self.state.files.entries(), &mut self.file_list);
            });

        self.paint_drop_hover(ctx);
    }
}
