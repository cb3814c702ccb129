use egui::{Color32, RichText, ScrollArea};

use crate::console::ConsoleLog;

// Colors
const COLOR_TEXT: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);
const COLOR_PLACEHOLDER: Color32 = Color32::from_rgb(0x77, 0x77, 0x77);

const LINE_FONT_SIZE: f32 = 12.0;

pub fn show_console(ui: &mut egui::Ui, log: &ConsoleLog) {
    ScrollArea::vertical()
        .id_salt("console_scroll")
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if log.is_empty() {
                ui.label(
                    RichText::new("Console output will appear here...")
                        .color(COLOR_PLACEHOLDER)
                        .italics()
                        .size(LINE_FONT_SIZE),
                );
                return;
            }

            for entry in log.entries() {
                ui.label(
                    RichText::new(entry.as_str())
                        .color(COLOR_TEXT)
                        .monospace()
                        .size(LINE_FONT_SIZE),
                );
            }
        });
}
