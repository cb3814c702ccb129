use std::path::PathBuf;

use egui::{Color32, RichText, ScrollArea, Stroke};

// Colors
pub(super) const COLOR_BG: Color32 = Color32::from_rgb(0x80, 0x80, 0x80);
const COLOR_TEXT: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x1a);
const COLOR_HINT: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
const COLOR_SELECTED: Color32 = Color32::from_rgb(0x00, 0x78, 0xd7);

const ITEM_FONT_SIZE: f32 = 14.0;

#[derive(Default)]
pub struct FileListState {
    pub selected: Option<usize>,
}

pub fn show_file_list(ui: &mut egui::Ui, entries: &[PathBuf], state: &mut FileListState) {
    ui.visuals_mut().selection.bg_fill = COLOR_SELECTED;
    ui.visuals_mut().selection.stroke = Stroke::new(1.0, Color32::WHITE);

    ScrollArea::vertical()
        .id_salt("file_list_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if entries.is_empty() {
                ui.add_space(8.0);
                ui.label(
                    RichText::new("Drag PDF files here")
                        .color(COLOR_HINT)
                        .size(ITEM_FONT_SIZE),
                );
                return;
            }

            for (i, path) in entries.iter().enumerate() {
                let selected = state.selected == Some(i);
                let text = RichText::new(path.display().to_string())
                    .color(if selected { Color32::WHITE } else { COLOR_TEXT })
                    .size(ITEM_FONT_SIZE);

                if ui.selectable_label(selected, text).clicked() {
                    state.selected = Some(i);
                }
            }
        });
}
