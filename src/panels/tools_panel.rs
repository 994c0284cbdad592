use egui::{ComboBox, Slider, vec2};
use egui::color_picker::show_color;

use crate::PaintApp;
use crate::tools::{ActiveTool, BrushWidth};

const SWATCH_SIZE: egui::Vec2 = vec2(18.0, 18.0);

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let enabled = !app.is_modal_open();
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal_wrapped(|ui| {
                if ui.button("Clear").clicked() {
                    app.session_mut().clear();
                }

                let tools = app.session().tools().clone();
                if ui.button("Choose color").on_hover_text("Ctrl+K").clicked() {
                    app.open_color_dialog();
                }
                show_color(ui, tools.color(), SWATCH_SIZE);

                if let Some(previous) = tools.previous_color() {
                    if ui
                        .small_button("⟲")
                        .on_hover_text("Swap with previous color")
                        .clicked()
                    {
                        app.session_mut().recall_previous_color();
                    }
                    show_color(ui, previous, SWATCH_SIZE);
                }

                if ui
                    .selectable_label(tools.active_tool() == ActiveTool::Eraser, "Eraser")
                    .on_hover_text("E")
                    .clicked()
                {
                    app.session_mut().use_eraser();
                }

                if ui.button("Save").on_hover_text("Ctrl+S").clicked() {
                    log::info!("Save requested from toolbar");
                    app.save_with_dialog();
                }

                if ui.button("Resize").clicked() {
                    app.open_resize_dialog();
                }

                ui.separator();

                // The slider is the source of truth; the preset menu writes into it
                let current = tools.brush_width().get();
                let mut width = current;
                ui.label("Brush size:");
                ui.add(Slider::new(&mut width, BrushWidth::MIN..=BrushWidth::MAX));
                let preset_text = if BrushWidth::new(width).is_preset() {
                    width.to_string()
                } else {
                    "custom".to_owned()
                };
                ComboBox::from_label("px")
                    .selected_text(preset_text)
                    .width(48.0)
                    .show_ui(ui, |ui| {
                        for preset in BrushWidth::PRESETS {
                            ui.selectable_value(&mut width, preset, preset.to_string());
                        }
                    });
                if width != current {
                    app.session_mut().set_brush_width(width);
                }
            });
        });
    });
}
