use egui::{CursorIcon, Sense, vec2};

use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let [width, height] = app.session().canvas().size();
        let state = if app.session().stroke_state().is_stroking() {
            "drawing"
        } else {
            "idle"
        };
        ui.label(format!(
            "{width} × {height} px · {state} · right-click to pick a color"
        ));

        egui::ScrollArea::both().show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(
                vec2(width as f32, height as f32),
                Sense::click_and_drag(),
            );
            let rect = response.rect;

            for event in app.input_mut().pointer_events(ctx, &response, rect) {
                app.handle_event(event);
            }

            app.session_mut().paint(&painter, rect.min);
            response.on_hover_cursor(CursorIcon::Crosshair);
        });
    });
}
