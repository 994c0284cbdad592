//! Modal prompts.
//!
//! egui is immediate mode, so a "modal" is a window shown every frame until
//! the user answers it. While one is open the canvas ignores pointer input.

use egui::{Align2, Color32, Context, RichText};
use egui::color_picker::{Alpha, color_picker_color32};

/// The answer to a prompt, polled once per frame
#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome<T> {
    Pending,
    Confirmed(T),
    Cancelled,
}

fn modal_window(title: &str) -> egui::Window<'_> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
}

/// Color prompt seeded with the current pen color
#[derive(Debug, Clone)]
pub struct ColorDialog {
    color: Color32,
}

impl ColorDialog {
    pub fn new(current: Color32) -> Self {
        Self { color: current }
    }

    pub fn show(&mut self, ctx: &Context) -> DialogOutcome<Color32> {
        let mut outcome = DialogOutcome::Pending;
        modal_window("Choose color").show(ctx, |ui| {
            color_picker_color32(ui, &mut self.color, Alpha::Opaque);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    outcome = DialogOutcome::Confirmed(self.color);
                }
                if ui.button("Cancel").clicked() {
                    outcome = DialogOutcome::Cancelled;
                }
            });
        });
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            outcome = DialogOutcome::Cancelled;
        }
        outcome
    }
}

/// Parse one dimension field: a positive integer, surrounding whitespace ignored.
pub fn parse_dimension(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|value| *value > 0)
}

/// Width/height prompt for resizing the canvas
#[derive(Debug, Clone)]
pub struct ResizeDialog {
    width: String,
    height: String,
}

impl ResizeDialog {
    pub fn new([width, height]: [u32; 2]) -> Self {
        Self {
            width: width.to_string(),
            height: height.to_string(),
        }
    }

    /// The parsed fields; `None` for any field that is not a positive integer
    pub fn dimensions(&self) -> (Option<u32>, Option<u32>) {
        (parse_dimension(&self.width), parse_dimension(&self.height))
    }

    pub fn show(&mut self, ctx: &Context) -> DialogOutcome<(Option<u32>, Option<u32>)> {
        let mut outcome = DialogOutcome::Pending;
        modal_window("Resize canvas").show(ctx, |ui| {
            ui.label("The current drawing will be discarded.");
            egui::Grid::new("resize_grid").num_columns(2).show(ui, |ui| {
                ui.label("Width:");
                ui.text_edit_singleline(&mut self.width);
                ui.end_row();
                ui.label("Height:");
                ui.text_edit_singleline(&mut self.height);
                ui.end_row();
            });
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    outcome = DialogOutcome::Confirmed(self.dimensions());
                }
                if ui.button("Cancel").clicked() {
                    outcome = DialogOutcome::Cancelled;
                }
            });
        });
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            outcome = DialogOutcome::Cancelled;
        }
        outcome
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message the user dismisses with OK
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    kind: NoticeKind,
    message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true once dismissed
    pub fn show(&self, ctx: &Context) -> bool {
        let title = match self.kind {
            NoticeKind::Info => "Information",
            NoticeKind::Error => "Error",
        };
        let mut dismissed = false;
        modal_window(title).show(ctx, |ui| {
            let text = RichText::new(&self.message);
            match self.kind {
                NoticeKind::Info => ui.label(text),
                NoticeKind::Error => ui.label(text.color(ui.visuals().error_fg_color)),
            };
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
        dismissed
    }
}
