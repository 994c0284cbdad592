use std::path::PathBuf;

use log::{debug, error, info, warn};

use crate::dialogs::{ColorDialog, DialogOutcome, Notice, ResizeDialog};
use crate::input::{InputEvent, InputHandler, ShortcutAction};
use crate::panels::{central_panel, tools_panel};
use crate::session::CanvasSession;

pub struct PaintApp {
    session: CanvasSession,
    input: InputHandler,
    color_dialog: Option<ColorDialog>,
    resize_dialog: Option<ResizeDialog>,
    notice: Option<Notice>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self {
            session: CanvasSession::default(),
            input: InputHandler::new(),
            color_dialog: None,
            resize_dialog: None,
            notice: None,
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // White canvas reads best against light chrome
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        info!("Starting sketchpad");
        Self::default()
    }

    pub fn session(&self) -> &CanvasSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut CanvasSession {
        &mut self.session
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// True while any prompt or notice is waiting for the user
    pub fn is_modal_open(&self) -> bool {
        self.color_dialog.is_some() || self.resize_dialog.is_some() || self.notice.is_some()
    }

    pub fn open_color_dialog(&mut self) {
        if self.color_dialog.is_none() {
            self.color_dialog = Some(ColorDialog::new(self.session.tools().color()));
        }
    }

    pub fn open_resize_dialog(&mut self) {
        if self.resize_dialog.is_none() {
            self.resize_dialog = Some(ResizeDialog::new(self.session.canvas().size()));
        }
    }

    /// Ask for a destination with the native save dialog, then save.
    pub fn save_with_dialog(&mut self) {
        let destination = rfd::FileDialog::new()
            .set_title("Save drawing")
            .set_file_name("drawing.png")
            .add_filter("PNG files", &["png"])
            .save_file();
        self.apply_save(destination);
    }

    /// Save to `destination` and tell the user how it went. `None` means the
    /// dialog was cancelled: nothing is written and nothing is shown.
    pub fn apply_save(&mut self, destination: Option<PathBuf>) {
        match self.session.save(destination) {
            Ok(Some(path)) => {
                self.notice = Some(Notice::info(format!(
                    "Image saved successfully to {}",
                    path.display()
                )));
            }
            Ok(None) => {}
            Err(err) => {
                error!("{}", err);
                self.notice = Some(Notice::error(err.to_string()));
            }
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            // A release always ends the stroke, even if a prompt opened mid-drag
            InputEvent::PointerRelease => self.session.on_pointer_release(),
            _ if self.is_modal_open() => {
                debug!("Ignoring {:?} while a dialog is open", event);
            }
            InputEvent::PointerDrag { location } => {
                self.session.on_pointer_drag(location.position);
            }
            InputEvent::SecondaryClick { location } if !location.is_in_canvas => {
                debug!("Eyedropper click outside the canvas at {:?}", location.position);
            }
            InputEvent::SecondaryClick { location } => {
                if let Err(err) = self.session.pick_color(location.position) {
                    warn!("Eyedropper ignored: {}", err);
                }
            }
            InputEvent::Shortcut(ShortcutAction::Save) => self.save_with_dialog(),
            InputEvent::Shortcut(ShortcutAction::ChooseColor) => self.open_color_dialog(),
            InputEvent::Shortcut(ShortcutAction::Eraser) => self.session.use_eraser(),
        }
    }

    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(dialog) = &mut self.color_dialog {
            match dialog.show(ctx) {
                DialogOutcome::Pending => {}
                DialogOutcome::Confirmed(color) => {
                    self.session.choose_color(Some(color));
                    self.color_dialog = None;
                }
                DialogOutcome::Cancelled => {
                    self.session.choose_color(None);
                    self.color_dialog = None;
                }
            }
        }

        if let Some(dialog) = &mut self.resize_dialog {
            match dialog.show(ctx) {
                DialogOutcome::Pending => {}
                DialogOutcome::Confirmed((width, height)) => {
                    self.session.resize(width, height);
                    self.resize_dialog = None;
                }
                DialogOutcome::Cancelled => {
                    self.resize_dialog = None;
                }
            }
        }

        if let Some(notice) = &self.notice {
            if notice.show(ctx) {
                self.notice = None;
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for event in self.input.shortcut_events(ctx) {
            self.handle_event(event);
        }

        tools_panel(self, ctx);
        central_panel(self, ctx);
        self.show_dialogs(ctx);
    }
}
