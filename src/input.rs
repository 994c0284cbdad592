use egui::{Context, Event, Key, KeyboardShortcut, Modifiers, PointerButton, Pos2, Rect, Response};

pub const SAVE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);
pub const CHOOSE_COLOR_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND, Key::K);
pub const ERASER_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::NONE, Key::E);

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Canvas-local position, floored to whole pixels
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

impl InputLocation {
    /// Convert a screen position into canvas pixel coordinates
    pub fn from_screen(screen_pos: Pos2, canvas_rect: Rect) -> Self {
        let local = (screen_pos - canvas_rect.min).floor();
        let is_in_canvas = local.x >= 0.0
            && local.y >= 0.0
            && local.x < canvas_rect.width()
            && local.y < canvas_rect.height();
        Self {
            position: local.to_pos2(),
            is_in_canvas,
        }
    }
}

/// Window-level keyboard commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Save,
    ChooseColor,
    Eraser,
}

/// Represents the input the canvas session reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved while the primary button is held
    PointerDrag { location: InputLocation },
    /// Primary button was released
    PointerRelease,
    /// Secondary click, used for the eyedropper
    SecondaryClick { location: InputLocation },
    Shortcut(ShortcutAction),
}

/// Handles converting raw egui input into our domain-specific InputEvents
///
/// Strokes follow the raw pointer events rather than egui's drag detection,
/// so the press position anchors the stroke and every move is reported, even
/// several per frame.
#[derive(Debug, Default)]
pub struct InputHandler {
    /// A primary press landed on the canvas and has not been released yet
    drawing: bool,
    last_drag_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `pos` hits the canvas widget and is not covered by a window
    fn is_over_canvas(ctx: &Context, response: &Response, pos: Pos2) -> bool {
        response.interact_rect.contains(pos)
            && ctx
                .layer_id_at(pos)
                .is_none_or(|layer| layer == response.layer_id)
    }

    fn push_drag(&mut self, events: &mut Vec<InputEvent>, pos: Pos2, canvas_rect: Rect) {
        let location = InputLocation::from_screen(pos, canvas_rect);
        // Moves within the same pixel would only draw a dot over a dot
        if self.last_drag_pos != Some(location.position) {
            self.last_drag_pos = Some(location.position);
            events.push(InputEvent::PointerDrag { location });
        }
    }

    /// Pointer events for the canvas widget occupying `canvas_rect`
    pub fn pointer_events(
        &mut self,
        ctx: &Context,
        response: &Response,
        canvas_rect: Rect,
    ) -> Vec<InputEvent> {
        let raw_events = ctx.input(|i| i.events.clone());
        let mut events = Vec::new();

        for event in raw_events {
            match event {
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: true,
                    ..
                } => {
                    if Self::is_over_canvas(ctx, response, pos) {
                        self.drawing = true;
                        self.last_drag_pos = None;
                        self.push_drag(&mut events, pos, canvas_rect);
                    }
                }
                Event::PointerButton {
                    button: PointerButton::Primary,
                    pressed: false,
                    ..
                } => {
                    self.drawing = false;
                    self.last_drag_pos = None;
                    events.push(InputEvent::PointerRelease);
                }
                Event::PointerMoved(pos) if self.drawing => {
                    self.push_drag(&mut events, pos, canvas_rect);
                }
                Event::PointerButton {
                    pos,
                    button: PointerButton::Secondary,
                    pressed: true,
                    ..
                } => {
                    if Self::is_over_canvas(ctx, response, pos) {
                        events.push(InputEvent::SecondaryClick {
                            location: InputLocation::from_screen(pos, canvas_rect),
                        });
                    }
                }
                _ => {}
            }
        }

        events
    }

    /// Consume the window-level keyboard shortcuts pressed this frame
    pub fn shortcut_events(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let typing = ctx.wants_keyboard_input();
        ctx.input_mut(|input| {
            let mut events = Vec::new();
            if input.consume_shortcut(&SAVE_SHORTCUT) {
                events.push(InputEvent::Shortcut(ShortcutAction::Save));
            }
            if input.consume_shortcut(&CHOOSE_COLOR_SHORTCUT) {
                events.push(InputEvent::Shortcut(ShortcutAction::ChooseColor));
            }
            if !typing && input.consume_shortcut(&ERASER_SHORTCUT) {
                events.push(InputEvent::Shortcut(ShortcutAction::Eraser));
            }
            events
        })
    }
}
