#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod dialogs;
pub mod error;
pub mod export;
pub mod input;
pub mod panels;
pub mod session;
pub mod stroke;
pub mod surface;
pub mod tools;

pub use app::PaintApp;
pub use canvas::Canvas;
pub use error::{CanvasError, ExportError};
pub use input::{InputEvent, InputLocation};
pub use session::{CanvasSession, SessionConfig};
pub use stroke::{Segment, StrokeState};
pub use surface::DrawingSink;
pub use tools::{BrushWidth, ToolState};
