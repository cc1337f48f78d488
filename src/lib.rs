//! Stillpage - a distraction-free PDF reader library
//!
//! This library provides page navigation, zoom and fullscreen handling for a
//! single-document PDF viewer. Rendering goes through PDFium and the window
//! through iced; the [`ViewerController`] only talks to them through the
//! [`DocumentSource`] and [`DisplaySurface`] traits.

pub mod config;
pub mod document;
pub mod error;
pub mod input;
pub mod pdf;
pub mod ui;
pub mod viewer;

pub use config::{Args, ViewerConfig};
pub use document::{Document, DocumentSource, Frame};
pub use error::{InputError, OpenError, RenderError};
pub use input::{Command, KeyBindings};
pub use pdf::PdfiumSource;
pub use ui::ViewerApp;
pub use viewer::{DisplaySurface, ViewerController, ViewerState, Zoom};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::document::{Document, DocumentSource, Frame, Offset, PixelSize};
    pub use crate::error::{InputError, OpenError, RenderError};
    pub use crate::input::{Command, KeyBindings};
    pub use crate::viewer::{DisplaySurface, ViewerController, ViewerState, Zoom};
}
