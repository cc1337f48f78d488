//! Command line arguments and viewer configuration

use crate::viewer::Zoom;
use clap::Parser;
use std::path::PathBuf;

/// Distraction-free PDF reader
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// PDF to open. A file dialog is shown when omitted.
    pub file: Option<PathBuf>,

    /// Directory holding the PDFium shared library
    #[arg(long, value_name = "DIR")]
    pub pdfium_lib: Option<PathBuf>,

    /// Initial zoom in percent (50-300)
    #[arg(long, value_name = "PERCENT", default_value_t = 100)]
    pub zoom: u16,

    /// Start in fullscreen
    #[arg(long)]
    pub fullscreen: bool,

    /// Initial window width
    #[arg(long, value_name = "PX", default_value_t = 800.0)]
    pub width: f32,

    /// Initial window height
    #[arg(long, value_name = "PX", default_value_t = 600.0)]
    pub height: f32,
}

/// Configuration for the PDF viewer
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub initial_window_width: f32,
    pub initial_window_height: f32,
    /// Height of the controls bar below the page
    pub controls_height: f32,
    pub initial_zoom: Zoom,
    pub start_fullscreen: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            initial_window_width: 800.0,
            initial_window_height: 600.0,
            controls_height: 40.0,
            initial_zoom: Zoom::default(),
            start_fullscreen: false,
        }
    }
}

impl From<&Args> for ViewerConfig {
    fn from(args: &Args) -> Self {
        Self {
            initial_window_width: args.width,
            initial_window_height: args.height,
            initial_zoom: Zoom::new(args.zoom),
            start_fullscreen: args.fullscreen,
            ..Self::default()
        }
    }
}
