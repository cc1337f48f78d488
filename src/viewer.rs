//! Page navigation and render state

use crate::document::{Document, DocumentSource, Frame, Offset, PixelSize, centered_offset};
use crate::error::{InputError, OpenError};
use crate::input::Command;
use std::path::Path;

/// Name shown at the start of the window title
pub const APP_NAME: &str = "Stillpage";

/// Zoom level in percent, always within [`Zoom::MIN`, `Zoom::MAX`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Zoom(u16);

impl Zoom {
    pub const MIN: u16 = 50;
    pub const MAX: u16 = 300;
    pub const STEP: u16 = 10;

    /// Clamp `percent` into range
    pub fn new(percent: u16) -> Self {
        Self(percent.clamp(Self::MIN, Self::MAX))
    }

    pub fn percent(self) -> u16 {
        self.0
    }

    /// Render scale, 1.0 at 100%
    pub fn scale(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    pub fn zoomed_in(self) -> Self {
        Self::new(self.0.saturating_add(Self::STEP))
    }

    pub fn zoomed_out(self) -> Self {
        Self::new(self.0.saturating_sub(Self::STEP))
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(100)
    }
}

/// Where the reader is in the document and how it is displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewerState {
    pub page_index: usize,
    pub zoom: Zoom,
    pub fullscreen: bool,
}

/// The window a page is painted into
pub trait DisplaySurface {
    /// Current drawable area
    fn size(&self) -> PixelSize;

    /// Replace whatever is on screen with `frame`, its top-left corner at `offset`
    fn paint(&mut self, frame: Frame, offset: Offset);

    fn set_title(&mut self, title: String);

    fn set_fullscreen(&mut self, fullscreen: bool);

    /// Non-fatal problem the user should see
    fn warn(&mut self, error: &InputError);

    /// Fatal problem; the session is closed right after
    fn fail(&mut self, error: &OpenError);

    /// End the session
    fn close(&mut self);
}

/// Window title for page `index` (0-based) of `page_count`
pub fn page_title(index: usize, page_count: usize, zoom: Zoom) -> String {
    format!(
        "{} - Page {}/{} - Zoom: {}%",
        APP_NAME,
        index + 1,
        page_count,
        zoom.percent()
    )
}

/// Owns the open document and drives the display surface
pub struct ViewerController<S: DocumentSource, D: DisplaySurface> {
    source: S,
    surface: D,
    document: Option<S::Document>,
    state: ViewerState,
}

impl<S: DocumentSource, D: DisplaySurface> ViewerController<S, D> {
    pub fn new(source: S, surface: D) -> Self {
        Self::with_state(source, surface, ViewerState::default())
    }

    /// Start from `state` instead of the defaults. The page index is reset on open.
    pub fn with_state(source: S, surface: D, state: ViewerState) -> Self {
        Self {
            source,
            surface,
            document: None,
            state,
        }
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub fn page_count(&self) -> usize {
        self.document.as_ref().map_or(0, |doc| doc.page_count())
    }

    /// Open `path` and show its first page, returning the page count.
    /// On failure the error is shown and the session closed.
    pub fn open_document(&mut self, path: &Path) -> Result<usize, OpenError> {
        let opened = self.source.open(path).and_then(|document| {
            if document.page_count() == 0 {
                Err(OpenError::Empty(path.to_path_buf()))
            } else {
                Ok(document)
            }
        });

        match opened {
            Ok(document) => {
                let page_count = document.page_count();
                log::info!("Opened {} ({} pages)", path.display(), page_count);
                self.document = Some(document);
                self.state.page_index = 0;
                self.show_page(0);
                Ok(page_count)
            }
            Err(e) => {
                log::error!("Failed to open PDF: {}", e);
                self.document = None;
                self.surface.fail(&e);
                self.surface.close();
                Err(e)
            }
        }
    }

    /// Render and paint page `index`. Ignored when out of range.
    pub fn show_page(&mut self, index: usize) {
        let Some(document) = &self.document else {
            return;
        };
        let page_count = document.page_count();
        if index >= page_count {
            return;
        }

        let zoom = self.state.zoom;
        let frame = match document.render_page(index, zoom.scale()) {
            Ok(frame) => frame,
            Err(e) => {
                log::warn!("Could not render page {}: {}", index + 1, e);
                return;
            }
        };
        log::debug!(
            "Rendered page {} at {}%: {}x{}",
            index + 1,
            zoom.percent(),
            frame.width,
            frame.height
        );

        let offset = centered_offset(self.surface.size(), frame.size());
        self.surface.paint(frame, offset);
        self.state.page_index = index;
        self.surface.set_title(page_title(index, page_count, zoom));
    }

    pub fn next_page(&mut self) {
        if self.state.page_index + 1 < self.page_count() {
            self.show_page(self.state.page_index + 1);
        }
    }

    pub fn previous_page(&mut self) {
        if self.is_loaded() && self.state.page_index > 0 {
            self.show_page(self.state.page_index - 1);
        }
    }

    /// Jump to the 1-based page number typed in `raw`
    pub fn go_to_page(&mut self, raw: &str) -> Result<(), InputError> {
        match parse_page_number(raw, self.page_count()) {
            Ok(index) => {
                self.show_page(index);
                Ok(())
            }
            Err(e) => {
                log::warn!("Rejected page entry {:?}: {}", raw, e);
                self.surface.warn(&e);
                Err(e)
            }
        }
    }

    pub fn toggle_fullscreen(&mut self) {
        self.state.fullscreen = !self.state.fullscreen;
        self.surface.set_fullscreen(self.state.fullscreen);
    }

    pub fn exit_fullscreen_or_close(&mut self) {
        if self.state.fullscreen {
            self.state.fullscreen = false;
            self.surface.set_fullscreen(false);
        } else {
            log::info!("Closing viewer");
            self.surface.close();
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.state.zoom.zoomed_in());
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.state.zoom.zoomed_out());
    }

    fn set_zoom(&mut self, zoom: Zoom) {
        log::debug!("Zoom {}% -> {}%", self.state.zoom.percent(), zoom.percent());
        self.state.zoom = zoom;
        self.show_page(self.state.page_index);
    }

    /// Route a command to its operation. Only closing works without a document.
    pub fn dispatch(&mut self, command: Command) {
        if !self.is_loaded() && command != Command::ExitFullscreenOrClose {
            return;
        }

        match command {
            Command::NextPage => self.next_page(),
            Command::PreviousPage => self.previous_page(),
            Command::GoToPage(raw) => {
                // Rejected entries are already shown as a warning.
                let _ = self.go_to_page(&raw);
            }
            Command::ToggleFullscreen => self.toggle_fullscreen(),
            Command::ExitFullscreenOrClose => self.exit_fullscreen_or_close(),
            Command::ZoomIn => self.zoom_in(),
            Command::ZoomOut => self.zoom_out(),
        }
    }
}

/// Parse a 1-based page number into a page index
fn parse_page_number(raw: &str, page_count: usize) -> Result<usize, InputError> {
    let page: i64 = raw
        .trim()
        .parse()
        .map_err(|_| InputError::NotANumber(raw.to_string()))?;

    usize::try_from(page)
        .ok()
        .filter(|&p| (1..=page_count).contains(&p))
        .map(|p| p - 1)
        .ok_or(InputError::OutOfRange { page, page_count })
}
