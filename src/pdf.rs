//! PDF loading and rendering through PDFium

use crate::document::{Document, DocumentSource, Frame};
use crate::error::{OpenError, RenderError};
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};

fn library_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "pdfium.dll"
    } else if cfg!(target_os = "macos") {
        "libpdfium.dylib"
    } else {
        "libpdfium.so"
    }
}

/// Initialize the PDFium library, trying `search_dir` first when given
pub fn init_pdfium(search_dir: Option<&Path>) -> Result<Pdfium, PdfiumError> {
    let lib_name = library_name();

    let mut candidates: Vec<String> = search_dir
        .map(|dir| dir.join(lib_name).display().to_string())
        .into_iter()
        .collect();
    candidates.push(format!("./{}", lib_name));
    candidates.push(format!("/usr/lib/{}", lib_name));

    for candidate in candidates {
        match Pdfium::bind_to_library(&candidate) {
            Ok(bindings) => return Ok(Pdfium::new(bindings)),
            Err(e) => log::debug!("PDFium not at {}: {}", candidate, e),
        }
    }

    let bindings = Pdfium::bind_to_system_library()?;
    Ok(Pdfium::new(bindings))
}

/// Opens documents with PDFium, binding the library on first use
#[derive(Default)]
pub struct PdfiumSource {
    library_dir: Option<PathBuf>,
    pdfium: Option<&'static Pdfium>,
}

impl PdfiumSource {
    pub fn new(library_dir: Option<PathBuf>) -> Self {
        Self {
            library_dir,
            pdfium: None,
        }
    }

    fn pdfium(&mut self) -> Result<&'static Pdfium, OpenError> {
        if let Some(pdfium) = self.pdfium {
            return Ok(pdfium);
        }
        let pdfium = init_pdfium(self.library_dir.as_deref()).map_err(OpenError::Library)?;
        // Documents borrow the library for as long as the process runs.
        let pdfium: &'static Pdfium = Box::leak(Box::new(pdfium));
        self.pdfium = Some(pdfium);
        Ok(pdfium)
    }
}

impl DocumentSource for PdfiumSource {
    type Document = PdfiumDocument;

    fn open(&mut self, path: &Path) -> Result<PdfiumDocument, OpenError> {
        if !path.is_file() {
            return Err(OpenError::NotFound(path.to_path_buf()));
        }

        let pdfium = self.pdfium()?;
        let inner = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|source| OpenError::Load {
                path: path.to_path_buf(),
                source,
            })?;

        let page_count = usize::from(inner.pages().len());
        if page_count == 0 {
            return Err(OpenError::Empty(path.to_path_buf()));
        }

        log::debug!("PDFium loaded {} ({} pages)", path.display(), page_count);
        Ok(PdfiumDocument { inner, page_count })
    }
}

/// A document held open by PDFium
pub struct PdfiumDocument {
    inner: PdfDocument<'static>,
    page_count: usize,
}

impl Document for PdfiumDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    /// Scale 1.0 renders at 72 DPI, PDFium's native resolution.
    fn render_page(&self, index: usize, scale: f32) -> Result<Frame, RenderError> {
        let page_index = u16::try_from(index)
            .ok()
            .filter(|_| index < self.page_count)
            .ok_or(RenderError::PageOutOfRange(index))?;

        let page = self.inner.pages().get(page_index)?;

        let render_config = PdfRenderConfig::new().scale_page_by_factor(scale);
        let bitmap = page.render_with_config(&render_config)?;

        Ok(Frame::from(bitmap.as_image().to_rgba8()))
    }
}
