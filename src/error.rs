//! Error types for opening documents, rendering pages and page entry

use pdfium_render::prelude::PdfiumError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to open a document. Always fatal for the session.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("no such file: {}", .0.display())]
    NotFound(PathBuf),

    #[error("could not load the PDFium library: {0}")]
    Library(#[source] PdfiumError),

    #[error("could not read {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: PdfiumError,
    },

    #[error("{} has no pages", .0.display())]
    Empty(PathBuf),
}

/// Failure to rasterize a single page.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("page {0} does not exist")]
    PageOutOfRange(usize),

    #[error("PDFium failed to render the page: {0}")]
    Pdfium(#[from] PdfiumError),
}

/// Rejected page entry. The user may correct it and try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid page number.")]
    NotANumber(String),

    #[error("Page out of range.")]
    OutOfRange { page: i64, page_count: usize },
}

impl InputError {
    /// Dialog title for this warning
    pub fn title(&self) -> &'static str {
        match self {
            InputError::NotANumber(_) => "Invalid Input",
            InputError::OutOfRange { .. } => "Invalid Page",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_carry_dialog_text() {
        let nan = InputError::NotANumber("abc".to_string());
        assert_eq!(nan.title(), "Invalid Input");
        assert_eq!(nan.to_string(), "Please enter a valid page number.");

        let range = InputError::OutOfRange { page: 9, page_count: 5 };
        assert_eq!(range.title(), "Invalid Page");
        assert_eq!(range.to_string(), "Page out of range.");
    }

    #[test]
    fn open_errors_name_the_file() {
        let err = OpenError::NotFound(PathBuf::from("/tmp/missing.pdf"));
        assert_eq!(err.to_string(), "no such file: /tmp/missing.pdf");

        let err = OpenError::Empty(PathBuf::from("blank.pdf"));
        assert_eq!(err.to_string(), "blank.pdf has no pages");
    }
}
