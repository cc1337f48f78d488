//! Seams between the viewer and the PDF backend

use crate::error::{OpenError, RenderError};
use std::path::Path;

/// Width and height in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Position of a frame's top-left corner on the surface. Negative when
/// the frame is larger than the surface on that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

/// Offset that centers `frame` on `surface`, per axis, truncating toward zero.
pub fn centered_offset(surface: PixelSize, frame: PixelSize) -> Offset {
    let axis = |s: u32, f: u32| ((i64::from(s) - i64::from(f)) / 2) as i32;
    Offset {
        x: axis(surface.width, frame.width),
        y: axis(surface.height, frame.height),
    }
}

/// A rasterized page as packed RGBA pixels
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn size(&self) -> PixelSize {
        PixelSize::new(self.width, self.height)
    }
}

impl From<image::RgbaImage> for Frame {
    fn from(rgba: image::RgbaImage) -> Self {
        let width = rgba.width();
        let height = rgba.height();
        let pixels = rgba.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// Opens documents
pub trait DocumentSource {
    type Document: Document;

    fn open(&mut self, path: &Path) -> Result<Self::Document, OpenError>;
}

/// A loaded document that can rasterize its pages
pub trait Document {
    fn page_count(&self) -> usize;

    /// Render page `index` at `scale`, where 1.0 is the page's natural size.
    fn render_page(&self, index: usize, scale: f32) -> Result<Frame, RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PixelSize::new(800, 600), PixelSize::new(600, 400), Offset { x: 100, y: 100 })]
    #[case(PixelSize::new(800, 600), PixelSize::new(801, 600), Offset { x: 0, y: 0 })]
    #[case(PixelSize::new(800, 600), PixelSize::new(803, 599), Offset { x: -1, y: 0 })]
    #[case(PixelSize::new(400, 300), PixelSize::new(1000, 900), Offset { x: -300, y: -300 })]
    #[case(PixelSize::new(0, 0), PixelSize::new(5, 7), Offset { x: -2, y: -3 })]
    fn offset_centers_and_truncates(
        #[case] surface: PixelSize,
        #[case] frame: PixelSize,
        #[case] expected: Offset,
    ) {
        assert_eq!(centered_offset(surface, frame), expected);
    }

    #[test]
    fn frame_from_rgba_image() {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 4]));
        let frame = Frame::from(img);
        assert_eq!(frame.size(), PixelSize::new(3, 2));
        assert_eq!(frame.pixels.len(), 3 * 2 * 4);
        assert_eq!(&frame.pixels[..4], &[1, 2, 3, 4]);
    }
}
