// SPDX-License-Identifier: MPL-2.0
//! Retained frame buffer.
//!
//! The viewport shows this buffer and screenshots encode it, so a screenshot
//! always matches the last drawn frame.

use crate::error::{Error, Result};
use iced::widget::image;
use tiny_skia::{Color, Pixmap};

#[derive(Debug, Clone)]
pub struct Frame {
    pixmap: Pixmap,
}

impl Frame {
    /// Allocates a transparent frame. Returns `None` for a zero dimension.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color);
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// RGBA bytes of the pixel at `(x, y)`, or `None` outside the frame.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // The pixmap only bounds-checks the linear index.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Image handle for the viewport widget.
    #[must_use]
    pub fn to_handle(&self) -> image::Handle {
        image::Handle::from_rgba(self.width(), self.height(), self.pixmap.data().to_vec())
    }

    /// Encodes the current contents as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Export`] if encoding fails.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| Error::Export(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_frame_is_rejected() {
        assert!(Frame::new(0, 10).is_none());
        assert!(Frame::new(10, 0).is_none());
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut frame = Frame::new(4, 3).expect("valid size");
        frame.clear(Color::from_rgba8(10, 20, 30, 255));
        assert_eq!(frame.pixel(0, 0), Some([10, 20, 30, 255]));
        assert_eq!(frame.pixel(3, 2), Some([10, 20, 30, 255]));
        assert_eq!(frame.pixel(4, 0), None);
    }

    #[test]
    fn encode_png_produces_png_signature() {
        let mut frame = Frame::new(8, 8).expect("valid size");
        frame.clear(Color::WHITE);
        let png = frame.encode_png().expect("encodes");
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn pixel_past_row_end_does_not_wrap() {
        let mut frame = Frame::new(4, 3).expect("valid size");
        frame.clear(Color::BLACK);
        assert_eq!(frame.pixel(4, 0), None);
        assert_eq!(frame.pixel(0, 3), None);
        assert_eq!(frame.pixel(u32::MAX, 1), None);
    }
}
