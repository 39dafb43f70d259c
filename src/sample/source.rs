//! Readable pixel buffers.
//!
//! The sampler only needs image dimensions and rectangular RGBA reads, so any
//! decoder or in-memory bitmap can feed it by implementing [`PixelSource`].

use std::ops::Deref;

use image::{DynamicImage, GenericImageView, ImageBuffer, Rgba};

/// A 2-D pixel buffer that can hand out rectangular blocks of RGBA bytes.
pub trait PixelSource {
    /// Width and height in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Append the RGBA bytes of the block at `(x, y)` sized `width x height`
    /// to `out`, top row first.
    ///
    /// Callers keep the block inside [`PixelSource::dimensions`].
    fn read_block(&self, x: u32, y: u32, width: u32, height: u32, out: &mut Vec<u8>);
}

impl<C> PixelSource for ImageBuffer<Rgba<u8>, C>
where
    C: Deref<Target = [u8]>,
{
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn read_block(&self, x: u32, y: u32, width: u32, height: u32, out: &mut Vec<u8>) {
        let raw: &[u8] = self.as_raw();
        let stride = self.width() as usize * 4;
        let span = width as usize * 4;
        out.reserve(span * height as usize);

        for row in y..y + height {
            let start = row as usize * stride + x as usize * 4;
            out.extend_from_slice(&raw[start..start + span]);
        }
    }
}

impl PixelSource for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn read_block(&self, x: u32, y: u32, width: u32, height: u32, out: &mut Vec<u8>) {
        // Fast path for the layout the sampler reads natively
        if let DynamicImage::ImageRgba8(buffer) = self {
            return buffer.read_block(x, y, width, height, out);
        }

        out.reserve(width as usize * height as usize * 4);
        for py in y..y + height {
            for px in x..x + width {
                out.extend_from_slice(&self.get_pixel(px, py).0);
            }
        }
    }
}
