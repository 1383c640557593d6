//! Uncompressed 32-bit BMP encoding.
//!
//! Owns the output buffer layout: a fixed 70-byte header (BITMAPINFOHEADER
//! plus explicit channel bitmasks) followed by packed RGBA pixel data. The
//! header depends only on the dimensions and is written once at
//! construction; shading passes rewrite the pixel region in place.

use tracing::debug;

use crate::shade_pipeline::common::error::{Result, ShadeError};

/// Byte length of the bitmap header preceding the pixel array.
pub const HEADER_SIZE: usize = 70;

/// BI_ALPHABITFIELDS: pixel channels are located by the four header masks.
const COMPRESSION_BITFIELDS: u32 = 6;

/// Nominal print resolution in pixels per metre. Never consumed by an
/// on-screen viewer but the field must hold something sane.
const RESOLUTION_PPM: i32 = 10_000;

#[derive(Debug)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Allocate a zeroed pixel buffer and write the fixed header.
    ///
    /// Fails fast on zero dimensions rather than producing a header-only
    /// buffer an image viewer would choke on.
    pub fn new(width: u32, height: u32) -> Result<Bitmap> {
        if width == 0 || height == 0 {
            return Err(ShadeError::InvalidDimensions(width, height));
        }

        let pixels = width as usize * height as usize;
        let image_size = 4 * pixels;

        debug!("Allocating {}x{} bitmap, {} bytes", width, height, HEADER_SIZE + image_size);

        let mut bitmap = Bitmap {
            width,
            height,
            data: vec![0u8; HEADER_SIZE + image_size],
        };
        bitmap.write_header(image_size);
        Ok(bitmap)
    }

    /// Every multi-byte field is little-endian except the two-byte magic,
    /// which the format stores big-endian ("BM").
    fn write_header(&mut self, image_size: usize) {
        let data = &mut self.data;
        data[0..2].copy_from_slice(&0x424Du16.to_be_bytes());
        put_u32(data, 2, (HEADER_SIZE + image_size) as u32); // File size.
        put_u32(data, 10, HEADER_SIZE as u32); // Offset to image data.
        put_u32(data, 14, 40); // Size of BITMAPINFOHEADER.
        put_i32(data, 18, self.width as i32);
        put_i32(data, 22, self.height as i32); // Signed; negative would flip vertically.
        put_u16(data, 26, 1); // Colour planes, must be 1.
        put_u16(data, 28, 32); // Bits per pixel.
        put_u32(data, 30, COMPRESSION_BITFIELDS);
        put_u32(data, 34, image_size as u32);
        put_i32(data, 38, RESOLUTION_PPM);
        put_i32(data, 42, RESOLUTION_PPM);
        put_u32(data, 46, 0); // Palette size, 0 = all.
        put_u32(data, 50, 0); // Important colours, 0 = all.
        put_u32(data, 54, 0x0000_00FF); // Red mask.
        put_u32(data, 58, 0x0000_FF00); // Green mask.
        put_u32(data, 62, 0x00FF_0000); // Blue mask.
        put_u32(data, 66, 0xFF00_0000); // Alpha mask.
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The whole encoded buffer, header included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view over just the pixel region, 4 bytes per pixel in
    /// row-major order. The header stays out of reach.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.data[HEADER_SIZE..]
    }
}

fn put_u16(data: &mut [u8], offset: usize, value: u16) {
    data[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

fn put_u32(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn put_i32(data: &mut [u8], offset: usize, value: i32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_u32(data: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(data[offset..offset + 4].try_into().unwrap())
    }

    fn read_u16(data: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes(data[offset..offset + 2].try_into().unwrap())
    }

    #[test]
    fn buffer_length_matches_dimensions() {
        let bitmap = Bitmap::new(17, 9).unwrap();
        assert_eq!(bitmap.as_bytes().len(), HEADER_SIZE + 4 * 17 * 9);
    }

    #[test]
    fn header_fields() {
        let bitmap = Bitmap::new(640, 480).unwrap();
        let bytes = bitmap.as_bytes();

        // Magic is big-endian "BM".
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(read_u32(bytes, 2), (HEADER_SIZE + 4 * 640 * 480) as u32);
        assert_eq!(read_u32(bytes, 10), HEADER_SIZE as u32);
        assert_eq!(read_u32(bytes, 14), 40);
        assert_eq!(read_u32(bytes, 18), 640);
        assert_eq!(read_u32(bytes, 22), 480);
        assert_eq!(read_u16(bytes, 26), 1);
        assert_eq!(read_u16(bytes, 28), 32);
        assert_eq!(read_u32(bytes, 30), 6);
        assert_eq!(read_u32(bytes, 34), 4 * 640 * 480);
        assert_eq!(read_u32(bytes, 54), 0x0000_00FF);
        assert_eq!(read_u32(bytes, 58), 0x0000_FF00);
        assert_eq!(read_u32(bytes, 62), 0x00FF_0000);
        assert_eq!(read_u32(bytes, 66), 0xFF00_0000);
    }

    #[test]
    fn pixel_region_starts_zeroed() {
        let mut bitmap = Bitmap::new(2, 2).unwrap();
        assert!(bitmap.pixels_mut().iter().all(|&b| b == 0));
        assert_eq!(bitmap.pixels_mut().len(), 16);
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(
            Bitmap::new(0, 10),
            Err(ShadeError::InvalidDimensions(0, 10))
        ));
        assert!(matches!(
            Bitmap::new(10, 0),
            Err(ShadeError::InvalidDimensions(10, 0))
        ));
    }
}
