//! The shading engine: normalize, index, interpolate.
//!
//! A single pure function over its inputs; re-running it with a different
//! ramp rewrites the same pixel buffer and touches nothing else.

use crate::shade_pipeline::bitmap::encoder::Bitmap;
use crate::shade_pipeline::colormap::ControlPoint;
use crate::shade_pipeline::raster::SampleBuffer;

/// Fill the bitmap's pixel region from the sample buffer.
///
/// Every finite sample is normalized into [0, 1] against `min..max`,
/// mapped onto the ramp's control points and channel-wise linearly
/// interpolated; channels convert to bytes by truncating `255 * c`. NaN
/// samples render as fully transparent black so masked regions stay
/// distinguishable from valid extremes.
///
/// A degenerate range (`max <= min`, or non-finite bounds as with an
/// all-NaN raster) maps every finite sample to the ramp midpoint instead
/// of dividing by zero.
pub fn shade(
    bitmap: &mut Bitmap,
    scheme: &[ControlPoint],
    samples: &SampleBuffer,
    min: f32,
    max: f32,
) {
    debug_assert!(scheme.len() >= 2);
    debug_assert_eq!(
        samples.len(),
        bitmap.width() as usize * bitmap.height() as usize
    );

    let segments = (scheme.len() - 1) as f32;
    let range_valid = min.is_finite() && max.is_finite() && max > min;

    for (i, pixel) in bitmap.pixels_mut().chunks_exact_mut(4).enumerate() {
        let val = samples.get(i);
        if val.is_nan() {
            pixel.copy_from_slice(&[0, 0, 0, 0]);
            continue;
        }

        let t = if range_valid {
            ((val - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.5
        };

        // t = 1 lands exactly on the last control point with f = 0; the
        // upper index clamp keeps it from reading past the table.
        let pos = t * segments;
        let lower = pos.floor();
        let f = pos - lower;
        let a = lower as usize;
        let b = (a + 1).min(scheme.len() - 1);

        pixel[0] = (255.0 * (scheme[a][0] + (scheme[b][0] - scheme[a][0]) * f)) as u8;
        pixel[1] = (255.0 * (scheme[a][1] + (scheme[b][1] - scheme[a][1]) * f)) as u8;
        pixel[2] = (255.0 * (scheme[a][2] + (scheme[b][2] - scheme[a][2]) * f)) as u8;
        pixel[3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shade_pipeline::bitmap::encoder::HEADER_SIZE;
    use crate::shade_pipeline::colormap::Palette;

    const BLACK_TO_WHITE: &[ControlPoint] = &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];

    fn pixel(bitmap: &Bitmap, i: usize) -> [u8; 4] {
        let offset = HEADER_SIZE + i * 4;
        bitmap.as_bytes()[offset..offset + 4].try_into().unwrap()
    }

    #[test]
    fn three_pixel_ramp_truncates() {
        let mut bitmap = Bitmap::new(3, 1).unwrap();
        let samples = SampleBuffer::F32(vec![0.0, 5.0, 10.0]);
        shade(&mut bitmap, BLACK_TO_WHITE, &samples, 0.0, 10.0);

        // 255 * 0.5 = 127.5 truncates to 127, never rounds to 128.
        assert_eq!(pixel(&bitmap, 0), [0, 0, 0, 255]);
        assert_eq!(pixel(&bitmap, 1), [127, 127, 127, 255]);
        assert_eq!(pixel(&bitmap, 2), [255, 255, 255, 255]);
    }

    #[test]
    fn nan_renders_transparent() {
        let mut bitmap = Bitmap::new(3, 1).unwrap();
        let samples = SampleBuffer::F32(vec![1.0, f32::NAN, 3.0]);
        shade(&mut bitmap, Palette::Turbo.control_points(), &samples, 1.0, 3.0);

        assert_eq!(pixel(&bitmap, 1), [0, 0, 0, 0]);
        assert_eq!(pixel(&bitmap, 0)[3], 255);
        assert_eq!(pixel(&bitmap, 2)[3], 255);
    }

    #[test]
    fn out_of_range_samples_clamp_to_boundary_colors() {
        let mut bitmap = Bitmap::new(4, 1).unwrap();
        let samples = SampleBuffer::F32(vec![-100.0, 0.0, 10.0, 100.0]);
        shade(&mut bitmap, BLACK_TO_WHITE, &samples, 0.0, 10.0);

        assert_eq!(pixel(&bitmap, 0), [0, 0, 0, 255]);
        assert_eq!(pixel(&bitmap, 1), [0, 0, 0, 255]);
        assert_eq!(pixel(&bitmap, 2), [255, 255, 255, 255]);
        assert_eq!(pixel(&bitmap, 3), [255, 255, 255, 255]);
    }

    #[test]
    fn min_and_max_hit_first_and_last_control_points() {
        for &palette in Palette::ALL {
            let scheme = palette.control_points();
            let mut bitmap = Bitmap::new(2, 1).unwrap();
            let samples = SampleBuffer::F32(vec![-7.0, 42.0]);
            shade(&mut bitmap, scheme, &samples, -7.0, 42.0);

            let first = scheme[0];
            let last = scheme[scheme.len() - 1];
            assert_eq!(
                pixel(&bitmap, 0),
                [
                    (255.0 * first[0]) as u8,
                    (255.0 * first[1]) as u8,
                    (255.0 * first[2]) as u8,
                    255
                ]
            );
            assert_eq!(
                pixel(&bitmap, 1),
                [
                    (255.0 * last[0]) as u8,
                    (255.0 * last[1]) as u8,
                    (255.0 * last[2]) as u8,
                    255
                ]
            );
        }
    }

    #[test]
    fn monotonic_samples_yield_monotonic_bytes() {
        let width = 64;
        let mut bitmap = Bitmap::new(width, 1).unwrap();
        let samples = SampleBuffer::F32((0..width).map(|i| i as f32).collect());
        shade(&mut bitmap, BLACK_TO_WHITE, &samples, 0.0, (width - 1) as f32);

        let bytes = bitmap.as_bytes();
        let mut previous = 0u8;
        for i in 0..width as usize {
            let r = bytes[HEADER_SIZE + i * 4];
            assert!(r >= previous, "channel decreased at pixel {}", i);
            previous = r;
        }
    }

    #[test]
    fn degenerate_range_maps_to_ramp_midpoint() {
        let mut bitmap = Bitmap::new(2, 1).unwrap();
        let samples = SampleBuffer::F32(vec![42.0, 42.0]);
        shade(&mut bitmap, BLACK_TO_WHITE, &samples, 42.0, 42.0);

        assert_eq!(pixel(&bitmap, 0), [127, 127, 127, 255]);
        assert_eq!(pixel(&bitmap, 1), [127, 127, 127, 255]);
    }

    #[test]
    fn all_nan_raster_is_fully_transparent() {
        let mut bitmap = Bitmap::new(2, 2).unwrap();
        let samples = SampleBuffer::F32(vec![f32::NAN; 4]);
        // No finite sample exists, so the caller has no range to offer.
        shade(
            &mut bitmap,
            Palette::Viridis.control_points(),
            &samples,
            f32::INFINITY,
            f32::NEG_INFINITY,
        );

        for i in 0..4 {
            assert_eq!(pixel(&bitmap, i), [0, 0, 0, 0]);
        }
    }

    #[test]
    fn repeated_shading_is_deterministic() {
        let samples = SampleBuffer::U16(vec![3, 900, 40, 7, 65535, 0]);
        let scheme = Palette::Terrain.control_points();

        let mut first = Bitmap::new(3, 2).unwrap();
        shade(&mut first, scheme, &samples, 0.0, 65535.0);
        let mut second = Bitmap::new(3, 2).unwrap();
        shade(&mut second, scheme, &samples, 0.0, 65535.0);

        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn integer_samples_shade_opaque() {
        let mut bitmap = Bitmap::new(3, 1).unwrap();
        let samples = SampleBuffer::U8(vec![0, 128, 255]);
        shade(&mut bitmap, BLACK_TO_WHITE, &samples, 0.0, 255.0);

        for i in 0..3 {
            assert_eq!(pixel(&bitmap, i)[3], 255);
        }
        assert_eq!(pixel(&bitmap, 1)[0], 128);
    }
}
