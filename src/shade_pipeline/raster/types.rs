/// Decoded scalar samples in row-major order, one value per grid cell.
///
/// The buffer is created once by the decode step and never mutated by
/// shading. Only the float variant can carry the NaN no-data sentinel;
/// integer rasters always contain valid samples.
#[derive(Debug, Clone)]
pub enum SampleBuffer {
    U8(Vec<u8>),
    U16(Vec<u16>),
    F32(Vec<f32>),
}

impl SampleBuffer {
    pub fn len(&self) -> usize {
        match self {
            SampleBuffer::U8(v) => v.len(),
            SampleBuffer::U16(v) => v.len(),
            SampleBuffer::F32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample at row-major index `i` widened to f32. NaN marks no-data.
    #[inline]
    pub fn get(&self, i: usize) -> f32 {
        match self {
            SampleBuffer::U8(v) => v[i] as f32,
            SampleBuffer::U16(v) => v[i] as f32,
            SampleBuffer::F32(v) => v[i],
        }
    }
}

#[derive(Debug, Clone)]
pub struct RasterData {
    pub width: u32,
    pub height: u32,
    pub samples: SampleBuffer,
}

/// Finite extrema of a sample buffer, computed once per opened raster.
///
/// Recomputed only when a new raster is loaded, never on a palette switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    /// Scan the buffer for its finite extrema, skipping NaN samples.
    ///
    /// Returns `None` when no finite sample exists (an all-NaN raster);
    /// callers must not normalize against an undefined range.
    pub fn scan(samples: &SampleBuffer) -> Option<ValueRange> {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;

        for i in 0..samples.len() {
            let val = samples.get(i);
            if !val.is_finite() {
                continue;
            }
            min = min.min(val);
            max = max.max(val);
        }

        if min.is_finite() && max.is_finite() {
            Some(ValueRange { min, max })
        } else {
            None
        }
    }
}
