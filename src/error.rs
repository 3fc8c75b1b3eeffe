//! Contract violations reported by the raster helpers.

/// Precondition that a sampling, compositing or rendering call did not meet.
///
/// Every operation validates its inputs before touching a buffer, so a call
/// that returns one of these leaves the destination unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterError {
    /// Buffers hold 1 or 3 samples per pixel.
    UnsupportedChannels { found: usize },
    /// Raw storage does not match `width * height * channels`.
    DataLength { expected: usize, found: usize },
    /// Two buffers (or a buffer and an operation) disagree on channel count.
    ChannelMismatch { expected: usize, found: usize },
    /// The `index`-th input point lies outside the image.
    PointOutOfBounds {
        index: usize,
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    /// A single sample access outside the buffer.
    SampleOutOfBounds { x: usize, y: usize, channel: usize },
    /// A `width × height` region at `(x, y)` does not fit into the target.
    RegionOutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
        target_width: usize,
        target_height: usize,
    },
    /// Image dimensions whose sample count or coordinates do not fit the
    /// index types.
    ImageTooLarge { width: usize, height: usize },
    /// A mapped graph row fell outside `[0, height)`.
    RowOutOfRange { row: i64, height: usize },
}

impl std::fmt::Display for RasterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterError::UnsupportedChannels { found } => {
                write!(f, "unsupported channel count {found} (expected 1 or 3)")
            }
            RasterError::DataLength { expected, found } => {
                write!(f, "buffer holds {found} samples, expected {expected}")
            }
            RasterError::ChannelMismatch { expected, found } => {
                write!(f, "channel mismatch ({found} != {expected})")
            }
            RasterError::PointOutOfBounds {
                index,
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "point #{index} ({x}, {y}) outside {width}x{height} image"
            ),
            RasterError::SampleOutOfBounds { x, y, channel } => {
                write!(f, "sample ({x}, {y}, c={channel}) out of bounds")
            }
            RasterError::RegionOutOfBounds {
                x,
                y,
                width,
                height,
                target_width,
                target_height,
            } => write!(
                f,
                "region {width}x{height} at ({x}, {y}) exceeds {target_width}x{target_height} target"
            ),
            RasterError::ImageTooLarge { width, height } => {
                write!(f, "image {width}x{height} is too large")
            }
            RasterError::RowOutOfRange { row, height } => {
                write!(f, "graph row {row} outside [0, {height})")
            }
        }
    }
}

impl std::error::Error for RasterError {}
