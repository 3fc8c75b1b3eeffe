//! Compositing and diagnostic overlays on 8-bit buffers.
//!
//! All renderers write into a 3-channel destination. The target rectangle
//! (`offset` plus the extent implied by the input) must fit into the
//! destination; inputs are validated before the first write, so a call that
//! fails leaves the destination untouched.
//!
//! Graphs share one vertical mapping: a normalized value `t` in [0, 1] lands
//! on row `(height-1) - round(t * (height-1))`, so 1 is the top row and 0 the
//! bottom row of the graph area.
use crate::error::RasterError;
use crate::image::{Image8u, ImageView, ImageViewMut};
use crate::types::{Color8u, Point2i};
use log::debug;

/// Copy `part` into `dst` with its top-left corner at `offset`.
pub fn draw_image(dst: &mut Image8u, part: &Image8u, offset: Point2i) -> Result<(), RasterError> {
    check_region(dst, offset, part.width(), part.height())?;
    if dst.channel_count() != part.channel_count() {
        return Err(RasterError::ChannelMismatch {
            expected: dst.channel_count(),
            found: part.channel_count(),
        });
    }
    let channels = part.channel_count();
    let start = offset.x as usize * channels;
    let len = part.width() * channels;
    for (j, src) in part.rows().enumerate() {
        let row = dst.row_mut(offset.y as usize + j);
        row[start..start + len].copy_from_slice(src);
    }
    Ok(())
}

/// Fill a `height`-tall vertical strip per color, one column per element.
pub fn draw_rgb_line(
    dst: &mut Image8u,
    colors: &[Color8u],
    offset: Point2i,
    height: usize,
) -> Result<(), RasterError> {
    dst.require_rgb()?;
    check_region(dst, offset, colors.len(), height)?;
    let (ox, oy) = (offset.x as usize, offset.y as usize);
    for (x, color) in colors.iter().enumerate() {
        for y in 0..height {
            dst.set_rgb(ox + x, oy + y, *color)?;
        }
    }
    Ok(())
}

/// Plot each channel of each color as one dot: red channel in red, green in
/// green, blue in blue. Later channels overwrite earlier ones on overlap.
pub fn draw_channel_graph(
    dst: &mut Image8u,
    colors: &[Color8u],
    offset: Point2i,
    height: usize,
) -> Result<(), RasterError> {
    dst.require_rgb()?;
    check_region(dst, offset, colors.len(), height)?;

    let rows = colors
        .iter()
        .map(|c| -> Result<[usize; 3], RasterError> {
            Ok([
                channel_row(c[0], height)?,
                channel_row(c[1], height)?,
                channel_row(c[2], height)?,
            ])
        })
        .collect::<Result<Vec<_>, RasterError>>()?;

    let (ox, oy) = (offset.x as usize, offset.y as usize);
    let inks = [Color8u::RED, Color8u::GREEN, Color8u::BLUE];
    for (x, ys) in rows.iter().enumerate() {
        for (y, ink) in ys.iter().zip(inks) {
            dst.set_rgb(ox + x, oy + y, ink)?;
        }
    }
    Ok(())
}

/// Plot `values` as white dots against `max_value`.
///
/// `None`, a non-positive or a non-finite maximum selects the largest value
/// of the sequence instead, or 1.0 when that is not positive. Values are
/// clamped to [0, max] before mapping.
pub fn draw_scalar_graph(
    dst: &mut Image8u,
    values: &[f32],
    offset: Point2i,
    height: usize,
    max_value: Option<f32>,
) -> Result<(), RasterError> {
    dst.require_rgb()?;
    check_region(dst, offset, values.len(), height)?;

    let max = resolve_max(values, max_value);
    let rows = values
        .iter()
        .map(|&v| value_row(v, max, height))
        .collect::<Result<Vec<_>, RasterError>>()?;

    let (ox, oy) = (offset.x as usize, offset.y as usize);
    for (x, y) in rows.into_iter().enumerate() {
        dst.set_rgb(ox + x, oy + y, Color8u::WHITE)?;
    }
    Ok(())
}

/// Row of a normalized value `t` inside a graph of `height` rows.
///
/// `t` is clamped to [0, 1]; NaN maps like 0.
pub fn graph_row(t: f64, height: usize) -> Result<usize, RasterError> {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let Ok(rows) = i64::try_from(height) else {
        return Err(RasterError::RowOutOfRange {
            row: i64::MAX,
            height,
        });
    };
    let last = rows - 1;
    let row = last - (t * last as f64).round() as i64;
    if row < 0 || row >= rows {
        return Err(RasterError::RowOutOfRange { row, height });
    }
    Ok(row as usize)
}

/// Row of an 8-bit channel value (255 on top, 0 at the bottom).
#[inline]
pub fn channel_row(v: u8, height: usize) -> Result<usize, RasterError> {
    graph_row(f64::from(v) / 255.0, height)
}

/// Row of `v` in a graph spanning [0, max].
#[inline]
pub fn value_row(v: f32, max: f32, height: usize) -> Result<usize, RasterError> {
    graph_row(f64::from(v / max), height)
}

fn resolve_max(values: &[f32], max_value: Option<f32>) -> f32 {
    match max_value {
        Some(m) if m > 0.0 && m.is_finite() => m,
        _ => {
            let auto = values
                .iter()
                .copied()
                .filter(|v| v.is_finite())
                .fold(0.0f32, f32::max);
            let max = if auto <= 0.0 { 1.0 } else { auto };
            debug!("scalar graph: auto max {max} over {} values", values.len());
            max
        }
    }
}

fn check_region(
    dst: &Image8u,
    offset: Point2i,
    width: usize,
    height: usize,
) -> Result<(), RasterError> {
    let fits = offset.x >= 0
        && offset.y >= 0
        && (offset.x as usize)
            .checked_add(width)
            .is_some_and(|right| right <= dst.width())
        && (offset.y as usize)
            .checked_add(height)
            .is_some_and(|bottom| bottom <= dst.height());
    if !fits {
        debug!(
            "rejecting {width}x{height} region at ({}, {}) on {}x{} image",
            offset.x,
            offset.y,
            dst.width(),
            dst.height()
        );
        return Err(RasterError::RegionOutOfBounds {
            x: offset.x,
            y: offset.y,
            width,
            height,
            target_width: dst.width(),
            target_height: dst.height(),
        });
    }
    Ok(())
}
