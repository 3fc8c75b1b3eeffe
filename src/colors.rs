//! Color sampling along image sides and the "mostly white" check.
use crate::error::RasterError;
use crate::image::ImageView;
use crate::stats::percentile;
use crate::types::{Color8u, Point2i};
use serde::{Deserialize, Serialize};

/// Read the colors at `points`, in input order.
///
/// Gray images replicate their sample into all three channels.
pub fn extract_colors<I>(image: &I, points: &[Point2i]) -> Result<Vec<Color8u>, RasterError>
where
    I: ImageView<Pixel = u8>,
{
    let channels = image.channels();
    if channels != 1 && channels != 3 {
        return Err(RasterError::UnsupportedChannels { found: channels });
    }

    let mut out = Vec::with_capacity(points.len());
    for (index, p) in points.iter().enumerate() {
        if !image.contains(p.x, p.y) {
            return Err(RasterError::PointOutOfBounds {
                index,
                x: p.x,
                y: p.y,
                width: image.width(),
                height: image.height(),
            });
        }
        let (x, y) = (p.x as usize, p.y as usize);
        let row = image.row(y);
        let color = if channels == 3 {
            let i = x * 3;
            Color8u::new(row[i], row[i + 1], row[i + 2])
        } else {
            Color8u::gray(row[x])
        };
        out.push(color);
    }
    Ok(out)
}

/// Thresholds for [`is_mostly_white`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhitenessOptions {
    /// Percentile (0..=100) of all channel samples that is compared.
    pub percentile: f64,
    /// The percentile value must be strictly above this intensity.
    pub min_intensity: u8,
}

impl Default for WhitenessOptions {
    fn default() -> Self {
        Self {
            percentile: 5.0,
            min_intensity: 175,
        }
    }
}

impl WhitenessOptions {
    pub fn classify(&self, colors: &[Color8u]) -> bool {
        is_mostly_white(colors, self.percentile, self.min_intensity)
    }

    /// Percentile intensity used by [`classify`](Self::classify).
    pub fn percentile_intensity(&self, colors: &[Color8u]) -> Option<f64> {
        channel_percentile(colors, self.percentile)
    }
}

/// True when the `percentile`-th sample over every channel of every color is
/// strictly above `min_intensity`. An empty list is never white.
pub fn is_mostly_white(colors: &[Color8u], percentile: f64, min_intensity: u8) -> bool {
    channel_percentile(colors, percentile).is_some_and(|v| v > f64::from(min_intensity))
}

fn channel_percentile(colors: &[Color8u], p: f64) -> Option<f64> {
    let intensities: Vec<f32> = colors
        .iter()
        .flat_map(|c| c.samples())
        .map(f32::from)
        .collect();
    percentile(&intensities, p)
}

/// Resample `colors` to `len` entries, keeping both endpoints.
///
/// Output index `i` takes input index `round(i * (n-1) / (len-1))`.
pub fn resample_colors(colors: &[Color8u], len: usize) -> Vec<Color8u> {
    let n = colors.len();
    if n == 0 || len == 0 {
        return Vec::new();
    }
    if n == 1 || len == 1 {
        return vec![colors[0]; len];
    }
    (0..len)
        .map(|i| {
            let pos = (i * (n - 1)) as f64 / (len - 1) as f64;
            let idx = (pos.round() as usize).min(n - 1);
            colors[idx]
        })
        .collect()
}

/// Number of points [`side_points`] yields for `start..=end`.
pub fn side_len(start: Point2i, end: Point2i) -> u64 {
    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);
    dx.unsigned_abs().max(dy.unsigned_abs()) + 1
}

/// Integer points on the segment `start..=end`, one per step along the
/// dominant axis. Points are produced lazily; bound the endpoints before
/// collecting.
pub fn side_points(start: Point2i, end: Point2i) -> impl DoubleEndedIterator<Item = Point2i> {
    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);
    let steps = dx.abs().max(dy.abs());
    (0..=steps).map(move |i| {
        if i == steps {
            return end;
        }
        let t = i as f64 / steps as f64;
        // stays between start and end, so it fits i32
        Point2i::new(
            (i64::from(start.x) + (t * dx as f64).round() as i64) as i32,
            (i64::from(start.y) + (t * dy as f64).round() as i64) as i32,
        )
    })
}
