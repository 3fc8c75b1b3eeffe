//! Side profiles: sampled colors along an image side, their whiteness verdict
//! and a rendered overlay for visual inspection.
//!
//! An overlay panel stacks three bands of width `strip_width`:
//! the resampled colors as a solid strip, the per-channel graph and the luma
//! graph, separated by one gray row each.
use crate::colors::{extract_colors, resample_colors, side_len, side_points, WhitenessOptions};
use crate::draw::{draw_channel_graph, draw_image, draw_rgb_line, draw_scalar_graph};
use crate::error::RasterError;
use crate::image::{Channels, Image8u, ImageView};
use crate::types::{Color8u, Point2i};
use serde::{Deserialize, Serialize};

const SEPARATOR: Color8u = Color8u([96, 96, 96]);

/// Largest accepted strip width and band height.
pub const MAX_RENDER_EXTENT: usize = 16_384;

/// Geometry of a rendered side profile panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub strip_width: usize,
    pub strip_height: usize,
    pub graph_height: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            strip_width: 256,
            strip_height: 16,
            graph_height: 64,
        }
    }
}

impl RenderOptions {
    /// Total panel height including the two separator rows, `None` on
    /// overflow.
    pub fn panel_height(&self) -> Option<usize> {
        self.graph_height
            .checked_mul(2)?
            .checked_add(self.strip_height)?
            .checked_add(2)
    }

    /// Every extent must lie in `[0, MAX_RENDER_EXTENT]`.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("strip_width", self.strip_width),
            ("strip_height", self.strip_height),
            ("graph_height", self.graph_height),
        ] {
            if value > MAX_RENDER_EXTENT {
                return Err(format!(
                    "render.{name} = {value} exceeds {MAX_RENDER_EXTENT}"
                ));
            }
        }
        Ok(())
    }
}

/// Summary of one sampled side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideProfile {
    pub name: String,
    pub start: [i32; 2],
    pub end: [i32; 2],
    pub sample_count: usize,
    pub percentile_intensity: Option<f64>,
    pub mostly_white: bool,
    pub mean_color: Color8u,
}

/// Sample `image` along `start..=end` and classify the run.
///
/// Both endpoints must lie inside the image; every rounded point between
/// them then does too.
pub fn profile_side<I>(
    image: &I,
    name: &str,
    start: Point2i,
    end: Point2i,
    whiteness: &WhitenessOptions,
) -> Result<(SideProfile, Vec<Color8u>), RasterError>
where
    I: ImageView<Pixel = u8>,
{
    let last = side_len(start, end) - 1;
    for (index, p) in [(0, start), (last as usize, end)] {
        if !image.contains(p.x, p.y) {
            return Err(RasterError::PointOutOfBounds {
                index,
                x: p.x,
                y: p.y,
                width: image.width(),
                height: image.height(),
            });
        }
    }
    let points: Vec<Point2i> = side_points(start, end).collect();
    let colors = extract_colors(image, &points)?;
    let profile = SideProfile {
        name: name.to_string(),
        start: [start.x, start.y],
        end: [end.x, end.y],
        sample_count: colors.len(),
        percentile_intensity: whiteness.percentile_intensity(&colors),
        mostly_white: whiteness.classify(&colors),
        mean_color: mean_color(&colors),
    };
    Ok((profile, colors))
}

/// Per-channel rounded mean; black for an empty list.
pub fn mean_color(colors: &[Color8u]) -> Color8u {
    if colors.is_empty() {
        return Color8u::BLACK;
    }
    let mut sums = [0u64; 3];
    for c in colors {
        for (s, v) in sums.iter_mut().zip(c.samples()) {
            *s += u64::from(v);
        }
    }
    let n = colors.len() as f64;
    let avg = |s: u64| (s as f64 / n).round().clamp(0.0, 255.0) as u8;
    Color8u::new(avg(sums[0]), avg(sums[1]), avg(sums[2]))
}

/// Render the strip, channel graph and luma graph for `colors`.
pub fn render_side_profile(
    colors: &[Color8u],
    render: &RenderOptions,
) -> Result<Image8u, RasterError> {
    let width = render.strip_width;
    let too_large = RasterError::ImageTooLarge {
        width,
        height: usize::MAX,
    };
    let height = render.panel_height().ok_or(too_large)?;
    let mut panel = Image8u::try_new(width, height, Channels::Rgb)?;
    let resampled = resample_colors(colors, width);
    let luma: Vec<f32> = resampled.iter().map(Color8u::luma).collect();
    let separator = vec![SEPARATOR; width];

    // try_new bounds the panel height by i32::MAX, so band offsets fit.
    let strip_height = render.strip_height as i32;
    let graph_height = render.graph_height as i32;
    let mut y = 0i32;
    draw_rgb_line(&mut panel, &resampled, Point2i::new(0, y), render.strip_height)?;
    y += strip_height;
    draw_rgb_line(&mut panel, &separator, Point2i::new(0, y), 1)?;
    y += 1;
    if render.graph_height > 0 {
        draw_channel_graph(&mut panel, &resampled, Point2i::new(0, y), render.graph_height)?;
    }
    y += graph_height;
    draw_rgb_line(&mut panel, &separator, Point2i::new(0, y), 1)?;
    y += 1;
    if render.graph_height > 0 {
        draw_scalar_graph(
            &mut panel,
            &luma,
            Point2i::new(0, y),
            render.graph_height,
            Some(255.0),
        )?;
    }
    Ok(panel)
}

/// Stack RGB panels vertically with `spacing` black rows between them.
/// The sheet is as wide as the widest panel.
pub fn compose_sheet(panels: &[Image8u], spacing: usize) -> Result<Image8u, RasterError> {
    let width = panels.iter().map(Image8u::width).max().unwrap_or(0);
    let too_large = RasterError::ImageTooLarge {
        width,
        height: usize::MAX,
    };
    let gaps = spacing
        .checked_mul(panels.len().saturating_sub(1))
        .ok_or(too_large)?;
    let height = panels
        .iter()
        .try_fold(gaps, |acc, p| acc.checked_add(p.height()))
        .ok_or(too_large)?;
    let mut sheet = Image8u::try_new(width, height, Channels::Rgb)?;
    let mut y = 0i32;
    for panel in panels {
        draw_image(&mut sheet, panel, Point2i::new(0, y))?;
        let step = panel.height().saturating_add(spacing);
        y = y.saturating_add(i32::try_from(step).unwrap_or(i32::MAX));
    }
    Ok(sheet)
}
