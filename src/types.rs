use serde::{Deserialize, Serialize};

/// Integer pixel coordinate, `x` is the column and `y` the row.
pub type Point2i = nalgebra::Point2<i32>;

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color8u(pub [u8; 3]);

impl Color8u {
    pub const BLACK: Color8u = Color8u([0, 0, 0]);
    pub const WHITE: Color8u = Color8u([255, 255, 255]);
    pub const RED: Color8u = Color8u([255, 0, 0]);
    pub const GREEN: Color8u = Color8u([0, 255, 0]);
    pub const BLUE: Color8u = Color8u([0, 0, 255]);

    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Replicate a gray value into all three channels.
    #[inline]
    pub fn gray(v: u8) -> Self {
        Self([v, v, v])
    }

    #[inline]
    pub fn channels(&self) -> usize {
        3
    }

    #[inline]
    pub fn as_array(&self) -> [u8; 3] {
        self.0
    }

    #[inline]
    pub fn samples(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Rec. 601 luma in [0, 255].
    pub fn luma(&self) -> f32 {
        0.299 * self.0[0] as f32 + 0.587 * self.0[1] as f32 + 0.114 * self.0[2] as f32
    }
}

impl std::ops::Index<usize> for Color8u {
    type Output = u8;

    #[inline]
    fn index(&self, c: usize) -> &u8 {
        &self.0[c]
    }
}
