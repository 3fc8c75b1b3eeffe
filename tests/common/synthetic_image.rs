use sides_diagnostics::image::{Channels, Image8u};
use sides_diagnostics::types::Color8u;

/// Generates a simple high-contrast gray checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Image8u {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut data = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            data[y * width + x] = if sum & 1 == 0 { 32 } else { 220 };
        }
    }
    Image8u::from_raw(width, height, Channels::Gray, data).expect("checkerboard size")
}

/// Dark RGB photo-like interior with a `border`-pixel frame of `paper`.
pub fn framed_rgb(width: usize, height: usize, border: usize, paper: Color8u) -> Image8u {
    let mut img = Image8u::new(width, height, Channels::Rgb);
    for y in 0..height {
        for x in 0..width {
            let on_frame =
                x < border || y < border || x + border >= width || y + border >= height;
            let color = if on_frame {
                paper
            } else {
                Color8u::new((x % 64) as u8, (y % 64) as u8, 40)
            };
            img.set_rgb(x, y, color).expect("pixel inside image");
        }
    }
    img
}

/// RGB image whose pixel (x, y) is `(x, y, x ^ y)` truncated to 8 bits.
pub fn coordinate_rgb(width: usize, height: usize) -> Image8u {
    let mut img = Image8u::new(width, height, Channels::Rgb);
    for y in 0..height {
        for x in 0..width {
            let c = Color8u::new(x as u8, y as u8, (x ^ y) as u8);
            img.set_rgb(x, y, c).expect("pixel inside image");
        }
    }
    img
}
