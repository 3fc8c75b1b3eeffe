mod common;

use common::fixtures::scratch_dir;
use common::synthetic_image::{checkerboard_u8, coordinate_rgb, framed_rgb};
use sides_diagnostics::colors::{extract_colors, is_mostly_white, side_points, WhitenessOptions};
use sides_diagnostics::diagnostics::{profile_side, render_side_profile, RenderOptions};
use sides_diagnostics::draw::{draw_image, value_row};
use sides_diagnostics::image::io::{load_image, save_image, LoadMode};
use sides_diagnostics::image::{Channels, Image8u, ImageView};
use sides_diagnostics::naming::numbered_file_name;
use sides_diagnostics::types::{Color8u, Point2i};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn extracted_colors_match_raw_samples() {
    let img = coordinate_rgb(40, 30);
    let points: Vec<Point2i> = (0..30).map(|i| Point2i::new(i + 5, 29 - i)).collect();
    let colors = extract_colors(&img, &points).unwrap();
    for (p, c) in points.iter().zip(&colors) {
        let (x, y) = (p.x as usize, p.y as usize);
        assert_eq!(
            c.as_array(),
            [
                img.get(x, y, 0).unwrap(),
                img.get(x, y, 1).unwrap(),
                img.get(x, y, 2).unwrap()
            ],
            "point {p:?}"
        );
    }
}

#[test]
fn gray_view_and_owned_gray_agree() {
    let img = checkerboard_u8(32, 16, 4);
    let view = img.as_gray_view().unwrap();
    let points: Vec<Point2i> = side_points(Point2i::new(0, 3), Point2i::new(31, 12)).collect();
    let owned = extract_colors(&img, &points).unwrap();
    let borrowed = extract_colors(&view, &points).unwrap();
    assert_eq!(owned, borrowed);
    assert!(owned
        .iter()
        .all(|c| c[0] == c[1] && c[1] == c[2] && (c[0] == 32 || c[0] == 220)));
}

#[test]
fn whiteness_is_monotonic_in_threshold() {
    let img = coordinate_rgb(64, 64);
    let points: Vec<Point2i> = side_points(Point2i::new(0, 63), Point2i::new(63, 40)).collect();
    let colors = extract_colors(&img, &points).unwrap();
    for percentile in [0.0, 5.0, 50.0, 95.0, 100.0] {
        let mut seen_false = false;
        for threshold in 0..=255u8 {
            let white = is_mostly_white(&colors, percentile, threshold);
            if seen_false {
                assert!(!white, "p={percentile} flipped back at {threshold}");
            }
            seen_false |= !white;
        }
    }
}

#[test]
fn composite_then_read_back() {
    let mut dst = framed_rgb(50, 40, 3, Color8u::gray(240));
    let before = dst.clone();
    let part = coordinate_rgb(12, 9);
    let offset = Point2i::new(30, 20);
    draw_image(&mut dst, &part, offset).unwrap();

    for y in 0..dst.height() {
        for x in 0..dst.width() {
            let inside = (30..42).contains(&x) && (20..29).contains(&y);
            let expected = if inside {
                part.pixel(x - 30, y - 20)
            } else {
                before.pixel(x, y)
            };
            assert_eq!(dst.pixel(x, y), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn framed_image_sides_are_white_and_interior_is_not() {
    init_logging();
    let img = framed_rgb(80, 60, 2, Color8u::gray(235));
    let opts = WhitenessOptions::default();
    let sides = [
        ("top", Point2i::new(0, 0), Point2i::new(79, 0)),
        ("right", Point2i::new(79, 0), Point2i::new(79, 59)),
        ("bottom", Point2i::new(79, 59), Point2i::new(0, 59)),
        ("left", Point2i::new(0, 59), Point2i::new(0, 0)),
    ];
    for (name, start, end) in sides {
        let (profile, _) = profile_side(&img, name, start, end, &opts).unwrap();
        assert!(profile.mostly_white, "{name} should be white: {profile:?}");
    }
    let (inner, _) =
        profile_side(&img, "inner", Point2i::new(10, 30), Point2i::new(70, 30), &opts).unwrap();
    assert!(!inner.mostly_white);
}

#[test]
fn out_of_image_side_is_rejected() {
    let img = framed_rgb(20, 20, 1, Color8u::WHITE);
    let result = profile_side(
        &img,
        "bad",
        Point2i::new(0, 0),
        Point2i::new(20, 0),
        &WhitenessOptions::default(),
    );
    assert!(result.is_err());
}

#[test]
fn rendered_panel_round_trips_through_png() {
    init_logging();
    let img = framed_rgb(64, 48, 2, Color8u::gray(250));
    let (_, colors) = profile_side(
        &img,
        "top",
        Point2i::new(0, 0),
        Point2i::new(63, 0),
        &WhitenessOptions::default(),
    )
    .unwrap();
    let render = RenderOptions {
        strip_width: 100,
        strip_height: 6,
        graph_height: 20,
    };
    let panel = render_side_profile(&colors, &render).unwrap();

    let dir = scratch_dir("side_profile_png");
    let path = dir.join(numbered_file_name("side", 0, 3, "png"));
    save_image(&panel, &path).unwrap();
    assert!(path.ends_with("side_000.png"));

    let loaded = load_image(&path, LoadMode::Rgb).unwrap();
    assert_eq!(loaded, panel);

    let gray = load_image(&path, LoadMode::Gray).unwrap();
    assert_eq!(gray.channel_layout(), Channels::Gray);
    assert_eq!((gray.width(), gray.height()), (100, render.panel_height().unwrap()));
}

#[test]
fn scalar_rows_are_pure_and_hit_boundaries() {
    for height in [1usize, 2, 7, 64] {
        assert_eq!(value_row(0.0, 3.5, height), Ok(height - 1));
        assert_eq!(value_row(3.5, 3.5, height), Ok(0));
        assert_eq!(value_row(1.2, 3.5, height), value_row(1.2, 3.5, height));
    }
}

#[test]
fn gray_image_can_be_saved() {
    let img = checkerboard_u8(16, 8, 2);
    let dir = scratch_dir("gray_png");
    let path = dir.join("nested").join("checker.png");
    save_image(&img, &path).unwrap();
    let loaded = load_image(&path, LoadMode::Gray).unwrap();
    assert_eq!(loaded, img);
    assert_eq!(Image8u::new(0, 0, Channels::Gray).width(), 0);
}
