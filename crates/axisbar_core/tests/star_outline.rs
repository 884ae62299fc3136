//! Integration tests for star outline generation.
//!
//! Run with: cargo test --package axisbar_core --test star_outline

use axisbar_core::{generate_star_outline, Point, RatingError, Size, StarSpec};

/// Angle of `p` around `center`, in degrees within `[0, 360)`.
fn angle_deg(center: Point, p: Point) -> f32 {
    let deg = (p.y - center.y).atan2(p.x - center.x).to_degrees();
    deg.rem_euclid(360.0)
}

/// Center the outline was rotated around, recovered from the first (top) vertex.
fn rotation_center(size: Size, outline: &axisbar_core::Outline) -> Point {
    let top = outline.points()[0];
    Point::new(top.x, top.y + size.height * 0.5)
}

#[test]
fn test_closure_across_specs() {
    for count in [2.0, 2.5, 3.0, 5.0, 6.5, 8.0, 12.25] {
        for ratio in [0.0, 0.5, 1.0, 1.7] {
            for size in [Size::square(44.0), Size::new(120.0, 30.0), Size::new(10.0, 90.0)] {
                let outline = generate_star_outline(size, &StarSpec::new(count, ratio)).unwrap();
                assert!(outline.is_closed(), "open outline for {count}/{ratio}");
                assert_eq!(outline.points().first(), outline.points().last());
            }
        }
    }
}

#[test]
fn test_determinism() {
    let size = Size::new(87.5, 61.25);
    let spec = StarSpec::new(7.3, 0.65);
    let a = generate_star_outline(size, &spec).unwrap();
    let b = generate_star_outline(size, &spec).unwrap();
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn test_five_points_unit_ratio_is_equiangular_decagon() {
    let size = Size::square(200.0);
    let outline = generate_star_outline(size, &StarSpec::new(5.0, 1.0)).unwrap();
    let vertices = outline.vertices();
    assert_eq!(vertices.len(), 10);

    let center = rotation_center(size, &outline);
    for (i, pair) in vertices.windows(2).enumerate() {
        let step = (angle_deg(center, pair[1]) - angle_deg(center, pair[0])).rem_euclid(360.0);
        assert!((step - 36.0).abs() < 1e-2, "step {i} is {step} degrees");
    }

    // Inner radius is half the outer one at inner_ratio = 1.
    for (i, v) in vertices.iter().enumerate() {
        let expected = if i % 2 == 0 { 100.0 } else { 50.0 };
        assert!((center.distance(*v) - expected).abs() < 1e-2, "vertex {i}");
    }
}

#[test]
fn test_inner_ratio_two_gives_regular_decagon() {
    let size = Size::square(200.0);
    let outline = generate_star_outline(size, &StarSpec::new(5.0, 2.0)).unwrap();
    let center = rotation_center(size, &outline);

    for v in outline.vertices() {
        assert!((center.distance(*v) - 100.0).abs() < 1e-2);
    }
}

#[test]
fn test_fractional_six_and_a_half() {
    let outline = generate_star_outline(Size::square(100.0), &StarSpec::new(6.5, 1.0)).unwrap();
    // floor(13) vertices plus one correction vertex
    assert_eq!(outline.vertices().len(), 14);
    assert_eq!(outline.len(), 16);
    assert!(outline.is_closed());
}

#[test]
fn test_low_point_counts_do_not_fail() {
    for count in [0.5, 1.0, 2.0] {
        let outline =
            generate_star_outline(Size::square(50.0), &StarSpec::new(count, 1.0)).unwrap();
        assert!(outline.is_closed());
        assert!(!outline.vertices().is_empty());
    }
}

#[test]
fn test_inverted_inner_ratio_is_valid() {
    let outline = generate_star_outline(Size::square(100.0), &StarSpec::new(5.0, 3.0)).unwrap();
    assert_eq!(outline.vertices().len(), 10);
}

#[test]
fn test_anisotropic_frame() {
    let size = Size::new(200.0, 50.0);
    let outline = generate_star_outline(size, &StarSpec::new(4.0, 1.0)).unwrap();
    let (min, max) = outline.bounds().unwrap();

    assert!(min.x >= -1e-3);
    assert!(max.x <= 200.0 + 1e-3);
    assert!((max.x - min.x - 200.0).abs() < 1e-2);
    assert!(max.y - min.y <= 50.0 + 1e-3);
}

#[test]
fn test_non_positive_point_count_is_error() {
    for count in [0.0, -1.0, -6.5] {
        assert_eq!(
            generate_star_outline(Size::square(10.0), &StarSpec::new(count, 1.0)),
            Err(RatingError::InvalidPointCount(count))
        );
    }
}
