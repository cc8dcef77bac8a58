//! Face layout derived from the side length of the square surface.
//!
//! All coordinates are fractions of the side, so the face scales with
//! whatever size the host measures.

use crate::widget::HappinessState;
use kurbo::{BezPath, Circle, Point, Rect, Size};

/// Left eye bounding box as fractions of the side (x0, y0, x1, y1).
pub const LEFT_EYE: (f64, f64, f64, f64) = (0.32, 0.23, 0.43, 0.50);
/// Right eye bounding box as fractions of the side (x0, y0, x1, y1).
pub const RIGHT_EYE: (f64, f64, f64, f64) = (0.57, 0.23, 0.68, 0.50);

/// Mouth corners; the path starts and ends at the left one.
const MOUTH_LEFT: (f64, f64) = (0.22, 0.70);
const MOUTH_RIGHT: (f64, f64) = (0.78, 0.70);
/// Control points of the upper and lower lip of a smile.
const SMILE_UPPER: (f64, f64) = (0.50, 0.80);
const SMILE_LOWER: (f64, f64) = (0.50, 0.90);

/// Smallest of the two requested dimensions, used as both width and height.
///
/// Negative and NaN inputs count as zero.
pub fn measure(requested_width: f64, requested_height: f64) -> f64 {
    let clamp = |v: f64| if v.is_nan() || v < 0.0 { 0.0 } else { v };
    clamp(requested_width).min(clamp(requested_height))
}

/// Square size for the given requested dimensions.
pub fn measure_size(requested: Size) -> Size {
    let side = measure(requested.width, requested.height);
    Size::new(side, side)
}

/// Every shape of a face at one side length.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceGeometry {
    /// Side length this geometry was computed for.
    pub size: f64,
    /// Background disc.
    pub face: Circle,
    /// Border ring (stroke centerline).
    pub border: Circle,
    pub left_eye: Rect,
    pub right_eye: Rect,
    /// Closed mouth outline.
    pub mouth: BezPath,
}

impl FaceGeometry {
    /// Compute the layout for a side length and border width.
    pub fn new(size: f64, border_width: f64, happiness: HappinessState) -> Self {
        let size = if size.is_finite() { size.max(0.0) } else { 0.0 };
        let center = Point::new(size / 2.0, size / 2.0);
        let radius = size / 2.0;
        // A border wider than the face collapses to the center.
        let border_radius = (radius - border_width / 2.0).max(0.0);

        Self {
            size,
            face: Circle::new(center, radius),
            border: Circle::new(center, border_radius),
            left_eye: scaled_rect(LEFT_EYE, size),
            right_eye: scaled_rect(RIGHT_EYE, size),
            mouth: mouth_path(size, happiness),
        }
    }
}

fn scaled_point((x, y): (f64, f64), size: f64) -> Point {
    Point::new(x * size, y * size)
}

fn scaled_rect((x0, y0, x1, y1): (f64, f64, f64, f64), size: f64) -> Rect {
    Rect::new(x0 * size, y0 * size, x1 * size, y1 * size)
}

/// Mouth outline: two quadratic curves between the mouth corners.
///
/// A sad mouth is the smile reflected about the line through the corners,
/// so the lips bulge upward instead of downward.
pub fn mouth_path(size: f64, happiness: HappinessState) -> BezPath {
    let (upper, lower) = match happiness {
        HappinessState::Happy => (SMILE_UPPER, SMILE_LOWER),
        HappinessState::Sad => (
            reflect_about_mouth_line(SMILE_UPPER),
            reflect_about_mouth_line(SMILE_LOWER),
        ),
    };

    let start = scaled_point(MOUTH_LEFT, size);
    let mut path = BezPath::new();
    path.move_to(start);
    path.quad_to(scaled_point(upper, size), scaled_point(MOUTH_RIGHT, size));
    path.quad_to(scaled_point(lower, size), start);
    path.close_path();
    path
}

fn reflect_about_mouth_line((x, y): (f64, f64)) -> (f64, f64) {
    (x, 2.0 * MOUTH_LEFT.1 - y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn approx_point(a: Point, b: Point) -> bool {
        approx(a.x, b.x) && approx(a.y, b.y)
    }

    fn approx_rect(rect: Rect, x0: f64, y0: f64, x1: f64, y1: f64) -> bool {
        approx(rect.x0, x0) && approx(rect.y0, y0) && approx(rect.x1, x1) && approx(rect.y1, y1)
    }

    #[test]
    fn test_measure_takes_min() {
        assert_eq!(measure(320.0, 480.0), 320.0);
        assert_eq!(measure(600.0, 200.0), 200.0);
        assert_eq!(measure(0.0, 100.0), 0.0);
    }

    #[test]
    fn test_measure_is_square() {
        let size = measure_size(Size::new(640.0, 360.0));
        assert_eq!(size.width, size.height);
        assert_eq!(size.width, 360.0);
    }

    #[test]
    fn test_measure_degenerate_inputs() {
        assert_eq!(measure(-5.0, 100.0), 0.0);
        assert_eq!(measure(f64::NAN, f64::NAN), 0.0);
        assert_eq!(measure(f64::NAN, 500.0), 0.0);
        assert_eq!(measure(500.0, f64::NAN), 0.0);
        assert_eq!(measure_size(Size::new(f64::NAN, 500.0)), Size::ZERO);
    }

    #[test]
    fn test_face_circle() {
        for size in [0.0, 1.0, 99.0, 320.0, 1024.5] {
            let geometry = FaceGeometry::new(size, 4.0, HappinessState::Happy);
            assert!(approx(geometry.face.radius, size / 2.0));
            assert!(approx_point(geometry.face.center, Point::new(size / 2.0, size / 2.0)));
        }
    }

    #[test]
    fn test_border_radius() {
        let geometry = FaceGeometry::new(320.0, 4.0, HappinessState::Happy);
        assert!(approx(geometry.border.radius, 158.0));
        assert!(approx_point(geometry.border.center, geometry.face.center));
    }

    #[test]
    fn test_border_wider_than_face() {
        let geometry = FaceGeometry::new(10.0, 40.0, HappinessState::Happy);
        assert_eq!(geometry.border.radius, 0.0);
    }

    #[test]
    fn test_eye_boxes() {
        let geometry = FaceGeometry::new(320.0, 4.0, HappinessState::Happy);
        assert!(approx_rect(geometry.left_eye, 102.4, 73.6, 137.6, 160.0));
        assert!(approx_rect(geometry.right_eye, 182.4, 73.6, 217.6, 160.0));
    }

    #[test]
    fn test_smile_path() {
        let path = mouth_path(100.0, HappinessState::Happy);
        let elements = path.elements();
        assert_eq!(elements.len(), 4);
        match (elements[0], elements[1], elements[2], elements[3]) {
            (PathEl::MoveTo(start), PathEl::QuadTo(c1, p1), PathEl::QuadTo(c2, p2), PathEl::ClosePath) => {
                assert!(approx_point(start, Point::new(22.0, 70.0)));
                assert!(approx_point(c1, Point::new(50.0, 80.0)));
                assert!(approx_point(p1, Point::new(78.0, 70.0)));
                assert!(approx_point(c2, Point::new(50.0, 90.0)));
                assert!(approx_point(p2, start));
            }
            other => panic!("unexpected mouth elements: {:?}", other),
        }
    }

    #[test]
    fn test_frown_bulges_upward() {
        let path = mouth_path(100.0, HappinessState::Sad);
        let controls: Vec<Point> = path
            .elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::QuadTo(c, _) => Some(*c),
                _ => None,
            })
            .collect();
        assert_eq!(controls.len(), 2);
        assert!(approx_point(controls[0], Point::new(50.0, 60.0)));
        assert!(approx_point(controls[1], Point::new(50.0, 50.0)));
        // Stays below the eyes.
        let bounds = kurbo::Shape::bounding_box(&path);
        assert!(bounds.y0 >= 50.0);
    }

    #[test]
    fn test_mouth_is_closed_for_any_size() {
        for state in [HappinessState::Happy, HappinessState::Sad] {
            for size in [0.0, 7.0, 320.0, 2048.0] {
                let path = mouth_path(size, state);
                let elements = path.elements();
                let start = match elements.first() {
                    Some(PathEl::MoveTo(p)) => *p,
                    other => panic!("mouth must start with MoveTo, got {:?}", other),
                };
                let end = match elements[elements.len() - 2] {
                    PathEl::QuadTo(_, p) => p,
                    other => panic!("mouth must end with a curve, got {:?}", other),
                };
                assert!(approx_point(start, Point::new(0.22 * size, 0.70 * size)));
                assert!(approx_point(start, end));
                assert_eq!(elements.last(), Some(&PathEl::ClosePath));
            }
        }
    }

    #[test]
    fn test_zero_size_is_degenerate() {
        let geometry = FaceGeometry::new(0.0, 4.0, HappinessState::Happy);
        assert_eq!(geometry.face.radius, 0.0);
        assert_eq!(geometry.border.radius, 0.0);
        assert_eq!(geometry.left_eye.area(), 0.0);
        assert_eq!(geometry.right_eye.area(), 0.0);
    }
}
