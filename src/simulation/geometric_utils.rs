//! Geometric helpers for square bounding boxes.
//!
//! Boxes are addressed by their top-left corner; all boxes in an arena share
//! the same edge length.

use ndarray::Array1;

/// Returns `true` if two boxes of edge `size` overlap.
///
/// Boxes that only touch along an edge do not overlap.
pub fn boxes_intersect(a: &Array1<f32>, b: &Array1<f32>, size: f32) -> bool {
    (a[0] - b[0]).abs() < size && (a[1] - b[1]).abs() < size
}

/// Clamps a box of edge `size` so it lies entirely inside the arena.
///
/// The caller guarantees `size` does not exceed either arena dimension.
pub fn clamp_box_mut(pos: &mut Array1<f32>, size: f32, box_width: f32, box_height: f32) {
    pos[0] = pos[0].clamp(0.0, box_width - size);
    pos[1] = pos[1].clamp(0.0, box_height - size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes() {
        let a = Array1::from_vec(vec![10.0, 10.0]);
        let b = Array1::from_vec(vec![40.0, 55.0]);
        assert!(boxes_intersect(&a, &b, 50.0));
        assert!(boxes_intersect(&b, &a, 50.0));
        assert!(boxes_intersect(&a, &a, 50.0));
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let a = Array1::from_vec(vec![0.0, 0.0]);
        let b = Array1::from_vec(vec![50.0, 0.0]);
        assert!(!boxes_intersect(&a, &b, 50.0));

        let c = Array1::from_vec(vec![0.0, 50.0]);
        assert!(!boxes_intersect(&a, &c, 50.0));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_clamp_box() {
        let mut pos = Array1::from_vec(vec![-5.0, 990.0]);
        clamp_box_mut(&mut pos, 50.0, 800.0, 600.0);
        assert_eq!(pos[0], 0.0);
        assert_eq!(pos[1], 550.0);

        let mut inside = Array1::from_vec(vec![100.0, 200.0]);
        clamp_box_mut(&mut inside, 50.0, 800.0, 600.0);
        assert_eq!(inside[0], 100.0);
        assert_eq!(inside[1], 200.0);
    }
}
