//! The canonical layouts for integral avatar counts.
//!
//! Positions and radii are fractions of the icon size. The values are design
//! constants chosen so that circles don't overlap within the unit square.
use cgmath::Point2;
use std::f32::consts::{FRAC_1_SQRT_2, SQRT_2};

use super::Error;

/// The maximum number of avatars in a mosaic.
pub const MAX_AVATARS: usize = 5;

/// The positions and radius of the avatars for an integral avatar count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalLayout {
    /// The avatar radius.
    pub radius: f32,
    /// The avatar centers, indexed by avatar index.
    pub positions: &'static [Point2<f32>],
}

/// Two circles on the main diagonal, touching each other.
const RADIUS_2: f32 = 1.0 / (2.0 + 2.0 / SQRT_2);

/// Four circles in the corners and one in the center.
const RADIUS_5: f32 = FRAC_1_SQRT_2 - 0.5;

/// Moves the three-avatar triangle downward so that it looks vertically
/// centered.
const TRIANGLE_BIAS: f32 = 0.03349;

const fn pt(x: f32, y: f32) -> Point2<f32> {
    Point2 { x, y }
}

const POSITIONS_1: [Point2<f32>; 1] = [pt(0.5, 0.5)];

const POSITIONS_2: [Point2<f32>; 2] = [
    pt(RADIUS_2, RADIUS_2),
    pt(1.0 - RADIUS_2, 1.0 - RADIUS_2),
];

const POSITIONS_3: [Point2<f32>; 3] = [
    pt(0.5, 0.25 + TRIANGLE_BIAS),
    pt(0.75, 0.75 - TRIANGLE_BIAS),
    pt(0.25, 0.75 - TRIANGLE_BIAS),
];

const POSITIONS_4: [Point2<f32>; 4] = [
    pt(0.25, 0.25),
    pt(0.75, 0.25),
    pt(0.25, 0.75),
    pt(0.75, 0.75),
];

const POSITIONS_5: [Point2<f32>; 5] = [
    pt(RADIUS_5, RADIUS_5),
    pt(1.0 - RADIUS_5, RADIUS_5),
    pt(0.5, 0.5),
    pt(1.0 - RADIUS_5, 1.0 - RADIUS_5),
    pt(RADIUS_5, 1.0 - RADIUS_5),
];

static LAYOUTS: [CanonicalLayout; MAX_AVATARS] = [
    CanonicalLayout {
        radius: 0.5,
        positions: &POSITIONS_1,
    },
    CanonicalLayout {
        radius: RADIUS_2,
        positions: &POSITIONS_2,
    },
    CanonicalLayout {
        radius: 0.25,
        positions: &POSITIONS_3,
    },
    CanonicalLayout {
        radius: 0.25,
        positions: &POSITIONS_4,
    },
    CanonicalLayout {
        radius: RADIUS_5,
        positions: &POSITIONS_5,
    },
];

/// Get the canonical layout for `n` avatars.
///
/// Fails with [`Error::InvalidCount`] unless `1 <= n <= 5`.
pub fn canonical(n: usize) -> Result<&'static CanonicalLayout, Error> {
    n.checked_sub(1)
        .and_then(|i| LAYOUTS.get(i))
        .ok_or(Error::InvalidCount(n as f32))
}

/// Get the avatar radius for `n` avatars.
pub fn radius(n: usize) -> Result<f32, Error> {
    Ok(canonical(n)?.radius)
}

/// Get the avatar centers for `n` avatars.
pub fn positions(n: usize) -> Result<&'static [Point2<f32>], Error> {
    Ok(canonical(n)?.positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::assert_abs_diff_eq;

    #[test]
    fn position_counts() {
        for n in 1..=MAX_AVATARS {
            assert_eq!(positions(n).unwrap().len(), n);
        }
    }

    #[test]
    fn out_of_range() {
        for &n in &[0, MAX_AVATARS + 1, 100, usize::max_value()] {
            assert!(matches!(canonical(n), Err(Error::InvalidCount(_))), "{}", n);
            assert!(radius(n).is_err());
            assert!(positions(n).is_err());
        }
    }

    #[test]
    fn radii() {
        assert_eq!(radius(1).unwrap(), 0.5);
        assert_abs_diff_eq!(
            radius(2).unwrap(),
            1.0 / (2.0 + 2.0 / 2.0f32.sqrt()),
            epsilon = 1.0e-6
        );
        assert_eq!(radius(3).unwrap(), 0.25);
        assert_eq!(radius(4).unwrap(), 0.25);
        assert_abs_diff_eq!(
            radius(5).unwrap(),
            1.0 / 2.0f32.sqrt() - 0.5,
            epsilon = 1.0e-6
        );
    }

    #[test]
    fn radii_decrease_with_count() {
        let r: Vec<f32> = (1..=MAX_AVATARS).map(|n| radius(n).unwrap()).collect();
        assert!(r[0] > r[1]);
        assert!(r[1] >= r[2]);
        assert_eq!(r[2], r[3]);
        assert!(r[3] > r[4]);
    }

    #[test]
    fn single_avatar_is_centered() {
        assert_eq!(positions(1).unwrap(), &[Point2::new(0.5, 0.5)][..]);
    }

    #[test]
    fn circles_fit_in_unit_square() {
        for n in 1..=MAX_AVATARS {
            let r = radius(n).unwrap();
            for p in positions(n).unwrap() {
                assert!(p.x - r >= -1.0e-6 && p.x + r <= 1.0 + 1.0e-6, "{} {:?}", n, p);
                assert!(p.y - r >= -1.0e-6 && p.y + r <= 1.0 + 1.0e-6, "{} {:?}", n, p);
            }
        }
    }

    #[test]
    fn circles_do_not_overlap() {
        for n in 2..=MAX_AVATARS {
            let r = radius(n).unwrap();
            let ps = positions(n).unwrap();
            for (i, p1) in ps.iter().enumerate() {
                for p2 in &ps[i + 1..] {
                    let d = ((p1.x - p2.x).powi(2) + (p1.y - p2.y).powi(2)).sqrt();
                    assert!(d >= 2.0 * r - 1.0e-5, "{}: {:?} {:?}", n, p1, p2);
                }
            }
        }
    }

    #[test]
    fn symmetric_layouts() {
        let ps = positions(2).unwrap();
        assert_abs_diff_eq!(ps[0].x + ps[1].x, 1.0, epsilon = 1.0e-6);
        assert_abs_diff_eq!(ps[0].y + ps[1].y, 1.0, epsilon = 1.0e-6);

        let ps = positions(3).unwrap();
        assert_eq!(ps[0].x, 0.5);
        assert_eq!(ps[1].y, ps[2].y);
        assert_abs_diff_eq!(ps[1].x + ps[2].x, 1.0, epsilon = 1.0e-6);

        let ps = positions(5).unwrap();
        assert_eq!(ps[2], Point2::new(0.5, 0.5));
    }
}
