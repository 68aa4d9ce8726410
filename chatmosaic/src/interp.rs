//! Derives avatar slots for a continuous avatar count.
use arrayvec::ArrayVec;
use cgmath::Point2;

use super::{
    layout::{self, MAX_AVATARS},
    pal::Rect,
    Error,
};

/// The smallest valid avatar count.
pub const MIN_COUNT: f32 = 1.0;

/// The largest valid avatar count.
pub const MAX_COUNT: f32 = MAX_AVATARS as f32;

/// The resolved position and radius of a single avatar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarSlot {
    /// The avatar index, which selects the image and the backdrop color.
    pub index: usize,
    pub center: Point2<f32>,
    pub radius: f32,
}

impl AvatarSlot {
    /// Scale the geometry by `scale`, e.g., to convert fractions to pixels.
    pub fn scaled(&self, scale: f32) -> Self {
        Self {
            index: self.index,
            center: Point2::new(self.center.x * scale, self.center.y * scale),
            radius: self.radius * scale,
        }
    }

    /// Get the square circumscribing the avatar circle.
    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.center, self.radius)
    }
}

/// The list of avatar slots, ordered by avatar index.
pub type Slots = ArrayVec<[AvatarSlot; MAX_AVATARS]>;

/// Check that `count` is in `[MIN_COUNT, MAX_COUNT]`.
pub fn validate_count(count: f32) -> Result<f32, Error> {
    // `contains` rejects NaN
    if (MIN_COUNT..=MAX_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(Error::InvalidCount(count))
    }
}

/// Get the number of slots (and images) required to render `count` avatars.
pub fn num_slots(count: f32) -> Result<usize, Error> {
    Ok(validate_count(count)?.ceil() as usize)
}

/// Calculate the avatar slots for the avatar count `count`. The geometry is
/// measured in fractions of the icon size.
///
/// `count` is split into `low = floor(count)`, `high = ceil(count)`, and
/// `dist = count - low`. The result contains `high` slots. The entering avatar
/// (the last one, present only if `low != high`) is placed at its final
/// position in the `high` layout with radius `dist * radius(high)`. The other
/// avatars are linearly interpolated between the `low` and `high` layouts.
///
/// Fails with [`Error::InvalidCount`] if `count` is outside `[1, 5]`.
pub fn layout_for(count: f32) -> Result<Slots, Error> {
    let count = validate_count(count)?;

    let low = count.floor();
    let high = count.ceil();
    let dist = count - low;
    let (low, high) = (low as usize, high as usize);

    let layout_low = layout::canonical(low)?;
    let layout_high = layout::canonical(high)?;

    let slots = (0..high)
        .map(|i| {
            let high_pos = layout_high.positions[i];
            if low != high && i == high - 1 {
                AvatarSlot {
                    index: i,
                    center: high_pos,
                    radius: dist * layout_high.radius,
                }
            } else {
                let low_pos = layout_low.positions[i];
                AvatarSlot {
                    index: i,
                    center: Point2::new(
                        blend(low_pos.x, high_pos.x, dist),
                        blend(low_pos.y, high_pos.y, dist),
                    ),
                    radius: blend(layout_low.radius, layout_high.radius, dist),
                }
            }
        })
        .collect();

    Ok(slots)
}

/// `(1 - t) * a + t * b`. Returns `a` exactly when `t == 0`.
#[inline]
fn blend(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::assert_abs_diff_eq;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn integral_counts_are_canonical() {
        for n in 1..=MAX_AVATARS {
            let slots = layout_for(n as f32).unwrap();
            let positions = layout::positions(n).unwrap();
            let radius = layout::radius(n).unwrap();

            assert_eq!(slots.len(), n);
            for (i, slot) in slots.iter().enumerate() {
                assert_eq!(slot.index, i);
                assert_eq!(slot.center, positions[i]);
                assert_eq!(slot.radius, radius);
            }
        }
    }

    #[test]
    fn out_of_range() {
        for &count in &[
            0.0,
            0.999_999,
            5.000_001,
            6.0,
            -1.0,
            std::f32::NAN,
            std::f32::INFINITY,
            std::f32::NEG_INFINITY,
        ] {
            assert!(
                matches!(layout_for(count), Err(Error::InvalidCount(_))),
                "{}",
                count
            );
        }
    }

    #[test]
    fn halfway_between_two_and_three() {
        let slots = layout_for(2.5).unwrap();
        assert_eq!(slots.len(), 3);

        let p2 = layout::positions(2).unwrap();
        let p3 = layout::positions(3).unwrap();
        let r2 = layout::radius(2).unwrap();
        let r3 = layout::radius(3).unwrap();

        for i in 0..2 {
            assert_abs_diff_eq!(slots[i].center.x, (p2[i].x + p3[i].x) * 0.5, epsilon = 1.0e-6);
            assert_abs_diff_eq!(slots[i].center.y, (p2[i].y + p3[i].y) * 0.5, epsilon = 1.0e-6);
            assert_abs_diff_eq!(slots[i].radius, (r2 + r3) * 0.5, epsilon = 1.0e-6);
        }

        assert_eq!(slots[2].center, p3[2]);
        assert_eq!(slots[2].radius, 0.5 * r3);
    }

    #[test]
    fn scaled_slot() {
        let slot = AvatarSlot {
            index: 3,
            center: Point2::new(0.25, 0.5),
            radius: 0.125,
        };
        let scaled = slot.scaled(64.0);
        assert_eq!(scaled.index, 3);
        assert_eq!(scaled.center, Point2::new(16.0, 32.0));
        assert_eq!(scaled.radius, 8.0);
        assert_eq!(scaled.bounds(), Rect::around_circle(Point2::new(16.0, 32.0), 8.0));
    }

    #[test]
    fn num_slots_rounds_up() {
        assert_eq!(num_slots(1.0).unwrap(), 1);
        assert_eq!(num_slots(1.01).unwrap(), 2);
        assert_eq!(num_slots(3.2).unwrap(), 4);
        assert_eq!(num_slots(5.0).unwrap(), 5);
        assert!(num_slots(0.5).is_err());
    }

    /// Map an arbitrary `u32` to a count in `[1, 5]`.
    fn count_from_bits(x: u32) -> f32 {
        MIN_COUNT + (x % 4_000_001) as f32 / 1_000_000.0
    }

    #[quickcheck]
    fn entering_avatar_grows_in_place(x: u32) -> TestResult {
        let count = count_from_bits(x);
        if count.fract() == 0.0 {
            return TestResult::discard();
        }

        let n = count.floor() as usize;
        let dist = count - count.floor();
        let slots = layout_for(count).unwrap();
        if slots.len() != n + 1 {
            return TestResult::error(format!("len = {}", slots.len()));
        }
        let entering = slots[n];

        if entering.index != n || entering.center != layout::positions(n + 1).unwrap()[n] {
            return TestResult::error(format!("entering = {:?}", entering));
        }
        if entering.radius != dist * layout::radius(n + 1).unwrap() {
            return TestResult::error(format!("entering = {:?}", entering));
        }

        TestResult::passed()
    }

    #[quickcheck]
    fn persisting_avatars_stay_between_layouts(x: u32) -> bool {
        let count = count_from_bits(x);
        let low = count.floor() as usize;
        let high = count.ceil() as usize;
        let slots = layout_for(count).unwrap();

        let within = |v: f32, a: f32, b: f32| v >= a.min(b) - 1.0e-6 && v <= a.max(b) + 1.0e-6;
        let (pl, ph) = (
            layout::positions(low).unwrap(),
            layout::positions(high).unwrap(),
        );
        let (rl, rh) = (layout::radius(low).unwrap(), layout::radius(high).unwrap());

        slots.iter().take(low).all(|slot| {
            let i = slot.index;
            within(slot.center.x, pl[i].x, ph[i].x)
                && within(slot.center.y, pl[i].y, ph[i].y)
                && within(slot.radius, rl, rh)
        })
    }

    #[quickcheck]
    fn deterministic(x: u32) -> bool {
        let count = count_from_bits(x);
        layout_for(count).unwrap() == layout_for(count).unwrap()
    }

    #[quickcheck]
    fn slots_stay_in_unit_square(x: u32) -> bool {
        let slots = layout_for(count_from_bits(x)).unwrap();
        slots.iter().all(|s| {
            s.radius >= 0.0
                && s.center.x - s.radius >= -1.0e-5
                && s.center.y - s.radius >= -1.0e-5
                && s.center.x + s.radius <= 1.0 + 1.0e-5
                && s.center.y + s.radius <= 1.0 + 1.0e-5
        })
    }
}
