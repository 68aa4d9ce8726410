//! Scoped clipping regions.
use cgmath::Point2;
use std::ops::{Deref, DerefMut};

use super::iface::Surface;

/// A lock guard representing an active circular clipping region.
///
/// The region is pushed by [`ClipScope::circle`] and popped when the guard is
/// dropped. This includes early returns via `?` and unwinding, so a failing
/// drawing operation can't leave the clipping region installed.
///
/// The guard dereferences to the underlying surface.
#[derive(Debug)]
pub struct ClipScope<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> ClipScope<'a, S> {
    /// Intersect the current clipping region with a circle and return a guard
    /// that restores it on drop.
    pub fn circle(surface: &'a mut S, center: Point2<f32>, radius: f32) -> Self {
        surface.push_clip_circle(center, radius);
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Drop for ClipScope<'_, S> {
    fn drop(&mut self) {
        self.surface.pop_clip();
    }
}

impl<S: Surface + ?Sized> Deref for ClipScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &Self::Target {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for ClipScope<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.surface
    }
}

/// An extension trait for `Surface` that provides scoped operations.
pub trait SurfaceExt: Surface {
    /// Call `f` with the clipping region intersected with a circle. The
    /// clipping region is restored when `f` returns or unwinds.
    fn with_clip_circle<R>(
        &mut self,
        center: Point2<f32>,
        radius: f32,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R;
}

impl<T: Surface + ?Sized> SurfaceExt for T {
    fn with_clip_circle<R>(
        &mut self,
        center: Point2<f32>,
        radius: f32,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let mut scope = ClipScope::circle(self, center, radius);
        f(&mut scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{iface::RGBAF32, Rect};
    use std::fmt;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Push(Point2<f32>, f32),
        Pop,
        Image(bool),
    }

    /// Tracks clip pushes and pops. Images are `bool`s; `false` fails to draw.
    #[derive(Debug, Default)]
    struct ClipLog {
        calls: Vec<Call>,
        depth: usize,
        max_depth: usize,
    }

    #[derive(Debug)]
    struct Refused;

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("refused")
        }
    }

    impl std::error::Error for Refused {}

    impl Surface for ClipLog {
        type Image = bool;
        type Error = Refused;

        fn fill_rect(&mut self, _: Rect, _: RGBAF32) {}
        fn fill_circle(&mut self, _: Point2<f32>, _: f32, _: RGBAF32) {}

        fn push_clip_circle(&mut self, center: Point2<f32>, radius: f32) {
            self.calls.push(Call::Push(center, radius));
            self.depth += 1;
            self.max_depth = self.max_depth.max(self.depth);
        }

        fn pop_clip(&mut self) {
            assert!(self.depth > 0, "unbalanced pop_clip");
            self.calls.push(Call::Pop);
            self.depth -= 1;
        }

        fn draw_image(&mut self, image: &bool, _: Rect) -> Result<(), Refused> {
            self.calls.push(Call::Image(*image));
            if *image {
                Ok(())
            } else {
                Err(Refused)
            }
        }
    }

    #[test]
    fn scope_pops_on_drop() {
        let mut surface = ClipLog::default();
        {
            let _scope = ClipScope::circle(&mut surface, Point2::new(1.0, 2.0), 3.0);
        }
        assert_eq!(
            surface.calls,
            vec![Call::Push(Point2::new(1.0, 2.0), 3.0), Call::Pop]
        );
        assert_eq!(surface.depth, 0);
    }

    #[test]
    fn with_clip_circle_pops_on_error() {
        let mut surface = ClipLog::default();
        let rect = Rect::around_circle(Point2::new(5.0, 5.0), 5.0);

        let result = surface.with_clip_circle(Point2::new(5.0, 5.0), 4.0, |s| {
            assert_eq!(s.depth, 1);
            s.draw_image(&false, rect)?;
            Ok::<(), Refused>(())
        });

        assert!(result.is_err());
        assert_eq!(surface.depth, 0);
        assert_eq!(
            &surface.calls[1..],
            &[Call::Image(false), Call::Pop][..]
        );
    }

    #[test]
    fn with_clip_circle_pops_on_panic() {
        let mut surface = ClipLog::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            surface.with_clip_circle(Point2::new(0.0, 0.0), 1.0, |_| panic!("boom"))
        }));

        assert!(result.is_err());
        assert_eq!(surface.depth, 0);
        assert_eq!(surface.calls.last(), Some(&Call::Pop));
    }

    #[test]
    fn nested_scopes() {
        let mut surface = ClipLog::default();
        surface.with_clip_circle(Point2::new(0.0, 0.0), 2.0, |s| {
            s.with_clip_circle(Point2::new(0.0, 0.0), 1.0, |s| {
                assert_eq!(s.depth, 2);
                s.draw_image(&true, Rect::around_circle(Point2::new(0.0, 0.0), 1.0))
            })
            .unwrap();
            assert_eq!(s.depth, 1);
        });
        assert_eq!(surface.depth, 0);
        assert_eq!(surface.max_depth, 2);
    }
}
