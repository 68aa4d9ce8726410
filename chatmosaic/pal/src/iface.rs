//! Defines an abstract interface to the drawing backend.
//!
//! The compositor never touches pixels itself. It issues a small set of
//! operations (fills, circular clips, and image blits) against a type
//! implementing [`Surface`].
use cgmath::{Point2, Vector2};
use rgb::RGBA;
use std::fmt::Debug;

pub type RGBAF32 = RGBA<f32>;

/// A drawing surface.
///
/// All coordinates are measured in the surface's own units (usually pixels)
/// with the origin at the upper-left corner.
///
/// A surface is not reentrant. The compositor holds `&mut` for the whole
/// duration of a render, so calls against the same surface are serialized.
pub trait Surface: Debug {
    /// An image handle type. The compositor never inspects image handles; it
    /// only passes them back to [`Surface::draw_image`].
    type Image;

    /// The error type returned by fallible drawing operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fill the specified rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: RGBAF32);

    /// Fill a circle with a solid color.
    fn fill_circle(&mut self, center: Point2<f32>, radius: f32, color: RGBAF32);

    /// Push a clipping region. The current clipping region is set to its
    /// intersection with the specified circle.
    ///
    /// Every call must be paired with exactly one [`Surface::pop_clip`]. Use
    /// [`ClipScope`] or [`SurfaceExt::with_clip_circle`] instead of calling
    /// this method directly.
    ///
    /// [`ClipScope`]: crate::ClipScope
    /// [`SurfaceExt::with_clip_circle`]: crate::prelude::SurfaceExt::with_clip_circle
    fn push_clip_circle(&mut self, center: Point2<f32>, radius: f32);

    /// Restore the clipping region that was active before the last
    /// unmatched [`Surface::push_clip_circle`].
    fn pop_clip(&mut self);

    /// Draw an image, stretching it to fill `rect`.
    ///
    /// The operation may fail, e.g., if the image data turns out to be
    /// undecodable.
    fn draw_image(&mut self, image: &Self::Image, rect: Rect) -> Result<(), Self::Error>;
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Point2<f32>,
    pub max: Point2<f32>,
}

impl Rect {
    /// Construct a `Rect` from its upper-left and lower-right corners.
    pub fn new(min: Point2<f32>, max: Point2<f32>) -> Self {
        Self { min, max }
    }

    /// Construct a `Rect` from its upper-left corner and size.
    pub fn with_size(min: Point2<f32>, size: Vector2<f32>) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    /// Construct a square `Rect` circumscribing the circle of radius `radius`
    /// centered at `center`.
    pub fn around_circle(center: Point2<f32>, radius: f32) -> Self {
        let half = Vector2::new(radius, radius);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> Vector2<f32> {
        self.max - self.min
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point2<f32> {
        Point2::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }
}
