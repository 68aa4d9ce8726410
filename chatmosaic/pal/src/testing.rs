//! A surface that records drawing operations instead of performing them.
//!
//! `Recorder` is meant for tests. It keeps every operation in issue order so
//! that a test can compare the whole operation stream or inspect individual
//! operations, and it checks that clipping regions are balanced.
use cgmath::Point2;
use std::fmt;

use super::iface::{Rect, Surface, RGBAF32};

/// A drawing operation recorded by [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    FillRect {
        rect: Rect,
        color: RGBAF32,
    },
    FillCircle {
        center: Point2<f32>,
        radius: f32,
        color: RGBAF32,
    },
    PushClipCircle {
        center: Point2<f32>,
        radius: f32,
    },
    PopClip,
    DrawImage {
        image: u32,
        rect: Rect,
        /// The clipping depth at the point of drawing.
        clip_depth: usize,
    },
}

/// An image handle accepted by [`Recorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TestImage {
    pub id: u32,
    /// If `true`, drawing this image fails with [`DrawImageError`].
    pub broken: bool,
}

impl TestImage {
    pub fn new(id: u32) -> Self {
        Self { id, broken: false }
    }

    /// Construct a `TestImage` that fails to draw, simulating undecodable
    /// image data.
    pub fn broken(id: u32) -> Self {
        Self { id, broken: true }
    }
}

/// Returned by [`Recorder::draw_image`] for a [`TestImage::broken`] image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawImageError {
    pub id: u32,
}

impl fmt::Display for DrawImageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "could not draw the image #{}", self.id)
    }
}

impl std::error::Error for DrawImageError {}

/// A [`Surface`] that records operations.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Recorder {
    ops: Vec<Op>,
    clip_depth: usize,
    max_clip_depth: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded operations.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Take the recorded operations, leaving `self` empty.
    pub fn take_ops(&mut self) -> Vec<Op> {
        std::mem::replace(&mut self.ops, Vec::new())
    }

    /// Get the number of clipping regions currently pushed.
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// Get the largest value `clip_depth` has ever had.
    pub fn max_clip_depth(&self) -> usize {
        self.max_clip_depth
    }

    /// Get the IDs of the drawn images in drawing order.
    pub fn drawn_images(&self) -> Vec<u32> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::DrawImage { image, .. } => Some(*image),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    type Image = TestImage;
    type Error = DrawImageError;

    fn fill_rect(&mut self, rect: Rect, color: RGBAF32) {
        self.ops.push(Op::FillRect { rect, color });
    }

    fn fill_circle(&mut self, center: Point2<f32>, radius: f32, color: RGBAF32) {
        self.ops.push(Op::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn push_clip_circle(&mut self, center: Point2<f32>, radius: f32) {
        self.clip_depth += 1;
        self.max_clip_depth = self.max_clip_depth.max(self.clip_depth);
        self.ops.push(Op::PushClipCircle { center, radius });
    }

    fn pop_clip(&mut self) {
        assert!(
            self.clip_depth > 0,
            "pop_clip was called without a matching push_clip_circle"
        );
        self.clip_depth -= 1;
        self.ops.push(Op::PopClip);
    }

    fn draw_image(&mut self, image: &TestImage, rect: Rect) -> Result<(), DrawImageError> {
        if image.broken {
            log::debug!("Refusing to draw the broken image #{}", image.id);
            return Err(DrawImageError { id: image.id });
        }
        self.ops.push(Op::DrawImage {
            image: image.id,
            rect,
            clip_depth: self.clip_depth,
        });
        Ok(())
    }
}
