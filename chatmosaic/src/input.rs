use cgmath::Vector2;

use super::{interp, Error};

/// The validated inputs of a single render.
///
/// `RenderInput` is assembled by the caller before invoking the compositor.
/// Construction fails fast, so a `RenderInput` that exists is guaranteed to
/// render without [`Error::InvalidCount`], [`Error::MissingImage`], or
/// [`Error::InvalidCanvasSize`].
#[derive(Debug)]
pub struct RenderInput<'a, I> {
    count: f32,
    images: &'a [I],
    canvas_size: Vector2<f32>,
}

impl<I> Clone for RenderInput<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for RenderInput<'_, I> {}

impl<'a, I> RenderInput<'a, I> {
    /// Construct a `RenderInput`.
    ///
    /// `images` must contain at least `ceil(count)` elements. Excess elements
    /// are ignored.
    pub fn new(count: f32, images: &'a [I], canvas_size: Vector2<f32>) -> Result<Self, Error> {
        let needed = interp::num_slots(count)?;

        let size_ok = canvas_size.x.is_finite()
            && canvas_size.y.is_finite()
            && canvas_size.x >= 0.0
            && canvas_size.y >= 0.0;
        if !size_ok {
            return Err(Error::InvalidCanvasSize(canvas_size));
        }

        if images.len() < needed {
            return Err(Error::MissingImage(needed, images.len()));
        }

        if images.len() > needed {
            log::trace!(
                "{} of {} images will not be drawn for count = {}",
                images.len() - needed,
                images.len(),
                count
            );
        }

        Ok(Self {
            count,
            images,
            canvas_size,
        })
    }

    /// Get the avatar count.
    pub fn count(&self) -> f32 {
        self.count
    }

    /// Get the images that will be drawn, i.e., the first `ceil(count)`
    /// elements of the image list.
    pub fn images(&self) -> &'a [I] {
        &self.images[..self.count.ceil() as usize]
    }

    /// Get the canvas size.
    pub fn canvas_size(&self) -> Vector2<f32> {
        self.canvas_size
    }

    /// Get the length of the shorter side of the canvas, which the slot
    /// geometry is scaled by.
    pub fn scale(&self) -> f32 {
        self.canvas_size.x.min(self.canvas_size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_input() {
        let images = [1, 2, 3];
        let input = RenderInput::new(2.5, &images, Vector2::new(100.0, 80.0)).unwrap();
        assert_eq!(input.count(), 2.5);
        assert_eq!(input.images(), &[1, 2, 3][..]);
        assert_eq!(input.scale(), 80.0);
    }

    #[test]
    fn ignores_excess_images() {
        let images = [1, 2, 3, 4, 5];
        let input = RenderInput::new(2.0, &images, Vector2::new(10.0, 10.0)).unwrap();
        assert_eq!(input.images(), &[1, 2][..]);
    }

    #[test]
    fn rejects_missing_images() {
        let images = [1, 2];
        let err = RenderInput::new(3.2, &images, Vector2::new(10.0, 10.0)).unwrap_err();
        assert!(matches!(err, Error::MissingImage(4, 2)), "{:?}", err);
    }

    #[test]
    fn rejects_bad_count_before_images() {
        let images: [u8; 0] = [];
        let err = RenderInput::new(7.0, &images, Vector2::new(10.0, 10.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidCount(_)), "{:?}", err);
    }

    #[test]
    fn rejects_bad_canvas_size() {
        let images = [1];
        for &size in &[
            [-1.0, 10.0],
            [10.0, -0.5],
            [std::f32::NAN, 10.0],
            [10.0, std::f32::INFINITY],
        ] {
            let err = RenderInput::new(1.0, &images, size.into()).unwrap_err();
            assert!(matches!(err, Error::InvalidCanvasSize(_)), "{:?}", err);
        }
    }

    #[test]
    fn empty_canvas_is_valid() {
        let images = [1];
        assert!(RenderInput::new(1.0, &images, Vector2::new(0.0, 0.0)).is_ok());
    }
}
