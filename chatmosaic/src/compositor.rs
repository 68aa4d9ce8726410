//! Draws a mosaic on a [`Surface`].
use cgmath::{Point2, Vector2};
use rgb::RGBA;

use super::{
    interp::layout_for,
    pal::{prelude::*, Rect, RGBAF32},
    Error, Palette, RenderInput,
};

/// The radius of a backdrop disc relative to the avatar radius.
pub const BACKDROP_SCALE: f32 = 0.95;

/// The radius of an avatar image's circular clipping region relative to the
/// avatar radius. Being smaller than [`BACKDROP_SCALE`], this leaves a thin
/// colored ring visible around each image.
pub const CLIP_SCALE: f32 = 0.9;

/// The default background color (white).
pub const DEFAULT_BACKGROUND: RGBAF32 = RGBA {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Holds the appearance settings of rendered mosaics.
#[derive(Debug, Clone, PartialEq)]
pub struct Compositor {
    palette: Palette,
    background: RGBAF32,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl Compositor {
    /// Construct a `Compositor` with the white background.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            background: DEFAULT_BACKGROUND,
        }
    }

    /// Assign `background`, returning a new `Compositor`.
    pub fn with_background(self, background: RGBAF32) -> Self {
        Self { background, ..self }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn background(&self) -> RGBAF32 {
        self.background
    }

    /// Validate the inputs and render a mosaic of `count` avatars on a canvas
    /// of size `size`.
    ///
    /// See [`render`] for details.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        size: Vector2<f32>,
        count: f32,
        images: &[S::Image],
    ) -> Result<(), Error> {
        let input = RenderInput::new(count, images, size)?;
        self.render_input(surface, &input)
    }

    /// Render a mosaic using pre-validated inputs.
    pub fn render_input<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        input: &RenderInput<'_, S::Image>,
    ) -> Result<(), Error> {
        composite(surface, input, &self.palette, self.background)
    }
}

/// Render a mosaic of `count` avatars on a canvas of size `size` with the
/// white background.
///
/// The following steps are taken:
///
///  1. All inputs are validated. On failure, nothing is drawn.
///  2. The canvas is filled with the background color.
///  3. For each avatar slot, in ascending index order, a backdrop disc is
///     filled with the palette color, and `images[i]` is drawn into the
///     bounding square of the slot, clipped by a circle slightly smaller than
///     the disc.
///
/// Slot geometry is scaled by `min(size.x, size.y)`.
///
/// If the surface fails to draw an image, the error is returned as
/// [`Error::Surface`] after the clipping region is restored. The remaining
/// slots are not drawn.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    size: Vector2<f32>,
    count: f32,
    images: &[S::Image],
    palette: &Palette,
) -> Result<(), Error> {
    let input = RenderInput::new(count, images, size)?;
    composite(surface, &input, palette, DEFAULT_BACKGROUND)
}

fn composite<S: Surface + ?Sized>(
    surface: &mut S,
    input: &RenderInput<'_, S::Image>,
    palette: &Palette,
    background: RGBAF32,
) -> Result<(), Error> {
    let slots = layout_for(input.count())?;
    let scale = input.scale();

    log::trace!(
        "Compositing {} slot(s) for count = {} at scale {}",
        slots.len(),
        input.count(),
        scale
    );

    surface.fill_rect(
        Rect::with_size(Point2::new(0.0, 0.0), input.canvas_size()),
        background,
    );

    for (slot, image) in slots.iter().zip(input.images()) {
        let slot = slot.scaled(scale);

        surface.fill_circle(
            slot.center,
            slot.radius * BACKDROP_SCALE,
            palette.color(slot.index),
        );

        surface
            .with_clip_circle(slot.center, slot.radius * CLIP_SCALE, |surface| {
                surface.draw_image(image, slot.bounds())
            })
            .map_err(|e| {
                log::debug!("Could not draw the image of slot {}: {}", slot.index, e);
                Error::Surface(Box::new(e))
            })?;
    }

    Ok(())
}
