use super::{pal::iface::Surface, Compositor, Error, RenderInput};

/// Represents an object that can paint on a [`Surface`] given a set of
/// validated inputs.
///
/// [`Compositor`] is the canonical implementation. Closures taking
/// `(&mut S, &RenderInput<'_, S::Image>)` implement this trait as well, which
/// is useful for decorating or replacing the default drawing.
pub trait Painter<S: Surface + ?Sized> {
    /// Paint the contents.
    fn paint(&self, surface: &mut S, input: &RenderInput<'_, S::Image>) -> Result<(), Error>;
}

impl<S: Surface + ?Sized> Painter<S> for Compositor {
    fn paint(&self, surface: &mut S, input: &RenderInput<'_, S::Image>) -> Result<(), Error> {
        self.render_input(surface, input)
    }
}

impl<S, T> Painter<S> for T
where
    S: Surface + ?Sized,
    T: Fn(&mut S, &RenderInput<'_, S::Image>) -> Result<(), Error>,
{
    fn paint(&self, surface: &mut S, input: &RenderInput<'_, S::Image>) -> Result<(), Error> {
        self(surface, input)
    }
}
