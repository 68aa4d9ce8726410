//! Renders "chat mosaic" icons, i.e., square icons composed of up to five
//! circular avatar images.
//!
//! The avatar count is continuous. A fractional count such as `2.5` blends
//! the canonical layouts for two and three avatars, so the icon can be
//! animated smoothly while participants join or leave a conversation:
//!
//!  - Avatars present in both layouts slide and resize linearly between
//!    their two canonical positions.
//!  - The avatar that only exists in the larger layout (the *entering*
//!    avatar) stays at its final position and grows from radius zero.
//!
//! Drawing is performed through [`pal::iface::Surface`]; this crate never
//! touches pixels or decodes images.
//!
//! # Examples
//!
//! ```
//! use chatmosaic::{interp::layout_for, layout};
//!
//! let slots = layout_for(2.5).unwrap();
//! assert_eq!(slots.len(), 3);
//!
//! // The entering avatar is fixed at its final position...
//! assert_eq!(slots[2].center, layout::positions(3).unwrap()[2]);
//! // ...and is half-grown.
//! assert_eq!(slots[2].radius, 0.5 * layout::radius(3).unwrap());
//! ```
pub use chatmosaic_pal as pal;

mod compositor;
mod error;
mod input;
pub mod interp;
pub mod layout;
mod paint;
pub mod palette;

pub use self::{
    compositor::{render, Compositor, BACKDROP_SCALE, CLIP_SCALE, DEFAULT_BACKGROUND},
    error::Error,
    input::RenderInput,
    interp::{layout_for, AvatarSlot, Slots},
    layout::MAX_AVATARS,
    paint::Painter,
    palette::Palette,
};
