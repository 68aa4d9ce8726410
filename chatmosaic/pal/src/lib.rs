//! Chat mosaic drawing-surface abstraction
//!
//! This crate defines the contract between the mosaic compositor and the
//! backend that actually produces pixels (or markup). It is reexported by
//! `chatmosaic` as `chatmosaic::pal`.
mod clip;
pub mod iface;

#[cfg(feature = "testing")]
pub mod testing;

pub use self::{
    clip::ClipScope,
    iface::{Rect, RGBAF32},
};

/// Re-exports traits from `iface` and `clip`.
pub mod prelude {
    pub use super::clip::SurfaceExt;
    pub use super::iface::Surface;
}
