//! Dumps resolved slot geometry as JSON.
use chatmosaic::{layout_for, Error, Palette};
use miniserde::{json, Serialize};

#[derive(Debug, Serialize)]
struct Frame {
    count: f32,
    slots: Vec<Slot>,
}

/// A slot measured in pixels.
#[derive(Debug, Serialize)]
struct Slot {
    index: usize,
    x: f32,
    y: f32,
    radius: f32,
    color: String,
}

/// Serialize the slots of each frame. The geometry is scaled by `scale`.
pub fn frames_to_json(counts: &[f32], scale: f32, palette: &Palette) -> Result<String, Error> {
    let frames = counts
        .iter()
        .map(|&count| -> Result<Frame, Error> {
            let slots = layout_for(count)?
                .iter()
                .map(|slot| {
                    let slot = slot.scaled(scale);
                    let c = palette.color(slot.index);
                    let to_u8 = |x: f32| (x.max(0.0).min(1.0) * 255.0).round() as u8;
                    Slot {
                        index: slot.index,
                        x: slot.center.x,
                        y: slot.center.y,
                        radius: slot.radius,
                        color: format!(
                            "#{:02x}{:02x}{:02x}{:02x}",
                            to_u8(c.r),
                            to_u8(c.g),
                            to_u8(c.b),
                            to_u8(c.a)
                        ),
                    }
                })
                .collect();
            Ok(Frame { count, slots })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(json::to_string(&frames))
}
