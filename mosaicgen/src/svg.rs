//! A [`Surface`] emitting SVG markup.
use cgmath::{Point2, Vector2};
use chatmosaic::pal::{iface::Surface, Rect, RGBAF32};
use std::{convert::Infallible, fmt::Write};

/// Generates an SVG 1.1 document.
///
/// Images are referenced by URL (`xlink:href`) and are never loaded.
#[derive(Debug)]
pub struct SvgSurface {
    size: Vector2<f32>,
    body: String,
    next_clip_id: usize,
    open_groups: usize,
}

impl SvgSurface {
    pub fn new(size: Vector2<f32>) -> Self {
        Self {
            size,
            body: String::new(),
            next_clip_id: 0,
            open_groups: 0,
        }
    }

    /// Complete the document and return it.
    pub fn finish(mut self) -> String {
        if self.open_groups > 0 {
            log::warn!("{} clipping group(s) were left open", self.open_groups);
            while self.open_groups > 0 {
                self.pop_clip();
            }
        }

        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" \
             xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
             version=\"1.1\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
             {body}</svg>\n",
            w = self.size.x,
            h = self.size.y,
            body = self.body,
        )
    }

    fn indent(&mut self) {
        for _ in 0..=self.open_groups {
            self.body.push_str("  ");
        }
    }
}

impl Surface for SvgSurface {
    type Image = String;
    type Error = Infallible;

    fn fill_rect(&mut self, rect: Rect, color: RGBAF32) {
        self.indent();
        // `write!` to a `String` never fails
        let _ = writeln!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>",
            rect.min.x,
            rect.min.y,
            rect.width(),
            rect.height(),
            Fill(color),
        );
    }

    fn fill_circle(&mut self, center: Point2<f32>, radius: f32, color: RGBAF32) {
        self.indent();
        let _ = writeln!(
            self.body,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
            center.x,
            center.y,
            radius,
            Fill(color),
        );
    }

    fn push_clip_circle(&mut self, center: Point2<f32>, radius: f32) {
        let id = self.next_clip_id;
        self.next_clip_id += 1;

        self.indent();
        let _ = writeln!(
            self.body,
            "<clipPath id=\"clip{}\"><circle cx=\"{}\" cy=\"{}\" r=\"{}\"/></clipPath>",
            id, center.x, center.y, radius,
        );
        self.indent();
        let _ = writeln!(self.body, "<g clip-path=\"url(#clip{})\">", id);
        self.open_groups += 1;
    }

    fn pop_clip(&mut self) {
        if self.open_groups == 0 {
            log::warn!("pop_clip called without a matching push_clip_circle");
            return;
        }
        self.open_groups -= 1;
        self.indent();
        self.body.push_str("</g>\n");
    }

    fn draw_image(&mut self, image: &String, rect: Rect) -> Result<(), Infallible> {
        self.indent();
        let _ = writeln!(
            self.body,
            "<image x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" \
             preserveAspectRatio=\"none\" xlink:href=\"{}\"/>",
            rect.min.x,
            rect.min.y,
            rect.width(),
            rect.height(),
            Escaped(image),
        );
        Ok(())
    }
}

/// Formats ` fill="#rrggbb"`, followed by ` fill-opacity="..."` if the color
/// is translucent.
struct Fill(RGBAF32);

impl std::fmt::Display for Fill {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let to_u8 = |x: f32| (x.max(0.0).min(1.0) * 255.0).round() as u8;
        let c = self.0;
        write!(
            f,
            " fill=\"#{:02x}{:02x}{:02x}\"",
            to_u8(c.r),
            to_u8(c.g),
            to_u8(c.b)
        )?;
        if c.a < 1.0 {
            write!(f, " fill-opacity=\"{}\"", c.a.max(0.0))?;
        }
        Ok(())
    }
}

/// Escapes a string for use in an attribute value.
struct Escaped<'a>(&'a str);

impl std::fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}
