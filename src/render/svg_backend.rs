use std::fmt::Write as _;

use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, TextAnchor};

/// Renderer backend serializing a frame into a standalone SVG document.
///
/// Keeps the last rendered document available for the host to embed or
/// write out.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_svg: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_svg(&self) -> Option<&str> {
        self.last_svg.as_deref()
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_svg = Some(svg_document(frame));
        Ok(())
    }
}

/// Serializes a validated frame to SVG markup. Deterministic: primitives are
/// emitted in frame order, rects below lines below texts.
#[must_use]
pub fn svg_document(frame: &RenderFrame) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" version="1.1">"#,
        frame.width, frame.height
    );

    for rect in &frame.rects {
        let _ = writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            escape(rect.fill.as_str())
        );
    }
    for line in &frame.lines {
        let _ = writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            line.x1,
            line.y1,
            line.x2,
            line.y2,
            escape(line.color.as_str()),
            line.stroke_width
        );
    }
    for text in &frame.texts {
        let anchor = match text.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let mut attributes = format!(
            r#"x="{}" y="{}" font-size="{}" text-anchor="{anchor}""#,
            text.x, text.y, text.font_size
        );
        if text.rotation_degrees != 0.0 {
            let _ = write!(
                attributes,
                r#" transform="rotate({}, {}, {})""#,
                text.rotation_degrees, text.x, text.y
            );
        }
        let _ = writeln!(out, "  <text {attributes}>{}</text>", escape(&text.content));
    }

    out.push_str("</svg>\n");
    out
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
