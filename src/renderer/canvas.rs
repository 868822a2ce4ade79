//! Drawing surface abstraction
//!
//! The scene is drawn through `Canvas` so the same code feeds the browser
//! frontend, the headless native run and tests.

use crate::sim::Aabb;

/// RGBA color, components in 0.0 - 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(0.9, 0.16, 0.22);
    pub const BLUE: Color = Color::rgb(0.0, 0.47, 0.95);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// CSS color string for 2D canvas contexts
    pub fn to_css(self) -> String {
        let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({}, {}, {}, {})",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b),
            self.a
        )
    }
}

/// Something a frame can be drawn onto
pub trait Canvas {
    /// Fill the whole frame
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Aabb, color: Color);
    /// Draw text with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color);
    /// Width of `text` in pixels at `font_size`
    fn measure_text(&self, text: &str, font_size: f32) -> f32;
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect(Aabb, Color),
    Text {
        text: String,
        x: f32,
        y: f32,
        font_size: f32,
        color: Color,
    },
}

/// Canvas that records draw calls instead of drawing
#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

/// Average glyph advance as a fraction of font size
const GLYPH_ADVANCE: f32 = 0.6;

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Aabb, &Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect(rect, color) => Some((rect, color)),
            _ => None,
        })
    }
}

impl Canvas for Recorder {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        self.commands.push(DrawCommand::Rect(rect, color));
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
    }

    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * GLYPH_ADVANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_color() {
        assert_eq!(Color::BLACK.to_css(), "rgba(0, 0, 0, 1)");
        assert_eq!(Color::WHITE.to_css(), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn test_recorder_measure_scales_with_size() {
        let recorder = Recorder::new();
        let small = recorder.measure_text(" 3 ", 20.0);
        let large = recorder.measure_text(" 3 ", 40.0);
        assert!(small > 0.0);
        assert_eq!(large, small * 2.0);
        assert_eq!(recorder.measure_text("", 20.0), 0.0);
    }
}
