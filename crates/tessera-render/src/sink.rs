//! The render-sink interface.
//!
//! A [`RenderSink`] is the drawing backend: a GPU renderer, a software
//! rasterizer, or the [`RecordingSink`] used by tests and headless runs.
//! Coordinates reaching a sink are already in target space; local offsets
//! are resolved by [`RenderContext`](crate::RenderContext).

use crate::image::ImageId;
use crate::types::{Color, Point, Rect};

/// A drawing backend.
pub trait RenderSink {
    /// Fill the whole target.
    fn clear(&mut self, color: Color);

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline a rectangle with a stroke of `width`, drawn inside the rect.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Draw a straight line.
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Draw a single run of text with its top-left corner at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str, size: f32, color: Color);

    /// Draw the `src` region of a host image (in image pixels) scaled into
    /// `dest`, multiplied by `tint`.
    fn draw_image(&mut self, image: ImageId, src: Rect, dest: Rect, tint: Color);
}

/// A primitive recorded by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f32,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f32,
    },
    Text {
        origin: Point,
        text: String,
        size: f32,
        color: Color,
    },
    Image {
        image: ImageId,
        src: Rect,
        dest: Rect,
        tint: Color,
    },
}

/// A sink that records every primitive instead of drawing it.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    commands: Vec<DrawCommand>,
}

impl RecordingSink {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands, in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The text runs drawn, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Where a text run equal to `text` was drawn first, if at all.
    pub fn text_origin(&self, text: &str) -> Option<Point> {
        self.commands.iter().find_map(|cmd| match cmd {
            DrawCommand::Text { origin, text: t, .. } if t == text => Some(*origin),
            _ => None,
        })
    }

    /// The images drawn, in draw order, with their destinations.
    pub fn images(&self) -> Vec<(ImageId, Rect)> {
        self.commands
            .iter()
            .filter_map(|cmd| match *cmd {
                DrawCommand::Image { image, dest, .. } => Some((image, dest)),
                _ => None,
            })
            .collect()
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl RenderSink for RecordingSink {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_text(&mut self, origin: Point, text: &str, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_owned(),
            size,
            color,
        });
    }

    fn draw_image(&mut self, image: ImageId, src: Rect, dest: Rect, tint: Color) {
        self.commands.push(DrawCommand::Image {
            image,
            src,
            dest,
            tint,
        });
    }
}
