//! Render context passed to widget `draw` methods.

use crate::image::{Image, ImageScaleMode};
use crate::sink::RenderSink;
use crate::transform::Transform2D;
use crate::types::{Color, Point, Rect};

/// A render target paired with the transform accumulated from ancestors.
///
/// Widgets draw in local coordinates. Before drawing a child, the owner
/// composes the child's local position with [`RenderContext::with_offset`].
pub struct RenderContext<'a> {
    sink: &'a mut dyn RenderSink,
    transform: Transform2D,
}

impl<'a> RenderContext<'a> {
    /// Create a context drawing into `sink` with the identity transform.
    pub fn new(sink: &'a mut dyn RenderSink) -> Self {
        Self {
            sink,
            transform: Transform2D::IDENTITY,
        }
    }

    /// Run `f` with `offset` composed onto the current transform.
    ///
    /// The previous transform is restored afterwards.
    pub fn with_offset<R>(&mut self, offset: Point, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.transform;
        self.transform = saved.translated(offset.x, offset.y);
        let result = f(self);
        self.transform = saved;
        result
    }

    /// Fill the whole target.
    pub fn clear(&mut self, color: Color) {
        self.sink.clear(color);
    }

    /// Fill a rectangle given in local coordinates.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = self.transform.transform_rect(&rect);
        self.sink.fill_rect(rect, color);
    }

    /// Outline a rectangle given in local coordinates.
    pub fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        if width <= 0.0 {
            return;
        }
        let rect = self.transform.transform_rect(&rect);
        self.sink.stroke_rect(rect, color, width);
    }

    /// Draw a line between two local points.
    pub fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        let from = self.transform.transform_point(from);
        let to = self.transform.transform_point(to);
        self.sink.draw_line(from, to, color, width);
    }

    /// Draw a text run at a local position. Empty text draws nothing.
    pub fn draw_text(&mut self, origin: Point, text: &str, size: f32, color: Color) {
        if text.is_empty() {
            return;
        }
        let origin = self.transform.transform_point(origin);
        self.sink.draw_text(origin, text, size, color);
    }

    /// Draw `image` into a local rectangle, placed according to `mode`.
    pub fn draw_image(&mut self, image: &Image, dest: Rect, mode: ImageScaleMode, tint: Color) {
        for (src, at) in mode.placements(image.size(), dest) {
            self.draw_image_rect(image, src, at, tint);
        }
    }

    /// Draw the `src` region of `image` (in image pixels) scaled into a
    /// local rectangle. Used for frames of a sprite sheet.
    pub fn draw_image_rect(&mut self, image: &Image, src: Rect, dest: Rect, tint: Color) {
        if image.is_empty() || dest.width() <= 0.0 || dest.height() <= 0.0 {
            return;
        }
        let dest = self.transform.transform_rect(&dest);
        self.sink.draw_image(image.id(), src, dest, tint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageId;
    use crate::sink::{DrawCommand, RecordingSink};
    use crate::types::Size;

    #[test]
    fn test_offsets_compose_and_restore() {
        let mut sink = RecordingSink::new();
        let mut ctx = RenderContext::new(&mut sink);

        ctx.with_offset(Point::new(10.0, 10.0), |ctx| {
            ctx.with_offset(Point::new(5.0, 0.0), |ctx| {
                ctx.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::BLACK);
            });
            ctx.draw_text(Point::new(1.0, 1.0), "hi", 12.0, Color::BLACK);
        });
        ctx.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);

        let cmds = sink.commands();
        assert_eq!(
            cmds[0],
            DrawCommand::FillRect {
                rect: Rect::new(15.0, 10.0, 4.0, 4.0),
                color: Color::BLACK
            }
        );
        assert_eq!(sink.text_origin("hi"), Some(Point::new(11.0, 11.0)));
        assert!(matches!(
            cmds[2],
            DrawCommand::FillRect { rect, .. } if rect == Rect::new(0.0, 0.0, 1.0, 1.0)
        ));
    }

    #[test]
    fn test_images_are_placed_in_target_space() {
        let mut sink = RecordingSink::new();
        let mut ctx = RenderContext::new(&mut sink);
        let image = Image::new(ImageId::new(7), Size::new(10.0, 10.0));

        ctx.with_offset(Point::new(20.0, 30.0), |ctx| {
            let area = Rect::new(0.0, 0.0, 40.0, 10.0);
            ctx.draw_image(&image, area, ImageScaleMode::Tile, Color::WHITE);
        });
        let blank = Image::new(ImageId::new(8), Size::ZERO);
        let area = Rect::new(0.0, 0.0, 5.0, 5.0);
        ctx.draw_image(&blank, area, ImageScaleMode::Stretch, Color::WHITE);

        let images = sink.images();
        assert_eq!(images.len(), 4);
        assert_eq!(
            images[0],
            (ImageId::new(7), Rect::new(20.0, 30.0, 10.0, 10.0))
        );
        assert_eq!(images[3].1, Rect::new(50.0, 30.0, 10.0, 10.0));
    }

    #[test]
    fn test_empty_text_and_zero_stroke_are_skipped() {
        let mut sink = RecordingSink::new();
        let mut ctx = RenderContext::new(&mut sink);
        ctx.draw_text(Point::ZERO, "", 12.0, Color::BLACK);
        ctx.stroke_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::BLACK, 0.0);
        assert!(sink.commands().is_empty());
    }
}
