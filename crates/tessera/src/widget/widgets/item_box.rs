//! A themed box holding a single item.
//!
//! [`ItemBox`] is the drawing block shared by the clickable widgets: a
//! filled, bordered rectangle whose colors follow an activation state, with
//! one [`BoxItem`] centred inside. Buttons hold a text run, option boxes
//! hold a text run plus two arrow boxes, check boxes hold a check mark.

use tessera_core::ActivationState;
use tessera_render::{Color, Point, Rect, RenderContext, Size};
use tessera_style::{BoxKind, Theme};

/// Content that can be centred in an [`ItemBox`].
pub trait BoxItem {
    /// The size the item needs, without the box's border and padding.
    fn natural_size(&self, theme: &Theme) -> Size;

    /// Draw the item inside `rect` using `color`.
    fn draw(&self, ctx: &mut RenderContext<'_>, rect: Rect, color: Color, theme: &Theme);
}

impl BoxItem for String {
    fn natural_size(&self, theme: &Theme) -> Size {
        Size::new(theme.text_width(self), theme.line_spacing())
    }

    fn draw(&self, ctx: &mut RenderContext<'_>, rect: Rect, color: Color, theme: &Theme) {
        let size = self.natural_size(theme);
        let origin = Point::new(
            rect.left() + (rect.width() - size.width) / 2.0,
            rect.top() + (rect.height() - size.height) / 2.0,
        );
        ctx.draw_text(origin, self, theme.text_size(), color);
    }
}

/// A triangular arrow glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Left,
    Right,
    Up,
    Down,
}

impl BoxItem for Arrow {
    fn natural_size(&self, theme: &Theme) -> Size {
        let side = theme.line_spacing() / 2.0;
        Size::new(side, side)
    }

    fn draw(&self, ctx: &mut RenderContext<'_>, rect: Rect, color: Color, theme: &Theme) {
        let half = self.natural_size(theme).width / 2.0;
        let c = rect.center();
        let (tip, a, b) = match self {
            Arrow::Left => (
                c.offset(-half, 0.0),
                c.offset(half, -half),
                c.offset(half, half),
            ),
            Arrow::Right => (
                c.offset(half, 0.0),
                c.offset(-half, -half),
                c.offset(-half, half),
            ),
            Arrow::Up => (
                c.offset(0.0, -half),
                c.offset(-half, half),
                c.offset(half, half),
            ),
            Arrow::Down => (
                c.offset(0.0, half),
                c.offset(-half, -half),
                c.offset(half, -half),
            ),
        };
        ctx.draw_line(a, tip, color, 1.0);
        ctx.draw_line(tip, b, color, 1.0);
        ctx.draw_line(b, a, color, 1.0);
    }
}

/// A check mark, or nothing when unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckMark(pub bool);

impl BoxItem for CheckMark {
    fn natural_size(&self, theme: &Theme) -> Size {
        let side = theme.line_spacing();
        Size::new(side, side)
    }

    fn draw(&self, ctx: &mut RenderContext<'_>, rect: Rect, color: Color, theme: &Theme) {
        if !self.0 {
            return;
        }
        let inset = theme.content_inset() + 2.0;
        ctx.fill_rect(rect.deflate(inset), color);
    }
}

/// A themed box with one centred item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemBox<T: BoxItem> {
    kind: BoxKind,
    item: T,
    rect: Rect,
    state: ActivationState,
}

impl<T: BoxItem> ItemBox<T> {
    pub fn new(kind: BoxKind, item: T) -> Self {
        Self {
            kind,
            item,
            rect: Rect::ZERO,
            state: ActivationState::Default,
        }
    }

    #[inline]
    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn set_item(&mut self, item: T) {
        self.item = item;
    }

    /// Where the box sits, in its widget's local coordinates.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    #[inline]
    pub fn state(&self) -> ActivationState {
        self.state
    }

    /// Boxes do not run the activation state machine themselves; they mirror
    /// whatever state their widget (or a part of it) is in.
    pub fn set_state(&mut self, state: ActivationState) {
        self.state = state;
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }

    /// The smallest box that fits the item: natural size plus border and
    /// padding on every side.
    pub fn fitted_size(&self, theme: &Theme) -> Size {
        let inset = 2.0 * theme.content_inset();
        let natural = self.item.natural_size(theme);
        Size::new(natural.width + inset, natural.height + inset)
    }

    pub fn draw(&self, ctx: &mut RenderContext<'_>, theme: &Theme) {
        let palette = theme.palette(self.kind, self.state);
        ctx.fill_rect(self.rect, palette.fill);
        ctx.stroke_rect(self.rect, palette.border, theme.border_size());
        self.item.draw(ctx, self.rect, palette.text, theme);
    }
}
