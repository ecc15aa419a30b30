//! Single-line text input.
//!
//! [`TextBox`] edits a string of at most `max_length` characters. All
//! positions in its API are character indices, never byte offsets.
//!
//! # Keyboard
//!
//! | keys                  | action |
//! |-----------------------|--------|
//! | Left / Right          | move the cursor; with Ctrl, by word |
//! | Shift + movement      | grow the selection |
//! | Home, Up / End, Down  | jump to the start / end |
//! | Backspace / Delete    | remove the selection, or one character |
//! | Ctrl+A                | select everything |
//! | Ctrl+C / X / V        | copy / cut / paste |
//! | Enter                 | fire the update callback |
//!
//! Moving left without Shift while the cursor sits at the right end of a
//! selection (or right while at its left end) jumps the cursor to the other
//! end and keeps the selection, instead of dropping it.

use std::ops::Range;
use std::time::Duration;

use tessera_core::Selection;
use tessera_render::{Point, Rect, RenderContext, Size};
use tessera_style::{BoxKind, Theme};
use unicode_segmentation::UnicodeSegmentation;

use crate::widget::{CursorShape, EventContext, Key, KeyEvent, Widget, WidgetBase};

/// Default width in pixels.
pub const DEFAULT_WIDTH: f32 = 200.0;

/// Default maximum number of characters.
pub const DEFAULT_MAX_LENGTH: usize = 256;

/// Characters accepted from text input: printable ASCII and everything past
/// the C1 control block.
fn is_printable(ch: char) -> bool {
    let code = u32::from(ch);
    code > 30 && (code < 127 || code > 159)
}

/// A single-line text editor.
pub struct TextBox {
    base: WidgetBase,
    text: String,
    placeholder: String,
    width: f32,
    max_length: usize,
    cursor: usize,
    selection: Selection,
    /// Horizontal text offset keeping the cursor in view.
    scroll: f32,
    /// Session time of the last tick.
    now: Duration,
    /// Session time the cursor last moved; the blink cycle restarts there.
    blink_epoch: Duration,
}

impl TextBox {
    /// Create an empty text box `width` pixels wide.
    pub fn new(width: f32) -> Self {
        Self {
            base: WidgetBase::interactive(),
            text: String::new(),
            placeholder: String::new(),
            width,
            max_length: DEFAULT_MAX_LENGTH,
            cursor: 0,
            selection: Selection::new(),
            scroll: 0.0,
            now: Duration::ZERO,
            blink_epoch: Duration::ZERO,
        }
    }

    /// Show `placeholder` while the text is empty.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Limit the text to `max_length` characters.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.set_max_length(max_length);
        self
    }

    // =========================================================================
    // Content
    // =========================================================================

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, truncated to the maximum length. The cursor moves
    /// to the end and the selection is dropped. Does not fire the callback.
    pub fn set_text(&mut self, text: impl AsRef<str>) {
        self.text = text.as_ref().chars().take(self.max_length).collect();
        self.selection.cancel();
        self.set_cursor(self.len());
    }

    /// Number of characters in the text.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    #[inline]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Change the maximum length, cutting the text if it is longer.
    pub fn set_max_length(&mut self, max_length: usize) {
        self.max_length = max_length;
        if self.len() > max_length {
            let text: String = self.text.chars().take(max_length).collect();
            self.set_text(text);
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
        if let Some(height) = self.base.theme().map(Theme::box_height) {
            self.base.set_size(Size::new(width, height));
        }
        self.scroll_to_cursor();
    }

    // =========================================================================
    // Cursor and selection
    // =========================================================================

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to `index`. The end of the text is a valid position;
    /// anything past it leaves the cursor where it is.
    ///
    /// A growing selection follows the cursor; a stopped one is dropped.
    pub fn set_cursor(&mut self, index: usize) {
        if index > self.len() {
            self.selection.follow(self.cursor);
            return;
        }
        self.cursor = index;
        self.selection.follow(index);
        self.blink_epoch = self.now;
        self.scroll_to_cursor();
    }

    #[inline]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Select `length` characters starting at `from`.
    pub fn select(&mut self, from: usize, length: usize) {
        self.selection.set_span(from, length);
        self.selection.clamp_to(self.len());
    }

    pub fn select_all(&mut self) {
        self.select(0, self.len());
    }

    pub fn clear_selection(&mut self) {
        self.selection.cancel();
    }

    /// The selected text, empty if nothing is selected.
    pub fn selected_text(&self) -> &str {
        if self.selection.is_empty() {
            return "";
        }
        &self.text[self.byte_range(self.selection.range())]
    }

    /// Remove the selected text and put the cursor where it started. The
    /// selection is cleared even if it was empty.
    pub fn delete_selected_text(&mut self) {
        if self.selection.is_set() {
            let lower = self.selection.lower();
            let range = self.byte_range(self.selection.range());
            self.text.replace_range(range, "");
            self.selection.cancel();
            self.set_cursor(lower);
        }
        self.selection.cancel();
    }

    // =========================================================================
    // Editing helpers
    // =========================================================================

    fn byte_index(&self, index: usize) -> usize {
        self.text
            .char_indices()
            .nth(index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    fn byte_range(&self, range: Range<usize>) -> Range<usize> {
        self.byte_index(range.start)..self.byte_index(range.end)
    }

    /// Insert as much of `text` at the cursor as the length limit allows.
    fn insert_at_cursor(&mut self, text: &str) {
        let room = self.max_length.saturating_sub(self.len());
        let insert: String = text.chars().filter(|&c| is_printable(c)).take(room).collect();
        if insert.is_empty() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, &insert);
        self.set_cursor(self.cursor + insert.chars().count());
    }

    fn delete_backward(&mut self) {
        if self.selection.is_set() {
            self.delete_selected_text();
        } else if self.cursor > 0 {
            let at = self.byte_index(self.cursor - 1);
            self.text.remove(at);
            self.set_cursor(self.cursor - 1);
        }
    }

    fn delete_forward(&mut self) {
        if self.selection.is_set() {
            self.delete_selected_text();
        } else if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
            self.set_cursor(self.cursor);
        }
    }

    fn copy(&self, ctx: &mut EventContext<'_>) {
        if self.selection.is_set() {
            ctx.clipboard().set_text(self.selected_text());
        }
    }

    fn paste(&mut self, ctx: &mut EventContext<'_>) {
        self.delete_selected_text();
        if let Some(text) = ctx.clipboard().get_text() {
            self.insert_at_cursor(&text);
        }
    }

    /// Character indices where word-boundary segments start, plus the end.
    fn word_bounds(&self) -> Vec<usize> {
        let mut bounds = Vec::new();
        let mut chars = 0;
        for segment in self.text.split_word_bounds() {
            bounds.push(chars);
            chars += segment.chars().count();
        }
        bounds.push(chars);
        bounds
    }

    /// Start of the word (or whitespace run) ending at the cursor.
    fn previous_word(&self) -> usize {
        self.word_bounds()
            .into_iter()
            .rev()
            .find(|&bound| bound < self.cursor)
            .unwrap_or(0)
    }

    /// End of the word (or whitespace run) starting at the cursor.
    fn next_word(&self) -> usize {
        self.word_bounds()
            .into_iter()
            .find(|&bound| bound > self.cursor)
            .unwrap_or_else(|| self.len())
    }

    /// Shift extends the selection, starting one if needed. Anything else
    /// freezes it so the next cursor move drops it.
    fn prepare_selection(&mut self, key: &KeyEvent) {
        if !key.shift() {
            self.selection.stop();
        } else if self.selection.is_inactive() {
            self.selection.start(self.cursor);
        } else {
            self.selection.resume();
        }
    }

    fn move_left(&mut self, key: &KeyEvent) {
        self.prepare_selection(key);
        if key.control() {
            self.set_cursor(self.previous_word());
        } else if !key.shift() && self.selection.is_set() && self.cursor == self.selection.upper() {
            let lower = self.selection.lower();
            self.selection.resume();
            self.selection.set_from_to(self.cursor, lower);
            self.set_cursor(lower);
            self.selection.stop();
        } else if self.cursor > 0 {
            self.set_cursor(self.cursor - 1);
        } else {
            self.set_cursor(0);
        }
    }

    fn move_right(&mut self, key: &KeyEvent) {
        self.prepare_selection(key);
        if key.control() {
            self.set_cursor(self.next_word());
        } else if !key.shift() && self.selection.is_set() && self.cursor == self.selection.lower() {
            let upper = self.selection.upper();
            self.selection.resume();
            self.selection.set_from_to(self.cursor, upper);
            self.set_cursor(upper);
            self.selection.stop();
        } else {
            self.set_cursor(self.cursor + 1);
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    fn prefix_width(&self, theme: &Theme, index: usize) -> f32 {
        theme.text_width(&self.text[..self.byte_index(index)])
    }

    /// The cursor position closest to the left of local `x`.
    fn index_at(&self, x: f32) -> usize {
        let Some(theme) = self.base.theme() else {
            return 0;
        };
        let target = x - theme.content_inset() + self.scroll;
        (0..=self.len())
            .rev()
            .find(|&index| self.prefix_width(theme, index) <= target)
            .unwrap_or(0)
    }

    fn scroll_to_cursor(&mut self) {
        let Some(theme) = self.base.theme() else {
            return;
        };
        let visible = (self.width - 2.0 * theme.content_inset()).max(0.0);
        let cursor_x = self.prefix_width(theme, self.cursor);
        let text_width = self.prefix_width(theme, self.len());

        let mut scroll = self.scroll;
        if cursor_x - scroll > visible {
            scroll = cursor_x - visible;
        } else if cursor_x < scroll {
            scroll = cursor_x;
        }
        self.scroll = scroll.min((text_width - visible).max(0.0)).max(0.0);
    }

    /// Range of characters that fit in the box at the current scroll.
    fn visible_range(&self, theme: &Theme) -> Range<usize> {
        let visible = (self.width - 2.0 * theme.content_inset()).max(0.0);
        let len = self.len();
        let start = (0..=len)
            .find(|&i| self.prefix_width(theme, i) >= self.scroll)
            .unwrap_or(len);
        let end = (start..=len)
            .rev()
            .find(|&i| self.prefix_width(theme, i) - self.scroll <= visible)
            .unwrap_or(start);
        start..end
    }
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl Widget for TextBox {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn on_theme_changed(&mut self, theme: &Theme) {
        self.base.set_size(Size::new(self.width, theme.box_height()));
        self.scroll_to_cursor();
    }

    fn on_tick(&mut self, ctx: &mut EventContext<'_>) {
        self.now = ctx.session_time();
    }

    fn on_mouse_enter(&mut self, ctx: &mut EventContext<'_>) {
        ctx.set_cursor(CursorShape::IBeam);
    }

    fn on_mouse_leave(&mut self, ctx: &mut EventContext<'_>) {
        ctx.set_cursor(CursorShape::Arrow);
    }

    fn on_mouse_pressed(&mut self, _ctx: &mut EventContext<'_>, pos: Point) {
        let index = self.index_at(pos.x);
        self.set_cursor(index);
        self.selection.start(index);
    }

    fn on_mouse_moved(&mut self, ctx: &mut EventContext<'_>, pos: Point) {
        if ctx.has_capture() {
            self.set_cursor(self.index_at(pos.x));
        }
    }

    fn on_mouse_released(&mut self, _ctx: &mut EventContext<'_>, _pos: Point) {
        self.selection.stop();
    }

    fn on_key_pressed(&mut self, ctx: &mut EventContext<'_>, key: &KeyEvent) {
        match key.key {
            k if k.is_shift() => self.selection.start(self.cursor),
            Key::ArrowLeft => self.move_left(key),
            Key::ArrowRight => self.move_right(key),
            Key::Home | Key::ArrowUp => {
                self.prepare_selection(key);
                self.set_cursor(0);
            }
            Key::End | Key::ArrowDown => {
                self.prepare_selection(key);
                self.set_cursor(self.len());
            }
            Key::Backspace => self.delete_backward(),
            Key::Delete => self.delete_forward(),
            Key::Enter => self.base.mark_updated(),
            Key::A if key.control() => self.select_all(),
            Key::C if key.control() => self.copy(ctx),
            Key::X if key.control() => {
                self.copy(ctx);
                self.delete_selected_text();
            }
            Key::V if key.control() => self.paste(ctx),
            _ => {}
        }
    }

    fn on_key_released(&mut self, _ctx: &mut EventContext<'_>, key: &KeyEvent) {
        if key.key.is_shift() {
            self.selection.stop();
        }
    }

    fn on_text_entered(&mut self, _ctx: &mut EventContext<'_>, ch: char) {
        if !is_printable(ch) {
            return;
        }
        self.delete_selected_text();
        let mut buf = [0; 4];
        self.insert_at_cursor(ch.encode_utf8(&mut buf));
    }

    fn on_focus_out(&mut self, _ctx: &mut EventContext<'_>) {
        self.selection.cancel();
    }

    fn draw(&self, ctx: &mut RenderContext<'_>) {
        let Some(theme) = self.base.theme() else {
            return;
        };
        let style = theme.style(BoxKind::Input);
        let palette = theme.palette(BoxKind::Input, self.base.state());
        let rect = self.base.rect();
        ctx.fill_rect(rect, palette.fill);
        ctx.stroke_rect(rect, palette.border, theme.border_size());

        let inset = theme.content_inset();
        let left = inset;
        let right = (rect.width() - inset).max(left);
        let to_x = |index: usize| (inset + self.prefix_width(theme, index) - self.scroll).clamp(left, right);

        if self.text.is_empty() {
            ctx.draw_text(
                Point::new(inset, inset),
                &self.placeholder,
                theme.text_size(),
                style.placeholder,
            );
        } else {
            if self.selection.is_set() {
                let x0 = to_x(self.selection.lower());
                let x1 = to_x(self.selection.upper());
                ctx.fill_rect(
                    Rect::new(x0, inset, x1 - x0, theme.line_spacing()),
                    style.selection,
                );
            }
            let shown = self.visible_range(theme);
            let origin = Point::new(to_x(shown.start), inset);
            let bytes = self.byte_range(shown);
            ctx.draw_text(origin, &self.text[bytes], theme.text_size(), palette.text);
        }

        if self.base.has_focus() {
            let opacity = theme.cursor_opacity(self.now.saturating_sub(self.blink_epoch));
            if opacity > 0.0 {
                ctx.fill_rect(
                    Rect::new(to_x(self.cursor), inset, 1.0, theme.line_spacing()),
                    style.text.with_alpha(opacity),
                );
            }
        }
    }
}
