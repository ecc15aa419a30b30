//! Horizontal or vertical value slider.

use tessera_core::ActivationState;
use tessera_render::{Point, Rect, RenderContext, Size};
use tessera_style::{BoxKind, Theme};

use crate::widget::layout::Orientation;
use crate::widget::{EventContext, Key, KeyEvent, Widget, WidgetBase};

/// The closed value interval of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min.min(self.max), self.max.max(self.min))
    }
}

/// Slider construction parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    /// Extent along the orientation, in pixels.
    pub length: f32,
    pub range: SliderRange,
    /// Value granularity. Zero means continuous.
    pub step: f32,
    pub orientation: Orientation,
    /// By default values grow rightwards and upwards; this flips that.
    pub invert: bool,
    /// React to all four arrow keys, not only those along the orientation.
    pub use_all_arrow_keys: bool,
    /// Clicking the thumb re-centres it on the pointer.
    pub jumpy_thumb_click: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            length: 200.0,
            range: SliderRange::new(0.0, 100.0),
            step: 1.0,
            orientation: Orientation::Horizontal,
            invert: false,
            use_all_arrow_keys: true,
            jumpy_thumb_click: false,
        }
    }
}

/// A draggable thumb on a track, selecting a value in a range.
///
/// The value is always inside the range and on the step grid. Every change,
/// whether from input or from [`set_value`](Self::set_value), fires the
/// update callback.
pub struct Slider {
    base: WidgetBase,
    config: SliderConfig,
    value: f32,
    /// While dragging: where along the thumb it was grabbed.
    grab: Option<f32>,
}

impl Slider {
    pub fn new(config: SliderConfig) -> Self {
        let value = config.range.min;
        Self {
            base: WidgetBase::interactive(),
            config,
            value,
            grab: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value, clamped and snapped. Returns true if it changed.
    pub fn set_value(&mut self, value: f32) -> bool {
        let value = self.snap(value);
        if value == self.value {
            return false;
        }
        self.value = value;
        self.base.mark_updated();
        true
    }

    /// Move the value by `delta`.
    pub fn move_by(&mut self, delta: f32) -> bool {
        self.set_value(self.value + delta)
    }

    /// One step up.
    pub fn increment(&mut self) -> bool {
        self.move_by(self.unit())
    }

    /// One step down.
    pub fn decrement(&mut self) -> bool {
        self.move_by(-self.unit())
    }

    #[inline]
    pub fn range(&self) -> SliderRange {
        self.config.range
    }

    /// Change the range. The current value is pulled into it.
    pub fn set_range(&mut self, min: f32, max: f32) {
        self.config.range = SliderRange::new(min, max);
        self.set_value(self.value);
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.config.step
    }

    pub fn set_step(&mut self, step: f32) {
        self.config.step = step.max(0.0);
        self.set_value(self.value);
    }

    /// Number of steps between the ends of the range.
    pub fn intervals(&self) -> f32 {
        if self.config.step > 0.0 {
            self.config.range.size() / self.config.step
        } else {
            0.0
        }
    }

    fn snap(&self, value: f32) -> f32 {
        let range = self.config.range;
        let value = range.clamp(value);
        if self.config.step <= 0.0 {
            return value;
        }
        let steps = ((value - range.min) / self.config.step).round();
        range.clamp(range.min + steps * self.config.step)
    }

    /// Increment for keys and the wheel: the step, or a hundredth of the
    /// range when continuous.
    fn unit(&self) -> f32 {
        if self.config.step > 0.0 {
            self.config.step
        } else {
            self.config.range.size().abs() / 100.0
        }
    }

    fn page(&self) -> f32 {
        (self.config.range.size().abs() / 10.0).max(self.unit())
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    fn major(&self, point: Point) -> f32 {
        match self.config.orientation {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    fn thumb_length(theme: &Theme) -> f32 {
        theme.box_height() / 2.0
    }

    fn track_length(&self, theme: &Theme) -> f32 {
        (self.config.length - Self::thumb_length(theme)).max(0.0)
    }

    /// Position of `value` along the track, 0 at the left or top end.
    fn fraction_along(&self, value: f32) -> f32 {
        let range = self.config.range;
        let fraction = if range.size() == 0.0 {
            0.0
        } else {
            (value - range.min) / range.size()
        };
        let reversed = match self.config.orientation {
            Orientation::Horizontal => self.config.invert,
            Orientation::Vertical => !self.config.invert,
        };
        if reversed { 1.0 - fraction } else { fraction }
    }

    /// Where the thumb starts, along the major axis.
    fn thumb_offset(&self, theme: &Theme) -> f32 {
        self.fraction_along(self.value) * self.track_length(theme)
    }

    /// The value whose thumb would start at `offset`.
    fn value_at(&self, theme: &Theme, offset: f32) -> f32 {
        let track = self.track_length(theme);
        let along = if track > 0.0 {
            (offset / track).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let reversed = match self.config.orientation {
            Orientation::Horizontal => self.config.invert,
            Orientation::Vertical => !self.config.invert,
        };
        let fraction = if reversed { 1.0 - along } else { along };
        self.config.range.min + fraction * self.config.range.size()
    }

    fn thumb_rect(&self, theme: &Theme) -> Rect {
        let offset = self.thumb_offset(theme);
        let length = Self::thumb_length(theme);
        let thickness = theme.box_height();
        match self.config.orientation {
            Orientation::Horizontal => Rect::new(offset, 0.0, length, thickness),
            Orientation::Vertical => Rect::new(0.0, offset, thickness, length),
        }
    }

    fn track_rect(&self, theme: &Theme) -> Rect {
        let thickness = theme.box_height() / 3.0;
        let rect = self.base.rect();
        match self.config.orientation {
            Orientation::Horizontal => Rect::new(
                0.0,
                (rect.height() - thickness) / 2.0,
                rect.width(),
                thickness,
            ),
            Orientation::Vertical => Rect::new(
                (rect.width() - thickness) / 2.0,
                0.0,
                thickness,
                rect.height(),
            ),
        }
    }

    /// The part of the track between the low end and the thumb.
    fn fill_rect(&self, theme: &Theme) -> Rect {
        let track = self.track_rect(theme);
        let centre = self.thumb_offset(theme) + Self::thumb_length(theme) / 2.0;
        let low_end_first = self.fraction_along(self.config.range.min) == 0.0;
        match (self.config.orientation, low_end_first) {
            (Orientation::Horizontal, true) => {
                Rect::new(track.left(), track.top(), centre, track.height())
            }
            (Orientation::Horizontal, false) => Rect::new(
                centre,
                track.top(),
                track.width() - centre,
                track.height(),
            ),
            (Orientation::Vertical, true) => {
                Rect::new(track.left(), track.top(), track.width(), centre)
            }
            (Orientation::Vertical, false) => Rect::new(
                track.left(),
                centre,
                track.width(),
                track.height() - centre,
            ),
        }
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(SliderConfig::default())
    }
}

impl Widget for Slider {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn on_theme_changed(&mut self, theme: &Theme) {
        let size = match self.config.orientation {
            Orientation::Horizontal => Size::new(self.config.length, theme.box_height()),
            Orientation::Vertical => Size::new(theme.box_height(), self.config.length),
        };
        self.base.set_size(size);
    }

    fn on_activation_changed(
        &mut self,
        _ctx: &mut EventContext<'_>,
        _old: ActivationState,
        new: ActivationState,
    ) {
        if new != ActivationState::Pressed {
            self.grab = None;
        }
    }

    fn on_mouse_pressed(&mut self, _ctx: &mut EventContext<'_>, pos: Point) {
        let Some(theme) = self.base.theme() else {
            return;
        };
        let along = self.major(pos);
        let half = Self::thumb_length(theme) / 2.0;
        if !self.config.jumpy_thumb_click && self.thumb_rect(theme).contains(pos) {
            self.grab = Some(along - self.thumb_offset(theme));
            return;
        }
        let value = self.value_at(theme, along - half);
        self.grab = Some(half);
        self.set_value(value);
    }

    fn on_mouse_moved(&mut self, ctx: &mut EventContext<'_>, pos: Point) {
        if !ctx.has_capture() {
            return;
        }
        let Some(grab) = self.grab else {
            return;
        };
        let Some(value) = self
            .base
            .theme()
            .map(|theme| self.value_at(theme, self.major(pos) - grab))
        else {
            return;
        };
        self.set_value(value);
    }

    fn on_mouse_released(&mut self, _ctx: &mut EventContext<'_>, _pos: Point) {
        self.grab = None;
    }

    fn on_mouse_wheel_moved(&mut self, _ctx: &mut EventContext<'_>, delta: i32) {
        self.move_by(delta as f32 * self.unit());
    }

    fn on_key_pressed(&mut self, _ctx: &mut EventContext<'_>, key: &KeyEvent) {
        let horizontal = self.config.orientation == Orientation::Horizontal;
        let all = self.config.use_all_arrow_keys;
        let up = match key.key {
            Key::ArrowRight if horizontal || all => Some(true),
            Key::ArrowLeft if horizontal || all => Some(false),
            Key::ArrowUp if !horizontal || all => Some(true),
            Key::ArrowDown if !horizontal || all => Some(false),
            _ => None,
        };
        if let Some(up) = up {
            let unit = self.unit();
            let delta = if up != self.config.invert { unit } else { -unit };
            self.move_by(delta);
            return;
        }
        match key.key {
            Key::Home => {
                self.set_value(self.config.range.min);
            }
            Key::End => {
                self.set_value(self.config.range.max);
            }
            Key::PageUp => {
                self.move_by(self.page());
            }
            Key::PageDown => {
                self.move_by(-self.page());
            }
            _ => {}
        }
    }

    fn draw(&self, ctx: &mut RenderContext<'_>) {
        let Some(theme) = self.base.theme() else {
            return;
        };
        let state = self.base.state();
        let track = theme.palette(BoxKind::Input, state);
        let track_rect = self.track_rect(theme);
        ctx.fill_rect(track_rect, track.fill);
        ctx.fill_rect(self.fill_rect(theme), theme.style(BoxKind::Input).selection);
        ctx.stroke_rect(track_rect, track.border, theme.border_size());

        let thumb = theme.palette(BoxKind::Click, state);
        let thumb_rect = self.thumb_rect(theme);
        ctx.fill_rect(thumb_rect, thumb.fill);
        ctx.stroke_rect(thumb_rect, thumb.border, theme.border_size());
    }
}
