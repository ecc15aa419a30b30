//! Image display.

use tessera_render::{Color, Image, ImageScaleMode, RenderContext, Size};
use tessera_style::Theme;

use crate::widget::{Widget, WidgetBase};

/// A non-interactive widget showing a host image.
///
/// The widget takes the image's pixel size unless a fixed size is set; the
/// image is then placed into that size according to the scale mode.
pub struct ImageWidget {
    base: WidgetBase,
    image: Image,
    scale_mode: ImageScaleMode,
    tint: Color,
    fixed_size: Option<Size>,
}

impl ImageWidget {
    pub fn new(image: Image) -> Self {
        let mut widget = Self {
            base: WidgetBase::new(),
            image,
            scale_mode: ImageScaleMode::Stretch,
            tint: Color::WHITE,
            fixed_size: None,
        };
        widget.fit();
        widget
    }

    pub fn with_scale_mode(mut self, mode: ImageScaleMode) -> Self {
        self.scale_mode = mode;
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    pub fn with_fixed_size(mut self, width: f32, height: f32) -> Self {
        self.set_fixed_size(Some(Size::new(width, height)));
        self
    }

    #[inline]
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Show another image. Without a fixed size the widget takes the new
    /// image's size.
    pub fn set_image(&mut self, image: Image) {
        self.image = image;
        self.fit();
    }

    pub fn scale_mode(&self) -> ImageScaleMode {
        self.scale_mode
    }

    pub fn set_scale_mode(&mut self, mode: ImageScaleMode) {
        self.scale_mode = mode;
    }

    pub fn tint(&self) -> Color {
        self.tint
    }

    pub fn set_tint(&mut self, tint: Color) {
        self.tint = tint;
    }

    /// Override the image size. `None` goes back to the image's own size.
    pub fn set_fixed_size(&mut self, size: Option<Size>) {
        self.fixed_size = size;
        self.fit();
    }

    fn fit(&mut self) {
        let size = self.fixed_size.unwrap_or_else(|| self.image.size());
        self.base.set_size(size);
    }
}

impl Widget for ImageWidget {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn type_name(&self) -> &'static str {
        "Image"
    }

    fn on_theme_changed(&mut self, _theme: &Theme) {
        self.fit();
    }

    fn draw(&self, ctx: &mut RenderContext<'_>) {
        ctx.draw_image(&self.image, self.base.rect(), self.scale_mode, self.tint);
    }
}
