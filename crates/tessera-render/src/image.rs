//! Image handles and placement.
//!
//! Tessera never decodes or stores pixels. The host loads its images and
//! hands out [`ImageId`]s; widgets refer to them through an [`Image`], which
//! pairs the id with the image's pixel size so layout can work without the
//! pixels. A [`RenderSink`](crate::RenderSink) receives the id together with
//! the source and destination rectangles and does the actual blit.

use crate::context::RenderContext;
use crate::types::{Color, Point, Rect, Size};

/// An opaque reference to a host-owned image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(u64);

impl ImageId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

/// A host image: its id and its size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Image {
    id: ImageId,
    size: Size,
}

impl Image {
    pub const fn new(id: ImageId, size: Size) -> Self {
        Self { id, size }
    }

    #[inline]
    pub fn id(&self) -> ImageId {
        self.id
    }

    /// Size in pixels.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The whole image, in its own pixel coordinates.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size)
    }

    /// Whether there is anything to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }
}

/// How an image is placed into a destination rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageScaleMode {
    /// Natural size at the top-left corner, cropped to the destination.
    TopLeft,

    /// Natural size, centered and cropped to the destination.
    Center,

    /// Fill the destination, ignoring the aspect ratio.
    #[default]
    Stretch,

    /// As large as fits while keeping the aspect ratio, centered.
    Fit,

    /// Repeated at natural size from the top-left corner; the last row
    /// and column are cropped.
    Tile,
}

impl ImageScaleMode {
    /// The `(source, destination)` pairs that draw an image of
    /// `image_size` into `dest`. Source rectangles are in image pixels.
    pub fn placements(self, image_size: Size, dest: Rect) -> Vec<(Rect, Rect)> {
        let (iw, ih) = (image_size.width, image_size.height);
        if iw <= 0.0 || ih <= 0.0 || dest.width() <= 0.0 || dest.height() <= 0.0 {
            return Vec::new();
        }
        let full = Rect::new(0.0, 0.0, iw, ih);

        match self {
            Self::Stretch => vec![(full, dest)],
            Self::Fit => {
                let scale = (dest.width() / iw).min(dest.height() / ih);
                let size = Size::new(iw * scale, ih * scale);
                let origin = Point::new(
                    dest.left() + (dest.width() - size.width) / 2.0,
                    dest.top() + (dest.height() - size.height) / 2.0,
                );
                vec![(full, Rect::from_origin_size(origin, size))]
            }
            Self::TopLeft => {
                let w = iw.min(dest.width());
                let h = ih.min(dest.height());
                vec![(
                    Rect::new(0.0, 0.0, w, h),
                    Rect::from_origin_size(dest.origin, Size::new(w, h)),
                )]
            }
            Self::Center => {
                let w = iw.min(dest.width());
                let h = ih.min(dest.height());
                let src = Rect::new((iw - w) / 2.0, (ih - h) / 2.0, w, h);
                let at = Rect::new(
                    dest.left() + (dest.width() - w) / 2.0,
                    dest.top() + (dest.height() - h) / 2.0,
                    w,
                    h,
                );
                vec![(src, at)]
            }
            Self::Tile => {
                let mut tiles = Vec::new();
                let mut y = dest.top();
                while y < dest.bottom() {
                    let h = ih.min(dest.bottom() - y);
                    let mut x = dest.left();
                    while x < dest.right() {
                        let w = iw.min(dest.right() - x);
                        tiles.push((Rect::new(0.0, 0.0, w, h), Rect::new(x, y, w, h)));
                        x += iw;
                    }
                    y += ih;
                }
                tiles
            }
        }
    }
}

/// An image drawn behind the whole GUI, over the background color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wallpaper {
    pub image: Image,
    pub mode: ImageScaleMode,
    /// Multiplied with the image; the alpha fades it into the background.
    pub tint: Color,
}

impl Wallpaper {
    /// A centered, untinted wallpaper.
    pub fn new(image: Image) -> Self {
        Self {
            image,
            mode: ImageScaleMode::Center,
            tint: Color::WHITE,
        }
    }

    pub fn with_mode(mut self, mode: ImageScaleMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    /// Draw into `area`, given in local coordinates.
    pub fn draw(&self, ctx: &mut RenderContext<'_>, area: Rect) {
        ctx.draw_image(&self.image, area, self.mode, self.tint);
    }
}
