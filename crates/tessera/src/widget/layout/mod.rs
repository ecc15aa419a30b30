//! Layout policies for container widgets.
//!
//! A [`Layout`] derives child positions and the container's own size from
//! the children's current geometry. It never stores child state: every call
//! to [`Layout::arrange`] recomputes the whole placement from scratch, so the
//! result depends only on the children's sizes and not on the order in which
//! they changed.
//!
//! # Built-in Layouts
//!
//! - [`BoxLayout`] - children stacked along one axis
//! - [`FormLayout`] - label/field rows sharing a label column
//! - [`FreeLayout`] - caller-positioned children
//!
//! The tree calls `arrange` whenever a child is added, removed, resized or
//! moved, and again for the container's parent if the container's size
//! changed as a result. See [`WidgetTree`](super::WidgetTree).

mod box_layout;
mod form_layout;
mod free_layout;

pub use box_layout::{Alignment, BoxLayout, Orientation};
pub use form_layout::FormLayout;
pub use free_layout::FreeLayout;

use tessera_render::{Point, Rect, Size};
use tessera_style::Theme;

/// Spacing between a container's edges and its content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentMargins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl ContentMargins {
    /// Create new content margins.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same margin on all sides.
    pub const fn uniform(margin: f32) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Total horizontal margin (left + right).
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical margin (top + bottom).
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// The top-left content corner.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// The result of arranging a container's children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arrangement {
    /// One entry per child slot, in the same order as the input. Hidden
    /// children get `None` and keep their current position.
    pub positions: Vec<Option<Point>>,
    /// The container's resulting size.
    pub size: Size,
}

/// A policy that places a container's visible children.
pub trait Layout {
    /// Place children whose current geometry (relative to the container) is
    /// `children`. There is one slot per child; hidden children are `None`
    /// so that layouts which pair children by index keep their pairing.
    fn arrange(&self, children: &[Option<Rect>], theme: &Theme) -> Arrangement;
}
