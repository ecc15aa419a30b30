//! Box layout: children stacked along one axis.
//!
//! Children are placed edge-to-edge along the major axis with a fixed
//! spacing between neighbours. The container's size along the major axis is
//! the sum of the children's extents plus the spacing and margins; along the
//! cross axis it is the largest child plus margins.

use tessera_render::{Point, Rect, Size};
use tessera_style::Theme;

use super::{Arrangement, ContentMargins, Layout};

/// The direction children are stacked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Orientation {
    /// Extent of `size` along this axis.
    #[inline]
    pub fn major(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    #[inline]
    pub fn cross(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    fn point(self, major: f32, cross: f32) -> Point {
        match self {
            Self::Horizontal => Point::new(major, cross),
            Self::Vertical => Point::new(cross, major),
        }
    }

    fn size(self, major: f32, cross: f32) -> Size {
        match self {
            Self::Horizontal => Size::new(major, cross),
            Self::Vertical => Size::new(cross, major),
        }
    }
}

/// Cross-axis placement of children narrower than the widest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Align at the left/top.
    #[default]
    Start,
    Center,
    /// Align at the right/bottom.
    End,
}

/// Stacking layout.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxLayout {
    orientation: Orientation,
    /// Spacing between neighbours. `None` uses the theme margin.
    spacing: Option<f32>,
    margins: ContentMargins,
    alignment: Alignment,
}

impl BoxLayout {
    /// Create a box layout along `orientation`.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            spacing: None,
            margins: ContentMargins::default(),
            alignment: Alignment::default(),
        }
    }

    /// Create a horizontal box layout.
    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Create a vertical box layout.
    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The spacing in effect under `theme`.
    pub fn spacing(&self, theme: &Theme) -> f32 {
        self.spacing.unwrap_or_else(|| theme.margin())
    }

    /// Override the theme margin as the spacing between children.
    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = Some(spacing.max(0.0));
    }

    pub fn content_margins(&self) -> ContentMargins {
        self.margins
    }

    pub fn set_content_margins(&mut self, margins: ContentMargins) {
        self.margins = margins;
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }
}

impl Layout for BoxLayout {
    fn arrange(&self, children: &[Option<Rect>], theme: &Theme) -> Arrangement {
        let axis = self.orientation;
        let spacing = self.spacing(theme);
        let origin = self.margins.origin();
        let (major_start, cross_start) = match axis {
            Orientation::Horizontal => (origin.x, origin.y),
            Orientation::Vertical => (origin.y, origin.x),
        };

        let cross_extent = children
            .iter()
            .flatten()
            .map(|child| axis.cross(child.size))
            .fold(0.0_f32, f32::max);

        let mut cursor = major_start;
        let mut placed_any = false;
        let mut positions = Vec::with_capacity(children.len());
        for slot in children {
            let Some(child) = slot else {
                positions.push(None);
                continue;
            };
            if placed_any {
                cursor += spacing;
            }
            placed_any = true;
            let slack = cross_extent - axis.cross(child.size);
            let cross_offset = match self.alignment {
                Alignment::Start => 0.0,
                Alignment::Center => slack / 2.0,
                Alignment::End => slack,
            };
            positions.push(Some(axis.point(cursor, cross_start + cross_offset)));
            cursor += axis.major(child.size);
        }

        let (major_margins, cross_margins) = match axis {
            Orientation::Horizontal => (self.margins.horizontal(), self.margins.vertical()),
            Orientation::Vertical => (self.margins.vertical(), self.margins.horizontal()),
        };
        let content_major = cursor - major_start;
        Arrangement {
            positions,
            size: axis.size(content_major + major_margins, cross_extent + cross_margins),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(sizes: &[(f32, f32)]) -> Vec<Option<Rect>> {
        sizes
            .iter()
            .map(|&(w, h)| Some(Rect::new(0.0, 0.0, w, h)))
            .collect()
    }

    #[test]
    fn test_horizontal_stacking_with_theme_spacing() {
        let theme = Theme::default(); // margin 4
        let layout = BoxLayout::horizontal();
        let result = layout.arrange(&sized(&[(86.0, 19.0), (86.0, 19.0), (100.0, 25.0)]), &theme);

        assert_eq!(
            result.positions,
            vec![
                Some(Point::new(0.0, 0.0)),
                Some(Point::new(90.0, 0.0)),
                Some(Point::new(180.0, 0.0))
            ]
        );
        assert_eq!(result.size, Size::new(86.0 + 86.0 + 100.0 + 2.0 * 4.0, 25.0));
    }

    #[test]
    fn test_vertical_with_margins_and_center_alignment() {
        let theme = Theme::default();
        let mut layout = BoxLayout::vertical();
        layout.set_spacing(2.0);
        layout.set_content_margins(ContentMargins::uniform(5.0));
        layout.set_alignment(Alignment::Center);

        let result = layout.arrange(&sized(&[(10.0, 10.0), (30.0, 20.0)]), &theme);
        assert_eq!(result.positions[0], Some(Point::new(15.0, 5.0)));
        assert_eq!(result.positions[1], Some(Point::new(5.0, 17.0)));
        assert_eq!(result.size, Size::new(40.0, 42.0));
    }

    #[test]
    fn test_empty_box_is_just_margins() {
        let theme = Theme::default();
        let mut layout = BoxLayout::horizontal();
        assert_eq!(layout.arrange(&[], &theme).size, Size::ZERO);

        layout.set_content_margins(ContentMargins::uniform(3.0));
        assert_eq!(layout.arrange(&[], &theme).size, Size::new(6.0, 6.0));
    }

    #[test]
    fn test_existing_positions_are_ignored() {
        let theme = Theme::default();
        let layout = BoxLayout::horizontal();
        let children = [Some(Rect::new(500.0, 500.0, 10.0, 10.0))];
        assert_eq!(
            layout.arrange(&children, &theme).positions,
            vec![Some(Point::ZERO)]
        );
    }

    #[test]
    fn test_hidden_slot_takes_no_space() {
        let theme = Theme::default();
        let layout = BoxLayout::horizontal();
        let children = [
            Some(Rect::new(0.0, 0.0, 20.0, 10.0)),
            None,
            Some(Rect::new(0.0, 0.0, 30.0, 10.0)),
        ];
        let result = layout.arrange(&children, &theme);
        assert_eq!(
            result.positions,
            vec![Some(Point::ZERO), None, Some(Point::new(24.0, 0.0))]
        );
        assert_eq!(result.size, Size::new(54.0, 10.0));
    }
}
