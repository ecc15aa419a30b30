//! Form layout: label/field rows.
//!
//! Children are consumed in pairs. The first of each pair is the label, the
//! second the field. All labels share one column whose width is the widest
//! label; fields start one spacing to the right of that column. A trailing
//! unpaired child occupies a row of its own, starting at the label column.
//!
//! Pairing is by slot, so hiding one child never shifts the others into the
//! wrong column. A row with both children hidden takes no space.

use tessera_render::{Point, Rect, Size};
use tessera_style::Theme;

use super::{Arrangement, ContentMargins, Layout};

/// Two-column layout for labelled fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormLayout {
    /// Gap between the label column and the fields, and between rows.
    /// `None` uses the theme margin.
    spacing: Option<f32>,
    margins: ContentMargins,
}

impl FormLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spacing(&self, theme: &Theme) -> f32 {
        self.spacing.unwrap_or_else(|| theme.margin())
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = Some(spacing.max(0.0));
    }

    pub fn content_margins(&self) -> ContentMargins {
        self.margins
    }

    pub fn set_content_margins(&mut self, margins: ContentMargins) {
        self.margins = margins;
    }

    /// Width of the label column for `children`: the widest visible label
    /// of a complete row.
    pub fn label_column_width(children: &[Option<Rect>]) -> f32 {
        children
            .chunks_exact(2)
            .filter_map(|row| row[0])
            .map(|label| label.size.width)
            .fold(0.0_f32, f32::max)
    }
}

impl Layout for FormLayout {
    fn arrange(&self, children: &[Option<Rect>], theme: &Theme) -> Arrangement {
        let spacing = self.spacing(theme);
        let left = self.margins.left;
        let column = Self::label_column_width(children);
        let field_x = left + column + spacing;

        let mut positions = Vec::with_capacity(children.len());
        let mut y = self.margins.top;
        let mut content_width = 0.0_f32;
        let mut rows = 0;

        for row in children.chunks(2) {
            if row.iter().all(Option::is_none) {
                positions.extend(row.iter().map(|_| None));
                continue;
            }
            if rows > 0 {
                y += spacing;
            }
            rows += 1;
            match *row {
                [label, field] => {
                    let height = [label, field]
                        .into_iter()
                        .flatten()
                        .map(|child| child.size.height)
                        .fold(0.0_f32, f32::max);
                    positions.push(label.map(|label| {
                        Point::new(left, y + (height - label.size.height) / 2.0)
                    }));
                    positions.push(field.map(|_| Point::new(field_x, y)));
                    let row_width = match field {
                        Some(field) => column + spacing + field.size.width,
                        None => column,
                    };
                    content_width = content_width.max(row_width);
                    y += height;
                }
                [single] => {
                    if let Some(single) = single {
                        positions.push(Some(Point::new(left, y)));
                        content_width = content_width.max(single.size.width);
                        y += single.size.height;
                    }
                }
                _ => {}
            }
        }

        let height = if rows == 0 {
            self.margins.vertical()
        } else {
            y + self.margins.bottom
        };

        Arrangement {
            positions,
            size: Size::new(content_width + self.margins.horizontal(), height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(w: f32, h: f32) -> Option<Rect> {
        Some(Rect::new(0.0, 0.0, w, h))
    }

    #[test]
    fn test_labels_share_widest_column() {
        let theme = Theme::default();
        let layout = FormLayout::new();
        let children = [
            rect(30.0, 15.0),
            rect(86.0, 19.0),
            rect(50.0, 15.0),
            rect(100.0, 19.0),
        ];
        let result = layout.arrange(&children, &theme);

        assert_eq!(FormLayout::label_column_width(&children), 50.0);
        // Fields line up at column + spacing.
        assert_eq!(result.positions[1], Some(Point::new(54.0, 0.0)));
        assert_eq!(result.positions[3], Some(Point::new(54.0, 23.0)));
        // Labels are centred in their row.
        assert_eq!(result.positions[0], Some(Point::new(0.0, 2.0)));
        assert_eq!(result.positions[2], Some(Point::new(0.0, 25.0)));
        assert_eq!(result.size, Size::new(154.0, 42.0));
    }

    #[test]
    fn test_trailing_child_spans_row() {
        let theme = Theme::default();
        let mut layout = FormLayout::new();
        layout.set_spacing(2.0);
        let children = [rect(20.0, 10.0), rect(40.0, 10.0), rect(90.0, 10.0)];
        let result = layout.arrange(&children, &theme);

        assert_eq!(result.positions[2], Some(Point::new(0.0, 12.0)));
        assert_eq!(result.size, Size::new(90.0, 22.0));
    }

    #[test]
    fn test_hidden_field_keeps_later_rows_paired() {
        let theme = Theme::default();
        let layout = FormLayout::new();
        let children = [rect(10.0, 15.0), None, rect(60.0, 15.0), rect(86.0, 19.0)];
        let result = layout.arrange(&children, &theme);

        assert_eq!(result.positions[0], Some(Point::new(0.0, 0.0)));
        assert_eq!(result.positions[1], None);
        assert_eq!(result.positions[2], Some(Point::new(0.0, 21.0)));
        assert_eq!(result.positions[3], Some(Point::new(64.0, 19.0)));
        assert_eq!(result.size, Size::new(150.0, 38.0));
    }

    #[test]
    fn test_fully_hidden_row_takes_no_space() {
        let theme = Theme::default();
        let layout = FormLayout::new();
        let children = [None, None, rect(20.0, 10.0), rect(40.0, 10.0)];
        let result = layout.arrange(&children, &theme);

        assert_eq!(result.positions[..2], [None, None]);
        assert_eq!(result.positions[2], Some(Point::new(0.0, 0.0)));
        assert_eq!(result.positions[3], Some(Point::new(24.0, 0.0)));
        assert_eq!(result.size, Size::new(64.0, 10.0));
    }

    #[test]
    fn test_empty_form() {
        let theme = Theme::default();
        let mut layout = FormLayout::new();
        layout.set_content_margins(ContentMargins::uniform(2.0));
        let result = layout.arrange(&[], &theme);
        assert!(result.positions.is_empty());
        assert_eq!(result.size, Size::new(4.0, 4.0));
    }
}
