//! Container widgets.
//!
//! Containers own no drawing of their own beyond an optional frame; they
//! exist to give their children a [`Layout`]. Their size is always derived
//! from the children by the tree.

use tessera_core::{CoreError, CoreResult, WidgetId};
use tessera_render::RenderContext;
use tessera_style::BoxKind;

use crate::widget::layout::{
    Alignment, BoxLayout, ContentMargins, FormLayout, FreeLayout, Layout, Orientation,
};
use crate::widget::widgets::Label;
use crate::widget::{Widget, WidgetBase, WidgetTree};

fn draw_frame(base: &WidgetBase, ctx: &mut RenderContext<'_>) {
    if let Some(theme) = base.theme() {
        let palette = theme.palette(BoxKind::Click, base.state());
        ctx.stroke_rect(base.rect(), palette.border, theme.border_size());
    }
}

/// A container stacking its children along one axis.
///
/// [`horizontal`](Self::horizontal) builds a row (shown as `HBox` in tree
/// dumps) and [`vertical`](Self::vertical) a column (`VBox`).
pub struct StackBox {
    base: WidgetBase,
    layout: BoxLayout,
    framed: bool,
}

impl StackBox {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            base: WidgetBase::new(),
            layout: BoxLayout::new(orientation),
            framed: false,
        }
    }

    /// A row: children left to right.
    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// A column: children top to bottom.
    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Gap between children. Defaults to the theme margin.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.layout.set_spacing(spacing);
        self
    }

    pub fn with_margins(mut self, margins: ContentMargins) -> Self {
        self.layout.set_content_margins(margins);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.layout.set_alignment(alignment);
        self
    }

    /// Outline the container with the theme border.
    pub fn with_frame(mut self) -> Self {
        self.framed = true;
        self
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.layout.orientation()
    }

    pub fn box_layout(&self) -> &BoxLayout {
        &self.layout
    }

    /// Change the layout settings. Inside a tree, do this through
    /// [`WidgetTree::with_widget_mut`] so the container is re-arranged.
    pub fn box_layout_mut(&mut self) -> &mut BoxLayout {
        &mut self.layout
    }
}

impl Widget for StackBox {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn layout(&self) -> Option<&dyn Layout> {
        Some(&self.layout)
    }

    fn type_name(&self) -> &'static str {
        match self.layout.orientation() {
            Orientation::Horizontal => "HBox",
            Orientation::Vertical => "VBox",
        }
    }

    fn draw(&self, ctx: &mut RenderContext<'_>) {
        if self.framed {
            draw_frame(&self.base, ctx);
        }
    }
}

/// A container of label/field rows.
///
/// Children are taken in pairs, so rows should be added with
/// [`Form::add_row`].
pub struct Form {
    base: WidgetBase,
    layout: FormLayout,
}

impl Form {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            layout: FormLayout::new(),
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.layout.set_spacing(spacing);
        self
    }

    pub fn with_margins(mut self, margins: ContentMargins) -> Self {
        self.layout.set_content_margins(margins);
        self
    }

    pub fn form_layout(&self) -> &FormLayout {
        &self.layout
    }

    pub fn form_layout_mut(&mut self) -> &mut FormLayout {
        &mut self.layout
    }

    /// Append a row to the form `form`: a [`Label`] showing `label`, then
    /// `widget`.
    ///
    /// The field is registered under `name`, or under the label text if
    /// `name` is empty. Returns the field's id.
    pub fn add_row(
        tree: &mut WidgetTree,
        form: WidgetId,
        label: &str,
        widget: impl Widget,
        name: &str,
    ) -> CoreResult<WidgetId> {
        match tree.get(form) {
            None => return Err(CoreError::InvalidWidget(form)),
            Some(existing) if existing.downcast_ref::<Form>().is_none() => {
                return Err(CoreError::TypeMismatch {
                    id: form,
                    expected: std::any::type_name::<Form>(),
                });
            }
            Some(_) => {}
        }
        tree.add(form, Label::new(label))?;
        let name = if name.is_empty() { label } else { name };
        tree.add_named(form, widget, name, false)
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Form {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn layout(&self) -> Option<&dyn Layout> {
        Some(&self.layout)
    }

    fn draw(&self, _ctx: &mut RenderContext<'_>) {}
}

/// A container whose children keep the positions they are given.
pub struct Panel {
    base: WidgetBase,
    layout: FreeLayout,
    framed: bool,
}

impl Panel {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            layout: FreeLayout,
            framed: false,
        }
    }

    /// Outline the panel with the theme border.
    pub fn with_frame(mut self) -> Self {
        self.framed = true;
        self
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Panel {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn layout(&self) -> Option<&dyn Layout> {
        Some(&self.layout)
    }

    fn draw(&self, ctx: &mut RenderContext<'_>) {
        if self.framed {
            draw_frame(&self.base, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::widgets::Button;
    use tessera_render::{Point, Size};
    use tessera_style::Theme;

    fn tree() -> WidgetTree {
        WidgetTree::new(StackBox::vertical(), Theme::default().shared())
    }

    #[test]
    fn test_stack_box_type_names() {
        assert_eq!(StackBox::horizontal().type_name(), "HBox");
        assert_eq!(StackBox::vertical().type_name(), "VBox");
        assert_eq!(Form::new().type_name(), "Form");
        assert_eq!(Panel::new().type_name(), "Panel");
    }

    #[test]
    fn test_add_row_registers_field() {
        let mut tree = tree();
        let form = tree.add(tree.root(), Form::new()).unwrap();

        let named = Form::add_row(&mut tree, form, "Name", Button::new("x"), "name_field").unwrap();
        let unnamed = Form::add_row(&mut tree, form, "Size", Button::new("y"), "").unwrap();

        assert_eq!(tree.recall("name_field"), Some(named));
        assert_eq!(tree.recall("Size"), Some(unnamed));
        assert_eq!(tree.children(form).len(), 4);
        assert_eq!(tree.get_as::<Label>(tree.children(form)[2]).unwrap().text(), "Size");

        // Labels share a column; fields line up after it.
        let field_x = tree.get(named).unwrap().pos().x;
        assert_eq!(tree.get(unnamed).unwrap().pos().x, field_x);
    }

    #[test]
    fn test_add_row_needs_a_form() {
        let mut tree = tree();
        let root = tree.root();
        assert!(matches!(
            Form::add_row(&mut tree, root, "A", Button::new("a"), ""),
            Err(CoreError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_panel_keeps_positions() {
        let mut tree = tree();
        let panel = tree.add(tree.root(), Panel::new()).unwrap();
        let button = tree.add(panel, Button::new("OK")).unwrap();
        tree.set_position(button, Point::new(30.0, 40.0)).unwrap();

        assert_eq!(tree.get(button).unwrap().pos(), Point::new(30.0, 40.0));
        assert_eq!(tree.get(panel).unwrap().size(), Size::new(116.0, 59.0));
    }

    #[test]
    fn test_spacing_change_rearranges() {
        let mut tree = tree();
        let row = tree.add(tree.root(), StackBox::horizontal()).unwrap();
        tree.add(row, Button::new("A")).unwrap();
        let b = tree.add(row, Button::new("B")).unwrap();
        assert_eq!(tree.get(b).unwrap().pos().x, 90.0);

        tree.with_widget_mut::<StackBox, _>(row, |row| row.box_layout_mut().set_spacing(10.0))
            .unwrap();
        assert_eq!(tree.get(b).unwrap().pos().x, 96.0);
        assert_eq!(tree.get(row).unwrap().size().width, 182.0);
    }
}
