//! The widget tree.
//!
//! [`WidgetTree`] owns every widget of a GUI in a slotmap arena. Parent and
//! child links are plain [`WidgetId`]s, so a stale id can never reach a
//! widget that replaced a removed one.
//!
//! # Geometry propagation
//!
//! Every mutation that goes through the tree ends with a geometry check. If
//! the widget's position or size changed, its parent container is re-laid
//! out; if that changes the container's own size, the walk continues with
//! the grandparent, and so on up to the root. A level whose size does not
//! change stops the walk. [`MAX_PROPAGATION_DEPTH`] bounds the walk as a
//! last resort.
//!
//! # Update callbacks
//!
//! A widget reports a value change with
//! [`WidgetBase::mark_updated`](super::WidgetBase::mark_updated). Once the
//! hook or mutation that set the flag returns, the tree runs the widget's
//! update callback with full access to the tree.

use std::fmt::Write as _;
use std::time::Duration;

use slotmap::SlotMap;
use tessera_core::logging::{span_names, targets};
use tessera_core::{ActivationState, CoreError, CoreResult, TreeFormatOptions, WidgetId};
use tessera_render::{Point, Rect, RenderContext, Size};
use tessera_style::{SharedTheme, Theme};

use super::activation;
use super::context::{Environment, EventContext};
use super::registry::WidgetRegistry;
use super::traits::Widget;

/// How many container levels a single size change may climb.
pub const MAX_PROPAGATION_DEPTH: usize = 64;

/// Called after a widget reported a value change.
pub type UpdateCallback = Box<dyn FnMut(&mut WidgetTree, WidgetId)>;

struct Node {
    widget: Box<dyn Widget>,
    parent: Option<WidgetId>,
    children: Vec<WidgetId>,
    callback: Option<UpdateCallback>,
}

impl Node {
    fn new(widget: Box<dyn Widget>, parent: Option<WidgetId>) -> Self {
        Self {
            widget,
            parent,
            children: Vec::new(),
            callback: None,
        }
    }
}

/// An arena of widgets with a single root.
pub struct WidgetTree {
    nodes: SlotMap<WidgetId, Node>,
    root: WidgetId,
    registry: WidgetRegistry,
    theme: SharedTheme,
    env: Environment,
}

impl WidgetTree {
    /// Create a tree holding only `root`.
    pub fn new(root: impl Widget, theme: SharedTheme) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new(Box::new(root), None));
        let mut tree = Self {
            nodes,
            root,
            registry: WidgetRegistry::new(),
            theme,
            env: Environment::default(),
        };
        tree.attach_theme(root);
        tree.arrange(root);
        tree
    }

    // =========================================================================
    // Structure
    // =========================================================================

    #[inline]
    pub fn root(&self) -> WidgetId {
        self.root
    }

    /// Number of widgets, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` names a live widget.
    #[inline]
    pub fn contains_widget(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: WidgetId) -> Option<&(dyn Widget + 'static)> {
        self.nodes.get(id).map(|node| node.widget.as_ref())
    }

    /// The widget as its concrete type.
    pub fn get_as<W: Widget>(&self, id: WidgetId) -> Option<&W> {
        self.get(id)?.downcast_ref::<W>()
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.nodes.get(id)?.parent
    }

    /// The children of `id` in insertion order.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Add `widget` as the last child of `parent`.
    ///
    /// The widget is themed, sized and placed before this returns. Fails if
    /// `parent` does not exist or has no layout.
    pub fn add(&mut self, parent: WidgetId, widget: impl Widget) -> CoreResult<WidgetId> {
        let node = self
            .nodes
            .get(parent)
            .ok_or(CoreError::InvalidWidget(parent))?;
        if node.widget.layout().is_none() {
            return Err(CoreError::NotAContainer(parent));
        }
        Ok(self.attach(parent, Box::new(widget)))
    }

    /// Add `widget` and register it under `name`.
    ///
    /// An empty name skips registration. A taken name is refused with a
    /// warning unless `override_existing` is set; the widget is added either
    /// way.
    pub fn add_named(
        &mut self,
        parent: WidgetId,
        widget: impl Widget,
        name: &str,
        override_existing: bool,
    ) -> CoreResult<WidgetId> {
        let id = self.add(parent, widget)?;
        if !name.is_empty() {
            self.registry.remember(id, name, override_existing);
        }
        Ok(id)
    }

    /// Attach to a parent already known to be a live container.
    pub(crate) fn attach(&mut self, parent: WidgetId, widget: Box<dyn Widget>) -> WidgetId {
        let type_name = widget.type_name();
        let id = self.nodes.insert(Node::new(widget, Some(parent)));
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(id);
        }
        tracing::debug!(
            target: targets::TREE,
            id = id.as_raw(),
            parent = parent.as_raw(),
            type_name,
            "widget added"
        );
        self.attach_theme(id);
        self.arrange(id);
        self.relayout(parent);
        id
    }

    /// Remove `id` and its whole subtree.
    ///
    /// Registry entries of the removed widgets are purged and the former
    /// parent is re-laid out. Returns the removed ids, `id` first.
    pub fn remove(&mut self, id: WidgetId) -> CoreResult<Vec<WidgetId>> {
        if id == self.root {
            return Err(CoreError::RootWidget);
        }
        let parent = self
            .nodes
            .get(id)
            .ok_or(CoreError::InvalidWidget(id))?
            .parent;

        let removed = self.depth_first(id);
        if let Some(node) = parent.and_then(|p| self.nodes.get_mut(p)) {
            node.children.retain(|&child| child != id);
        }
        for &gone in &removed {
            self.nodes.remove(gone);
            self.registry.forget(gone);
        }
        tracing::debug!(
            target: targets::TREE,
            id = id.as_raw(),
            count = removed.len(),
            "widget subtree removed"
        );

        if let Some(parent) = parent {
            self.relayout(parent);
        }
        Ok(removed)
    }

    /// `from` and all its descendants, parents before children, siblings in
    /// insertion order.
    pub fn depth_first(&self, from: WidgetId) -> Vec<WidgetId> {
        let mut order = Vec::new();
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            order.push(id);
            stack.extend(node.children.iter().rev());
        }
        order
    }

    /// Whether `id` and all of its ancestors are visible.
    pub fn is_shown(&self, id: WidgetId) -> bool {
        let mut current = Some(id);
        while let Some(id) = current {
            let Some(node) = self.nodes.get(id) else {
                return false;
            };
            if !node.widget.is_visible() {
                return false;
            }
            current = node.parent;
        }
        true
    }

    /// Like [`depth_first`](Self::depth_first) from the root, but hidden
    /// widgets and everything below them are left out.
    pub fn visible_depth_first(&self) -> Vec<WidgetId> {
        let mut order = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            if !node.widget.is_visible() {
                continue;
            }
            order.push(id);
            stack.extend(node.children.iter().rev());
        }
        order
    }

    // =========================================================================
    // Registry
    // =========================================================================

    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    /// Register a live widget under `name`. See [`WidgetRegistry::remember`].
    pub fn remember(&mut self, id: WidgetId, name: &str, override_existing: bool) -> bool {
        if !self.contains_widget(id) {
            tracing::warn!(
                target: targets::REGISTRY,
                %name,
                id = id.as_raw(),
                "cannot name a widget that does not exist"
            );
            return false;
        }
        self.registry.remember(id, name, override_existing)
    }

    /// Look up a widget by name.
    pub fn recall(&self, name: &str) -> Option<WidgetId> {
        self.registry.recall(name)
    }

    /// The name of `id`, or `""`.
    pub fn recall_name(&self, id: WidgetId) -> &str {
        self.registry.recall_name(id)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Mutate a widget through its concrete type.
    ///
    /// Size changes made by `f` propagate, and a value change reported with
    /// `mark_updated` runs the widget's update callback.
    pub fn with_widget_mut<W: Widget, R>(
        &mut self,
        id: WidgetId,
        f: impl FnOnce(&mut W) -> R,
    ) -> CoreResult<R> {
        let node = self.nodes.get_mut(id).ok_or(CoreError::InvalidWidget(id))?;
        let before = node.widget.geometry();
        let widget = node
            .widget
            .as_mut()
            .downcast_mut::<W>()
            .ok_or(CoreError::TypeMismatch {
                id,
                expected: std::any::type_name::<W>(),
            })?;
        let result = f(widget);
        self.after_change(id, before);
        Ok(result)
    }

    /// Mutate a widget without knowing its type.
    pub fn with_dyn_mut<R>(
        &mut self,
        id: WidgetId,
        f: impl FnOnce(&mut dyn Widget) -> R,
    ) -> CoreResult<R> {
        let node = self.nodes.get_mut(id).ok_or(CoreError::InvalidWidget(id))?;
        let before = node.widget.geometry();
        let result = f(node.widget.as_mut());
        self.after_change(id, before);
        Ok(result)
    }

    /// Run `f` as a widget hook with an event context.
    ///
    /// Returns `None` if the widget does not exist, in which case `f` is not
    /// called.
    pub(crate) fn dispatch<R>(
        &mut self,
        id: WidgetId,
        captured: bool,
        f: impl FnOnce(&mut dyn Widget, &mut EventContext<'_>) -> R,
    ) -> Option<R> {
        let node = self.nodes.get_mut(id)?;
        let before = node.widget.geometry();
        let mut ctx = EventContext::new(&mut self.env, captured);
        let result = f(node.widget.as_mut(), &mut ctx);
        self.after_change(id, before);
        Some(result)
    }

    pub fn set_position(&mut self, id: WidgetId, pos: Point) -> CoreResult<()> {
        self.with_dyn_mut(id, |widget| {
            widget.widget_base_mut().set_pos(pos);
        })
    }

    pub fn set_size(&mut self, id: WidgetId, size: Size) -> CoreResult<()> {
        self.with_dyn_mut(id, |widget| {
            widget.widget_base_mut().set_size(size);
        })
    }

    /// Show or hide a widget. Hidden widgets are not drawn, hit-tested or
    /// laid out, and drop out of the tab order.
    pub fn set_visible(&mut self, id: WidgetId, visible: bool) -> CoreResult<()> {
        let node = self.nodes.get_mut(id).ok_or(CoreError::InvalidWidget(id))?;
        if node.widget.widget_base_mut().set_visible(visible)
            && let Some(parent) = node.parent
        {
            self.relayout(parent);
        }
        Ok(())
    }

    /// Enable or disable a widget. Returns true if its state changed.
    pub fn set_enabled(&mut self, id: WidgetId, enabled: bool) -> CoreResult<bool> {
        self.dispatch(id, false, |widget, ctx| {
            if enabled {
                activation::enable(widget, ctx)
            } else {
                activation::disable(widget, ctx)
            }
        })
        .ok_or(CoreError::InvalidWidget(id))
    }

    /// Install the update callback of `id`, replacing any previous one.
    pub fn set_callback(
        &mut self,
        id: WidgetId,
        callback: impl FnMut(&mut WidgetTree, WidgetId) + 'static,
    ) -> CoreResult<()> {
        let node = self.nodes.get_mut(id).ok_or(CoreError::InvalidWidget(id))?;
        node.callback = Some(Box::new(callback));
        Ok(())
    }

    /// Install an update callback that receives the widget as its concrete
    /// type.
    pub fn set_callback_for<W: Widget>(
        &mut self,
        id: WidgetId,
        mut callback: impl FnMut(&mut W) + 'static,
    ) -> CoreResult<()> {
        self.set_callback(id, move |tree, id| {
            if let Err(err) = tree.with_widget_mut::<W, _>(id, &mut callback) {
                tracing::warn!(target: targets::TREE, %err, "update callback skipped");
            }
        })
    }

    pub fn clear_callback(&mut self, id: WidgetId) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.callback = None;
        }
    }

    fn after_change(&mut self, id: WidgetId, before: Rect) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let after = node.widget.geometry();
        let updated = node.widget.widget_base_mut().take_updated();
        let parent = node.parent;
        let container = node.widget.layout().is_some();

        if after.size != before.size {
            node.widget.on_resized(after.size);
        }
        // Layout settings may have changed; a container's size always
        // comes from its children.
        if container {
            self.arrange(id);
        }
        let settled = self.nodes.get(id).map(|node| node.widget.geometry());
        if settled != Some(before)
            && let Some(parent) = parent
        {
            self.relayout(parent);
        }
        if updated {
            self.run_callback(id);
        }
    }

    fn run_callback(&mut self, id: WidgetId) {
        let Some(mut callback) = self.nodes.get_mut(id).and_then(|node| node.callback.take())
        else {
            return;
        };
        tracing::trace!(target: targets::TREE, id = id.as_raw(), "running update callback");
        callback(self, id);
        // The callback may have removed its widget or installed a new one.
        if let Some(node) = self.nodes.get_mut(id)
            && node.callback.is_none()
        {
            node.callback = Some(callback);
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Re-lay out `id`, then each ancestor whose size changed as a result.
    pub fn relayout(&mut self, id: WidgetId) {
        let _span = tracing::trace_span!(target: targets::LAYOUT, span_names::RELAYOUT).entered();
        let mut current = id;
        for _ in 0..MAX_PROPAGATION_DEPTH {
            if !self.arrange(current) {
                return;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return,
            }
        }
        tracing::warn!(
            target: targets::LAYOUT,
            start = id.as_raw(),
            stopped_at = current.as_raw(),
            max_depth = MAX_PROPAGATION_DEPTH,
            "size propagation exceeded the maximum depth; stopping"
        );
    }

    /// Place the visible children of `id` and resize it to fit. Hidden
    /// children keep their slot and their position.
    ///
    /// Returns true if the container's own size changed. Leaf widgets are
    /// left alone.
    fn arrange(&mut self, id: WidgetId) -> bool {
        let Some(node) = self.nodes.get(id) else {
            return false;
        };
        let Some(layout) = node.widget.layout() else {
            return false;
        };

        let children = node.children.clone();
        let slots: Vec<Option<Rect>> = children
            .iter()
            .map(|&child| {
                self.nodes
                    .get(child)
                    .filter(|child_node| child_node.widget.is_visible())
                    .map(|child_node| child_node.widget.geometry())
            })
            .collect();
        let arrangement = layout.arrange(&slots, &self.theme);

        for (child, pos) in children.into_iter().zip(arrangement.positions) {
            if let Some(pos) = pos
                && let Some(child_node) = self.nodes.get_mut(child)
            {
                child_node.widget.widget_base_mut().set_pos(pos);
            }
        }

        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        let changed = node.widget.widget_base_mut().set_size(arrangement.size);
        if changed {
            tracing::trace!(
                target: targets::LAYOUT,
                id = id.as_raw(),
                width = arrangement.size.width,
                height = arrangement.size.height,
                "container resized"
            );
            node.widget.on_resized(arrangement.size);
        }
        changed
    }

    // =========================================================================
    // Geometry queries
    // =========================================================================

    /// The widget's position in tree coordinates: the sum of the local
    /// positions along its parent chain.
    pub fn absolute_position(&self, id: WidgetId) -> Option<Point> {
        let mut node = self.nodes.get(id)?;
        let mut pos = node.widget.pos();
        while let Some(parent) = node.parent {
            node = self.nodes.get(parent)?;
            pos += node.widget.pos();
        }
        Some(pos)
    }

    /// The widget's bounds in tree coordinates.
    pub fn absolute_rect(&self, id: WidgetId) -> Option<Rect> {
        let origin = self.absolute_position(id)?;
        let size = self.nodes.get(id)?.widget.size();
        Some(Rect::from_origin_size(origin, size))
    }

    /// Hit test a single widget against a point in tree coordinates.
    pub fn contains(&self, id: WidgetId, point: Point) -> bool {
        self.absolute_rect(id).is_some_and(|rect| rect.contains(point))
    }

    /// The topmost visible widget at `point` (tree coordinates).
    ///
    /// Later siblings are painted over earlier ones, so they are tested
    /// first, and children win over their container.
    pub fn widget_at(&self, point: Point) -> Option<WidgetId> {
        self.hit(self.root, point)
    }

    fn hit(&self, id: WidgetId, point: Point) -> Option<WidgetId> {
        let node = self.nodes.get(id)?;
        if !node.widget.is_visible() {
            return None;
        }
        let local = point - node.widget.pos();
        if !node.widget.widget_base().contains_local(local) {
            return None;
        }
        node.children
            .iter()
            .rev()
            .find_map(|&child| self.hit(child, local))
            .or(Some(id))
    }

    // =========================================================================
    // Theme & time
    // =========================================================================

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn shared_theme(&self) -> &SharedTheme {
        &self.theme
    }

    /// Install a new theme and broadcast it to every widget, parents first.
    ///
    /// Containers are re-laid out afterwards, children before parents, so the
    /// whole tree settles in one pass.
    pub fn theme_changed(&mut self, theme: SharedTheme) {
        self.theme = theme;
        let order = self.depth_first(self.root);
        for &id in &order {
            self.attach_theme(id);
        }
        for &id in order.iter().rev() {
            self.arrange(id);
        }
        tracing::debug!(target: targets::THEME, widgets = order.len(), "theme broadcast");
    }

    fn attach_theme(&mut self, id: WidgetId) {
        let theme = SharedTheme::clone(&self.theme);
        if let Some(node) = self.nodes.get_mut(id) {
            node.widget.widget_base_mut().set_theme(SharedTheme::clone(&theme));
            node.widget.on_theme_changed(&theme);
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Run the per-frame hook of every widget at session time `now`.
    pub fn tick(&mut self, now: Duration) {
        self.env.session_time = now;
        let delay = self.theme.tooltip_delay();
        for id in self.depth_first(self.root) {
            self.dispatch(id, false, |widget, ctx| {
                if let Some(tooltip) = widget.widget_base_mut().tooltip_mut() {
                    tooltip.update(ctx.session_time(), delay);
                }
                widget.on_tick(ctx);
            });
        }
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Draw the tree, back to front.
    pub fn draw(&self, ctx: &mut RenderContext<'_>) {
        self.draw_subtree(self.root, ctx);
    }

    fn draw_subtree(&self, id: WidgetId, ctx: &mut RenderContext<'_>) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if !node.widget.is_visible() {
            return;
        }
        ctx.with_offset(node.widget.pos(), |ctx| {
            node.widget.draw(ctx);
            for &child in &node.children {
                self.draw_subtree(child, ctx);
            }
        });
    }

    /// Draw the tooltips that are due, on top of everything else.
    ///
    /// Unless the theme allows several at once, only the most recently
    /// shown tooltip is drawn.
    pub fn draw_tooltips(&self, ctx: &mut RenderContext<'_>) {
        let mut due: Vec<(WidgetId, Duration)> = self
            .visible_depth_first()
            .into_iter()
            .filter_map(|id| {
                let tooltip = self.nodes.get(id)?.widget.widget_base().tooltip()?;
                tooltip.shown_since().map(|since| (id, since))
            })
            .collect();
        if !self.theme.multi_tooltips()
            && let Some(latest) = due.iter().max_by_key(|(_, since)| *since).copied()
        {
            due = vec![latest];
        }

        for (id, _) in due {
            let (Some(pos), Some(node)) = (self.absolute_position(id), self.nodes.get(id)) else {
                continue;
            };
            let base = node.widget.widget_base();
            if let Some(tooltip) = base.tooltip() {
                ctx.with_offset(pos, |ctx| tooltip.draw(ctx, &self.theme, base.size()));
            }
        }
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// An indented outline of the tree.
    pub fn dump_tree(&self, options: &TreeFormatOptions) -> String {
        let mut out = String::new();
        self.dump_node(self.root, 0, options, &mut out);
        out
    }

    fn dump_node(&self, id: WidgetId, depth: usize, options: &TreeFormatOptions, out: &mut String) {
        if !options.includes_depth(depth) {
            return;
        }
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let widget = node.widget.as_ref();

        let _ = write!(out, "{}{}", options.indent(depth), widget.type_name());
        if let Some(name) = self.registry.name_of(id) {
            let _ = write!(out, " \"{name}\"");
        }
        if options.show_ids {
            let _ = write!(out, " #{}", id.default_name());
        }
        if options.show_geometry {
            let rect = widget.geometry();
            let _ = write!(
                out,
                " @({}, {}) {}x{}",
                rect.origin.x, rect.origin.y, rect.size.width, rect.size.height
            );
        }
        if !widget.is_visible() {
            out.push_str(" [hidden]");
        }
        if widget.state() != ActivationState::Default {
            let _ = write!(out, " [{}]", widget.state());
        }
        out.push('\n');

        for &child in &node.children {
            self.dump_node(child, depth + 1, options, out);
        }
    }
}

impl std::fmt::Debug for WidgetTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetTree")
            .field("root", &self.root)
            .field("len", &self.nodes.len())
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
