//! The GUI controller.
//!
//! [`Gui`] ties a [`WidgetTree`] to an [`EventRouter`], a
//! [`SessionClock`] and a theme. A host drives it once per frame:
//!
//! ```ignore
//! use tessera::prelude::*;
//!
//! let mut gui = Gui::new(&ThemeConfig::default());
//! let ok = gui.add(Button::new("OK"), "ok")?;
//! gui.set_callback(ok, |_, _| tracing::info!("clicked"))?;
//!
//! while gui.active() {
//!     for event in host.poll_events() {
//!         gui.process(event);
//!     }
//!     gui.render(&mut host.sink());
//! }
//! ```

use std::time::Duration;

use tessera_core::logging::{span_names, targets};
use tessera_core::{SessionClock, SessionTime, TreeFormatOptions, WidgetId};
use tessera_render::{Color, Point, Rect, RenderContext, RenderSink, Size, Wallpaper};
use tessera_style::{Theme, ThemeConfig};

use crate::error::{GuiError, Result};
use crate::widget::widgets::{Form, StackBox};
use crate::widget::{
    Clipboard, CursorShape, EventRouter, InputEvent, RouterConfig, Widget, WidgetTree,
};

/// The name the root container is registered under.
pub const ROOT_NAME: &str = "/";

/// A widget tree with input routing, timekeeping and a theme.
pub struct Gui {
    tree: WidgetTree,
    router: EventRouter,
    clock: SessionClock,
    position: Point,
    wallpaper: Option<Wallpaper>,
    closed: bool,
    error: Option<GuiError>,
}

impl Gui {
    /// Create a GUI with an empty vertical root container.
    ///
    /// A configuration that fails to apply does not panic: the default
    /// theme is used, the error is kept and [`Gui::active`] reports false.
    pub fn new(config: &ThemeConfig) -> Self {
        let (theme, error) = match config.apply() {
            Ok(theme) => (theme, None),
            Err(err) => {
                tracing::error!(target: targets::THEME, %err, "theme rejected; GUI is inactive");
                (Theme::default(), Some(GuiError::from(err)))
            }
        };

        let mut tree = WidgetTree::new(StackBox::vertical(), theme.shared());
        let root = tree.root();
        tree.remember(root, ROOT_NAME, false);
        tracing::debug!(target: targets::TREE, root = root.as_raw(), "GUI created");

        Self {
            tree,
            router: EventRouter::default(),
            clock: SessionClock::new(),
            position: Point::ZERO,
            wallpaper: None,
            closed: false,
            error,
        }
    }

    /// Replace the focus navigation key bindings.
    pub fn with_router_config(mut self, config: RouterConfig) -> Self {
        self.router.set_config(config);
        self
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// True until the GUI is closed or a theme error occurs.
    #[inline]
    pub fn active(&self) -> bool {
        !self.closed && self.error.is_none()
    }

    pub fn close(&mut self) {
        if !self.closed {
            tracing::debug!(target: targets::TREE, "GUI closed");
        }
        self.closed = true;
    }

    /// The error that deactivated the GUI, if any.
    pub fn error(&self) -> Option<&GuiError> {
        self.error.as_ref()
    }

    /// Handle one input event. Returns false once the GUI is inactive.
    ///
    /// Pointer positions are taken relative to the GUI position.
    pub fn process(&mut self, event: InputEvent) -> bool {
        if !self.active() {
            return false;
        }
        match event {
            InputEvent::WindowClosed => self.close(),
            event => self
                .router
                .route(&mut self.tree, &event.relative_to(self.position)),
        }
        self.active()
    }

    /// Advance the session clock by the wall time since the previous frame
    /// and draw the GUI.
    pub fn render(&mut self, sink: &mut dyn RenderSink) {
        let now = self.clock.tick();
        self.frame(now, sink);
    }

    /// Advance the session clock by `delta` without drawing.
    ///
    /// Headless hosts use this to drive time explicitly; the next
    /// [`Gui::render`] picks it up.
    pub fn advance_time(&mut self, delta: Duration) -> Duration {
        let now = self.clock.advance(delta);
        self.tree.tick(now);
        now
    }

    fn frame(&mut self, now: Duration, sink: &mut dyn RenderSink) {
        let _span = tracing::trace_span!(target: targets::TREE, span_names::RENDER).entered();
        self.tree.tick(now);

        let mut ctx = RenderContext::new(sink);
        let theme = self.tree.theme();
        if theme.clear_background() {
            ctx.clear(theme.bg_color());
        }
        ctx.with_offset(self.position, |ctx| {
            if let Some(wallpaper) = &self.wallpaper {
                let area = Rect::from_origin_size(Point::ZERO, self.size());
                wallpaper.draw(ctx, area);
            }
            self.tree.draw(ctx);
            self.tree.draw_tooltips(ctx);
        });
    }

    // =========================================================================
    // Wallpaper
    // =========================================================================

    /// Draw `wallpaper` behind the widgets, over the background color. It
    /// covers the GUI's area and replaces any previous wallpaper.
    pub fn set_wallpaper(&mut self, wallpaper: Wallpaper) {
        tracing::debug!(
            target: targets::TREE,
            image = wallpaper.image.id().as_raw(),
            mode = ?wallpaper.mode,
            "wallpaper set"
        );
        self.wallpaper = Some(wallpaper);
    }

    pub fn clear_wallpaper(&mut self) {
        self.wallpaper = None;
    }

    pub fn wallpaper(&self) -> Option<&Wallpaper> {
        self.wallpaper.as_ref()
    }

    #[inline]
    pub fn has_wallpaper(&self) -> bool {
        self.wallpaper.is_some()
    }

    /// Change the wallpaper tint. Returns false if there is no wallpaper.
    pub fn set_wallpaper_tint(&mut self, tint: Color) -> bool {
        match &mut self.wallpaper {
            Some(wallpaper) => {
                wallpaper.tint = tint;
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Theme
    // =========================================================================

    /// Apply a new theme configuration.
    ///
    /// On failure the current theme stays, the error is kept and the GUI
    /// becomes inactive. On success every widget is re-themed and a
    /// previous theme error is cleared.
    pub fn set_theme(&mut self, config: &ThemeConfig) -> Result<()> {
        match config.apply() {
            Ok(theme) => {
                self.tree.theme_changed(theme.shared());
                if matches!(self.error, Some(GuiError::Theme(_))) {
                    self.error = None;
                }
                tracing::debug!(target: targets::THEME, name = ?config.name, "theme applied");
                Ok(())
            }
            Err(err) => {
                tracing::error!(target: targets::THEME, %err, "theme rejected; keeping the current theme");
                let err = GuiError::from(err);
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn theme(&self) -> &Theme {
        self.tree.theme()
    }

    // =========================================================================
    // Widgets
    // =========================================================================

    /// The root container.
    #[inline]
    pub fn root(&self) -> WidgetId {
        self.tree.root()
    }

    /// Add `widget` to the root container, registered under `name` unless
    /// it is empty.
    pub fn add(&mut self, widget: impl Widget, name: &str) -> Result<WidgetId> {
        let root = self.tree.root();
        self.add_to(root, widget, name)
    }

    /// Add `widget` to the container `parent`.
    pub fn add_to(&mut self, parent: WidgetId, widget: impl Widget, name: &str) -> Result<WidgetId> {
        Ok(self.tree.add_named(parent, widget, name, false)?)
    }

    /// Append a label/field row to the form `form`. See [`Form::add_row`].
    pub fn add_row(
        &mut self,
        form: WidgetId,
        label: &str,
        widget: impl Widget,
        name: &str,
    ) -> Result<WidgetId> {
        Ok(Form::add_row(&mut self.tree, form, label, widget, name)?)
    }

    /// Remove `id` and its subtree.
    pub fn remove(&mut self, id: WidgetId) -> Result<()> {
        let removed = self.tree.remove(id)?;
        self.router.forget(&removed);
        Ok(())
    }

    /// Remove the widget registered as `name`, with its subtree.
    pub fn remove_named(&mut self, name: &str) -> Result<()> {
        let id = self
            .get(name)
            .ok_or_else(|| GuiError::UnknownName(name.to_owned()))?;
        self.remove(id)
    }

    /// Look up a widget by name.
    pub fn get(&self, name: &str) -> Option<WidgetId> {
        self.tree.recall(name)
    }

    /// Look up a widget by name and concrete type.
    pub fn get_as<W: Widget>(&self, name: &str) -> Option<&W> {
        self.get(name).and_then(|id| self.tree.get_as::<W>(id))
    }

    pub fn widget(&self, id: WidgetId) -> Option<&(dyn Widget + 'static)> {
        self.tree.get(id)
    }

    /// Mutate a widget through its concrete type. Size changes propagate
    /// and value changes run the update callback.
    pub fn with_widget_mut<W: Widget, R>(
        &mut self,
        id: WidgetId,
        f: impl FnOnce(&mut W) -> R,
    ) -> Result<R> {
        Ok(self.tree.with_widget_mut(id, f)?)
    }

    /// Install the update callback of `id`.
    pub fn set_callback(
        &mut self,
        id: WidgetId,
        callback: impl FnMut(&mut WidgetTree, WidgetId) + 'static,
    ) -> Result<()> {
        Ok(self.tree.set_callback(id, callback)?)
    }

    /// Install an update callback that receives the widget as its concrete
    /// type.
    pub fn set_callback_for<W: Widget>(
        &mut self,
        id: WidgetId,
        callback: impl FnMut(&mut W) + 'static,
    ) -> Result<()> {
        Ok(self.tree.set_callback_for(id, callback)?)
    }

    /// Move a widget within its parent.
    pub fn set_widget_position(&mut self, id: WidgetId, pos: Point) -> Result<()> {
        Ok(self.tree.set_position(id, pos)?)
    }

    /// Enable or disable a widget. A widget being disabled loses focus,
    /// capture and hover first.
    pub fn set_enabled(&mut self, id: WidgetId, enabled: bool) -> Result<bool> {
        if !enabled {
            self.router.release(&mut self.tree, id);
        }
        Ok(self.tree.set_enabled(id, enabled)?)
    }

    /// Show or hide a widget. A widget being hidden, and every widget below
    /// it, loses focus, capture and hover first.
    pub fn set_visible(&mut self, id: WidgetId, visible: bool) -> Result<()> {
        if !visible {
            self.router.release_subtree(&mut self.tree, id);
        }
        Ok(self.tree.set_visible(id, visible)?)
    }

    /// Give keyboard focus to `id`. Returns false if it cannot take focus.
    pub fn set_focus(&mut self, id: WidgetId) -> bool {
        self.router.set_focus(&mut self.tree, id)
    }

    /// Replace the clipboard used by text widgets.
    pub fn set_clipboard(&mut self, clipboard: Box<dyn Clipboard>) {
        self.tree.environment_mut().set_clipboard(clipboard);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Where the GUI is drawn, in host coordinates.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The GUI's extent: the size of the root container.
    pub fn size(&self) -> Size {
        self.tree
            .get(self.tree.root())
            .map(|root| root.size())
            .unwrap_or(Size::ZERO)
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Time elapsed since the GUI was created, as of the last frame.
    pub fn session_time(&self) -> Duration {
        self.clock.elapsed()
    }

    /// A read-only session-time handle for other threads.
    pub fn session_handle(&self) -> SessionTime {
        self.clock.handle()
    }

    /// The cursor shape most recently requested by a widget.
    pub fn cursor(&self) -> CursorShape {
        self.tree.environment().cursor()
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.router.focused()
    }

    pub fn hovered(&self) -> Option<WidgetId> {
        self.router.hovered()
    }

    /// The widget holding the pointer capture.
    pub fn pressed(&self) -> Option<WidgetId> {
        self.router.pressed()
    }

    /// An indented outline of the widget tree with ids and geometry.
    pub fn dump_tree(&self) -> String {
        self.tree.dump_tree(&TreeFormatOptions::default())
    }

    pub fn dump_tree_with(&self, options: &TreeFormatOptions) -> String {
        self.tree.dump_tree(options)
    }

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// Direct access to the tree. Removing widgets through it bypasses the
    /// router; stale references are dropped on the next event.
    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }
}

impl std::fmt::Debug for Gui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gui")
            .field("tree", &self.tree)
            .field("router", &self.router)
            .field("position", &self.position)
            .field("closed", &self.closed)
            .field("error", &self.error)
            .finish()
    }
}
