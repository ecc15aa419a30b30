//! Tests for the widget system.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use tessera_core::{ActivationState, CoreError, TreeFormatOptions, WidgetId};
use tessera_render::{Point, RecordingSink, RenderContext, Size};
use tessera_style::Theme;

use super::widgets::{Button, Label, Panel, StackBox};
use super::*;

/// Shared record of the hooks a recorder received.
#[derive(Clone, Default)]
struct Log(Rc<RefCell<Vec<String>>>);

impl Log {
    fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

struct Recorder {
    base: WidgetBase,
    natural: Size,
    log: Log,
}

impl Recorder {
    fn new(width: f32, height: f32) -> Self {
        Self {
            base: WidgetBase::new(),
            natural: Size::new(width, height),
            log: Log::default(),
        }
    }

    fn interactive(width: f32, height: f32, log: &Log) -> Self {
        Self {
            base: WidgetBase::interactive(),
            natural: Size::new(width, height),
            log: log.clone(),
        }
    }
}

impl Widget for Recorder {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn on_theme_changed(&mut self, _theme: &Theme) {
        self.base.set_size(self.natural);
    }

    fn on_mouse_enter(&mut self, _ctx: &mut EventContext<'_>) {
        self.log.push("enter");
    }

    fn on_mouse_leave(&mut self, _ctx: &mut EventContext<'_>) {
        self.log.push("leave");
    }

    fn on_mouse_moved(&mut self, ctx: &mut EventContext<'_>, pos: Point) {
        let captured = if ctx.has_capture() { " captured" } else { "" };
        self.log.push(format!("move({}, {}){captured}", pos.x, pos.y));
    }

    fn on_mouse_pressed(&mut self, _ctx: &mut EventContext<'_>, pos: Point) {
        self.log.push(format!("press({}, {})", pos.x, pos.y));
    }

    fn on_mouse_released(&mut self, _ctx: &mut EventContext<'_>, pos: Point) {
        self.log.push(format!("release({}, {})", pos.x, pos.y));
    }

    fn on_key_pressed(&mut self, _ctx: &mut EventContext<'_>, key: &KeyEvent) {
        self.log.push(format!("key {:?}", key.key));
    }

    fn on_focus_in(&mut self, _ctx: &mut EventContext<'_>) {
        self.log.push("focus in");
    }

    fn on_focus_out(&mut self, _ctx: &mut EventContext<'_>) {
        self.log.push("focus out");
    }

    fn draw(&self, _ctx: &mut RenderContext<'_>) {}
}

fn tree() -> WidgetTree {
    WidgetTree::new(StackBox::vertical(), Theme::default().shared())
}

fn moved(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMoved {
        position: Point::new(x, y),
    }
}

fn down(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerButtonDown {
        position: Point::new(x, y),
        button: MouseButton::Left,
    }
}

fn up(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerButtonUp {
        position: Point::new(x, y),
        button: MouseButton::Left,
    }
}

// =========================================================================
// Tree structure and propagation
// =========================================================================

#[test]
fn test_leaf_growth_reaches_root() {
    let mut tree = tree();
    let root = tree.root();
    let column = tree.add(root, StackBox::vertical()).unwrap();
    let a = tree.add(column, Recorder::new(50.0, 10.0)).unwrap();
    let b = tree.add(column, Recorder::new(30.0, 10.0)).unwrap();

    assert_eq!(tree.get(column).unwrap().size(), Size::new(50.0, 24.0));
    assert_eq!(tree.get(root).unwrap().size(), Size::new(50.0, 24.0));

    tree.set_size(a, Size::new(80.0, 20.0)).unwrap();

    assert_eq!(tree.get(b).unwrap().pos(), Point::new(0.0, 24.0));
    assert_eq!(tree.get(column).unwrap().size(), Size::new(80.0, 34.0));
    assert_eq!(tree.get(root).unwrap().size(), Size::new(80.0, 34.0));
}

#[test]
fn test_absolute_position_sums_parents() {
    let mut tree = tree();
    let root = tree.root();
    tree.add(root, Recorder::new(10.0, 10.0)).unwrap();
    let panel = tree.add(root, Panel::new()).unwrap();
    let inner = tree.add(panel, Recorder::new(10.0, 10.0)).unwrap();
    tree.set_position(inner, Point::new(5.0, 7.0)).unwrap();

    // The panel sits below the first recorder, after one gap.
    assert_eq!(tree.get(panel).unwrap().pos(), Point::new(0.0, 14.0));
    assert_eq!(tree.absolute_position(inner), Some(Point::new(5.0, 21.0)));
}

#[test]
fn test_add_requires_container() {
    let mut tree = tree();
    let leaf = tree.add(tree.root(), Recorder::new(10.0, 10.0)).unwrap();
    assert!(matches!(
        tree.add(leaf, Recorder::new(1.0, 1.0)),
        Err(CoreError::NotAContainer(_))
    ));
}

#[test]
fn test_remove_purges_names_and_relayouts() {
    let mut tree = tree();
    let root = tree.root();
    let column = tree.add_named(root, StackBox::vertical(), "column", false).unwrap();
    let a = tree.add_named(column, Recorder::new(40.0, 10.0), "a", false).unwrap();
    let b = tree.add(column, Recorder::new(20.0, 10.0)).unwrap();

    let removed = tree.remove(a).unwrap();

    assert_eq!(removed, vec![a]);
    assert!(!tree.contains_widget(a));
    assert_eq!(tree.recall("a"), None);
    assert_eq!(tree.get(b).unwrap().pos(), Point::ZERO);
    assert_eq!(tree.get(column).unwrap().size(), Size::new(20.0, 10.0));

    // Removing a container takes its children with it.
    let removed = tree.remove(column).unwrap();
    assert_eq!(removed.len(), 2);
    assert!(!tree.contains_widget(b));
    assert_eq!(tree.recall("column"), None);
    assert_eq!(tree.get(root).unwrap().size(), Size::ZERO);
}

#[test]
fn test_root_cannot_be_removed() {
    let mut tree = tree();
    let root = tree.root();
    assert!(matches!(tree.remove(root), Err(CoreError::RootWidget)));
}

#[test]
fn test_hidden_widget_leaves_layout() {
    let mut tree = tree();
    let root = tree.root();
    let a = tree.add(root, Recorder::new(10.0, 10.0)).unwrap();
    let b = tree.add(root, Recorder::new(10.0, 10.0)).unwrap();

    tree.set_visible(a, false).unwrap();
    assert_eq!(tree.get(b).unwrap().pos(), Point::ZERO);
    assert_eq!(tree.get(root).unwrap().size().height, 10.0);

    tree.set_visible(a, true).unwrap();
    assert_eq!(tree.get(b).unwrap().pos().y, 14.0);
}

// =========================================================================
// Update callbacks
// =========================================================================

#[test]
fn test_callback_runs_after_update() {
    let mut tree = tree();
    let root = tree.root();
    let label = tree.add(root, Label::new("0")).unwrap();
    let button = tree.add(root, Button::new("Inc")).unwrap();

    let count = Rc::new(Cell::new(0));
    let seen = Rc::clone(&count);
    tree.set_callback(button, move |tree, _| {
        seen.set(seen.get() + 1);
        let text = seen.get().to_string();
        tree.with_widget_mut::<Label, _>(label, |label| label.set_text(text))
            .unwrap();
    })
    .unwrap();

    tree.with_widget_mut::<Button, _>(button, Button::click).unwrap();
    tree.with_widget_mut::<Button, _>(button, Button::click).unwrap();

    assert_eq!(count.get(), 2);
    assert_eq!(tree.get_as::<Label>(label).unwrap().text(), "2");

    // Mutations that report no change stay silent.
    tree.set_position(button, Point::new(1.0, 1.0)).unwrap();
    assert_eq!(count.get(), 2);
}

#[test]
fn test_callback_may_remove_its_widget() {
    let mut tree = tree();
    let button = tree.add(tree.root(), Button::new("Bye")).unwrap();
    tree.set_callback(button, |tree, id| {
        tree.remove(id).unwrap();
    })
    .unwrap();

    tree.with_widget_mut::<Button, _>(button, Button::click).unwrap();

    assert!(!tree.contains_widget(button));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_typed_access_checks_type() {
    let mut tree = tree();
    let label = tree.add(tree.root(), Label::new("x")).unwrap();
    assert!(tree.get_as::<Button>(label).is_none());
    assert!(matches!(
        tree.with_widget_mut::<Button, _>(label, |_| ()),
        Err(CoreError::TypeMismatch { .. })
    ));
}

// =========================================================================
// Hit testing and diagnostics
// =========================================================================

#[test]
fn test_hit_testing_prefers_topmost() {
    let mut tree = tree();
    let panel = tree.add(tree.root(), Panel::new()).unwrap();
    let a = tree.add(panel, Recorder::new(50.0, 50.0)).unwrap();
    let b = tree.add(panel, Recorder::new(50.0, 50.0)).unwrap();
    tree.set_position(b, Point::new(25.0, 25.0)).unwrap();

    assert_eq!(tree.widget_at(Point::new(10.0, 10.0)), Some(a));
    assert_eq!(tree.widget_at(Point::new(30.0, 30.0)), Some(b));
    assert_eq!(tree.widget_at(Point::new(70.0, 5.0)), Some(panel));
    assert_eq!(tree.widget_at(Point::new(200.0, 200.0)), None);

    tree.set_visible(b, false).unwrap();
    assert_eq!(tree.widget_at(Point::new(30.0, 30.0)), Some(a));
}

#[test]
fn test_dump_tree_outline() {
    let mut tree = tree();
    let root = tree.root();
    tree.remember(root, "/", false);
    let column = tree.add(root, StackBox::vertical()).unwrap();
    tree.add_named(column, Label::new("Hi"), "greeting", false)
        .unwrap();

    let dump = tree.dump_tree(&TreeFormatOptions::minimal());
    assert_eq!(dump, "VBox \"/\"\n  VBox\n    Label \"greeting\"\n");
}

// =========================================================================
// Routing
// =========================================================================

/// Two interactive recorders stacked vertically: `a` at y 0, `b` at y 24.
fn routed() -> (WidgetTree, EventRouter, WidgetId, WidgetId, Log, Log) {
    let mut tree = tree();
    let root = tree.root();
    let (log_a, log_b) = (Log::default(), Log::default());
    let a = tree.add(root, Recorder::interactive(50.0, 20.0, &log_a)).unwrap();
    let b = tree.add(root, Recorder::interactive(50.0, 20.0, &log_b)).unwrap();
    (tree, EventRouter::default(), a, b, log_a, log_b)
}

#[test]
fn test_hover_moves_between_widgets() {
    let (mut tree, mut router, a, b, log_a, log_b) = routed();

    router.route(&mut tree, &moved(10.0, 10.0));
    assert_eq!(router.hovered(), Some(a));
    assert_eq!(tree.get(a).unwrap().state(), ActivationState::Hovered);

    router.route(&mut tree, &moved(10.0, 30.0));
    assert_eq!(router.hovered(), Some(b));
    assert_eq!(tree.get(a).unwrap().state(), ActivationState::Default);
    assert_eq!(tree.get(b).unwrap().state(), ActivationState::Hovered);

    assert_eq!(log_a.take(), vec!["enter", "move(10, 10)", "leave"]);
    assert_eq!(log_b.take(), vec!["enter", "move(10, 6)"]);
}

#[test]
fn test_pressed_widget_keeps_capture() {
    let (mut tree, mut router, a, b, log_a, log_b) = routed();

    router.route(&mut tree, &moved(10.0, 30.0));
    router.route(&mut tree, &down(10.0, 30.0));
    assert_eq!(router.pressed(), Some(b));
    assert_eq!(router.focused(), Some(b));
    assert_eq!(tree.get(b).unwrap().state(), ActivationState::Pressed);
    log_b.take();

    // Dragging over `a` hovers it, but moves still go to `b`.
    router.route(&mut tree, &moved(10.0, 5.0));
    assert_eq!(tree.get(a).unwrap().state(), ActivationState::Hovered);
    assert_eq!(tree.get(b).unwrap().state(), ActivationState::Pressed);
    assert_eq!(log_a.take(), vec!["enter"]);

    router.route(&mut tree, &up(10.0, 5.0));
    assert_eq!(router.pressed(), None);
    assert_eq!(tree.get(b).unwrap().state(), ActivationState::Focused);
    assert_eq!(
        log_b.take(),
        vec!["leave", "move(10, -19) captured", "release(10, -19)"]
    );
}

#[test]
fn test_disabled_widget_takes_no_input() {
    let (mut tree, mut router, a, _b, log_a, _log_b) = routed();
    tree.set_enabled(a, false).unwrap();
    assert_eq!(tree.get(a).unwrap().state(), ActivationState::Disabled);

    router.route(&mut tree, &moved(10.0, 10.0));
    router.route(&mut tree, &down(10.0, 10.0));
    router.route(&mut tree, &up(10.0, 10.0));

    assert_eq!(router.hovered(), None);
    assert_eq!(router.focused(), None);
    assert_eq!(tree.widget_at(Point::new(10.0, 10.0)), Some(a));
    assert_eq!(tree.get(a).unwrap().state(), ActivationState::Disabled);
    assert!(log_a.take().is_empty());
}

#[test]
fn test_keys_go_to_focused_widget() {
    let (mut tree, mut router, a, b, log_a, log_b) = routed();

    assert!(router.set_focus(&mut tree, b));
    router.route(&mut tree, &InputEvent::KeyDown(KeyEvent::plain(Key::A)));

    assert!(log_a.take().is_empty());
    assert_eq!(log_b.take(), vec!["focus in", "key A"]);
    assert!(tree.get(b).unwrap().has_focus());
    assert!(!tree.get(a).unwrap().has_focus());
}

#[test]
fn test_tab_wraps_and_skips_disabled() {
    let (mut tree, mut router, a, b, _log_a, _log_b) = routed();
    let tab = InputEvent::KeyDown(KeyEvent::plain(Key::Tab));
    let back_tab = InputEvent::KeyDown(KeyEvent::new(Key::Tab, KeyboardModifiers::SHIFT));

    router.route(&mut tree, &tab);
    assert_eq!(router.focused(), Some(a));
    router.route(&mut tree, &tab);
    assert_eq!(router.focused(), Some(b));
    router.route(&mut tree, &tab);
    assert_eq!(router.focused(), Some(a));
    router.route(&mut tree, &back_tab);
    assert_eq!(router.focused(), Some(b));

    router.release(&mut tree, a);
    tree.set_enabled(a, false).unwrap();
    router.route(&mut tree, &tab);
    assert_eq!(router.focused(), Some(b));
}

#[test]
fn test_release_drops_focus_with_notification() {
    let (mut tree, mut router, _a, b, _log_a, log_b) = routed();
    router.set_focus(&mut tree, b);
    router.release(&mut tree, b);

    assert_eq!(router.focused(), None);
    assert_eq!(log_b.take(), vec!["focus in", "focus out"]);
    assert_eq!(tree.get(b).unwrap().state(), ActivationState::Default);
}

#[test]
fn test_removed_widget_is_forgotten() {
    let (mut tree, mut router, _a, b, _log_a, _log_b) = routed();
    router.route(&mut tree, &moved(10.0, 30.0));
    router.route(&mut tree, &down(10.0, 30.0));

    tree.remove(b).unwrap();
    router.route(&mut tree, &up(10.0, 30.0));

    assert_eq!(router.pressed(), None);
    assert_eq!(router.focused(), None);
    assert_eq!(router.hovered(), None);
}

// =========================================================================
// Tooltips
// =========================================================================

#[test]
fn test_tooltip_appears_after_delay() {
    let (mut tree, mut router, a, _b, _log_a, _log_b) = routed();
    tree.with_dyn_mut(a, |widget| widget.widget_base_mut().set_tooltip("Help"))
        .unwrap();
    let delay = tree.theme().tooltip_delay();

    router.route(&mut tree, &moved(10.0, 10.0));
    tree.tick(Duration::from_millis(100));
    let mut sink = RecordingSink::new();
    tree.draw_tooltips(&mut RenderContext::new(&mut sink));
    assert!(sink.texts().is_empty());

    tree.tick(delay);
    let mut sink = RecordingSink::new();
    tree.draw_tooltips(&mut RenderContext::new(&mut sink));
    assert_eq!(sink.texts(), vec!["Help"]);

    // Leaving hides it again.
    router.route(&mut tree, &moved(200.0, 200.0));
    let mut sink = RecordingSink::new();
    tree.draw_tooltips(&mut RenderContext::new(&mut sink));
    assert!(sink.texts().is_empty());
}
