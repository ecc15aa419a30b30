//! Integration tests for the selection model and text editing.

use std::cell::RefCell;
use std::rc::Rc;

use tessera::Selection;
use tessera::prelude::*;

fn key(key: Key) -> InputEvent {
    InputEvent::KeyDown(KeyEvent::plain(key))
}

fn shifted(key: Key) -> InputEvent {
    InputEvent::KeyDown(KeyEvent::new(key, KeyboardModifiers::SHIFT))
}

fn ctrl(key: Key) -> InputEvent {
    InputEvent::KeyDown(KeyEvent::new(key, KeyboardModifiers::CTRL))
}

fn type_text(gui: &mut Gui, text: &str) {
    for ch in text.chars() {
        gui.process(InputEvent::TextEntered(ch));
    }
}

fn text_of(gui: &Gui, id: WidgetId) -> String {
    gui.tree().get_as::<TextBox>(id).unwrap().text().to_owned()
}

#[test]
fn test_selection_never_inverts() {
    let mut selection = Selection::new();
    selection.start(3);
    selection.follow(7);
    assert_eq!((selection.lower(), selection.upper()), (3, 7));

    selection.follow(1);
    assert_eq!((selection.lower(), selection.upper()), (1, 3));
    assert_eq!(selection.len(), 2);

    selection.cancel();
    assert!(selection.is_empty());
    assert_eq!(selection.range(), 0..0);
}

#[test]
fn test_stopped_selection_resumes_and_drops() {
    let mut selection = Selection::new();
    selection.start(2);
    selection.follow(5);
    selection.stop();
    assert!(selection.is_stopped());
    assert_eq!(selection.range(), 2..5);

    selection.resume();
    selection.follow(8);
    assert_eq!(selection.range(), 2..8);

    selection.stop();
    selection.follow(4);
    assert!(selection.is_inactive());
}

#[test]
fn test_keyboard_selection_copy_and_paste() {
    let mut gui = Gui::new(&ThemeConfig::default());
    let id = gui.add(TextBox::new(200.0), "entry").unwrap();
    assert!(gui.set_focus(id));

    type_text(&mut gui, "hello world");
    gui.process(key(Key::ShiftLeft));
    for _ in 0..5 {
        gui.process(shifted(Key::ArrowLeft));
    }
    gui.process(InputEvent::KeyUp(KeyEvent::new(
        Key::ShiftLeft,
        KeyboardModifiers::NONE,
    )));

    let text_box = gui.tree().get_as::<TextBox>(id).unwrap();
    assert_eq!(text_box.selected_text(), "world");
    assert_eq!(text_box.cursor(), 6);

    gui.process(ctrl(Key::C));
    gui.process(key(Key::End));
    gui.process(ctrl(Key::V));

    assert_eq!(text_of(&gui, id), "hello worldworld");
    assert_eq!(gui.tree().get_as::<TextBox>(id).unwrap().cursor(), 16);
}

#[test]
fn test_mouse_drag_selects_range() {
    let mut gui = Gui::new(&ThemeConfig::default());
    let id = gui.add(TextBox::new(200.0), "").unwrap();
    gui.with_widget_mut::<TextBox, _>(id, |text_box| text_box.set_text("abcdefghij"))
        .unwrap();

    // Characters are 7.2 wide and the text starts 2 in.
    let at = |index: f32| Point::new(2.0 + 7.2 * index + 1.0, 5.0);
    gui.process(InputEvent::PointerMoved { position: at(2.0) });
    gui.process(InputEvent::PointerButtonDown {
        position: at(2.0),
        button: MouseButton::Left,
    });
    gui.process(InputEvent::PointerMoved { position: at(6.0) });
    gui.process(InputEvent::PointerButtonUp {
        position: at(6.0),
        button: MouseButton::Left,
    });

    assert_eq!(gui.focused(), Some(id));
    let text_box = gui.tree().get_as::<TextBox>(id).unwrap();
    assert_eq!(text_box.selection().range(), 2..6);
    assert_eq!(text_box.selected_text(), "cdef");

    gui.process(key(Key::Delete));
    assert_eq!(text_of(&gui, id), "abghij");
    assert_eq!(gui.tree().get_as::<TextBox>(id).unwrap().cursor(), 2);
}

#[test]
fn test_typing_replaces_selection() {
    let mut gui = Gui::new(&ThemeConfig::default());
    let id = gui.add(TextBox::new(200.0), "").unwrap();
    gui.set_focus(id);
    type_text(&mut gui, "draft");

    gui.process(ctrl(Key::A));
    type_text(&mut gui, "final");

    assert_eq!(text_of(&gui, id), "final");
}

#[test]
fn test_focus_loss_cancels_selection() {
    let mut gui = Gui::new(&ThemeConfig::default());
    let id = gui.add(TextBox::new(200.0), "").unwrap();
    let other = gui.add(Button::new("Other"), "").unwrap();
    gui.set_focus(id);
    type_text(&mut gui, "some text");
    gui.process(ctrl(Key::A));

    gui.set_focus(other);

    let text_box = gui.tree().get_as::<TextBox>(id).unwrap();
    assert!(text_box.selection().is_empty());
    assert_eq!(text_box.text(), "some text");
}

#[test]
fn test_enter_submits_text() {
    let mut gui = Gui::new(&ThemeConfig::default());
    let id = gui.add(TextBox::new(200.0), "").unwrap();
    let submitted = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&submitted);
    gui.set_callback_for::<TextBox>(id, move |text_box| {
        sink.borrow_mut().push(text_box.text().to_owned());
    })
    .unwrap();
    gui.set_focus(id);

    type_text(&mut gui, "query");
    assert!(submitted.borrow().is_empty());

    gui.process(key(Key::Enter));
    assert_eq!(*submitted.borrow(), vec!["query".to_owned()]);
}
