//! Integration tests for image widgets and the wallpaper.

use std::cell::Cell;
use std::rc::Rc;

use tessera::prelude::*;
use tessera::render::DrawCommand;

fn image(raw: u64, width: f32, height: f32) -> Image {
    Image::new(ImageId::new(raw), Size::new(width, height))
}

fn image_sources(sink: &RecordingSink) -> Vec<Rect> {
    sink.commands()
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Image { src, .. } => Some(*src),
            _ => None,
        })
        .collect()
}

fn render(gui: &mut Gui) -> RecordingSink {
    let mut sink = RecordingSink::new();
    gui.render(&mut sink);
    sink
}

#[test]
fn test_wallpaper_sits_between_background_and_widgets() {
    let mut gui = Gui::new(&ThemeConfig::default());
    gui.add(Label::new("Over the wallpaper"), "").unwrap();
    gui.set_position(Point::new(10.0, 20.0));
    gui.set_wallpaper(Wallpaper::new(image(9, 16.0, 16.0)).with_mode(ImageScaleMode::Stretch));
    let area = Rect::from_origin_size(Point::new(10.0, 20.0), gui.size());

    let sink = render(&mut gui);
    let commands = sink.commands();
    assert!(matches!(commands[0], DrawCommand::Clear(_)));
    match &commands[1] {
        DrawCommand::Image { image, dest, .. } => {
            assert_eq!(*image, ImageId::new(9));
            assert_eq!(*dest, area);
        }
        other => panic!("expected the wallpaper, got {other:?}"),
    }
    assert_eq!(sink.texts(), vec!["Over the wallpaper"]);

    gui.clear_wallpaper();
    assert!(!gui.has_wallpaper());
    assert!(render(&mut gui).images().is_empty());
}

#[test]
fn test_wallpaper_tint_follows_updates() {
    let mut gui = Gui::new(&ThemeConfig::default());
    gui.add(Label::new("x"), "").unwrap();
    let faded = Color::WHITE.with_alpha(0.25);
    assert!(!gui.set_wallpaper_tint(faded));

    gui.set_wallpaper(Wallpaper::new(image(1, 4.0, 4.0)));
    assert!(gui.set_wallpaper_tint(faded));
    assert_eq!(gui.wallpaper().map(|wallpaper| wallpaper.tint), Some(faded));

    let sink = render(&mut gui);
    assert!(sink.commands().iter().any(|cmd| matches!(
        cmd,
        DrawCommand::Image { tint, .. } if *tint == faded
    )));
}

#[test]
fn test_image_button_frames_and_clicks() {
    let mut gui = Gui::new(&ThemeConfig::default());
    let go = gui
        .add(ImageButton::new(image(2, 40.0, 60.0), "Go"), "go")
        .unwrap();
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    gui.set_callback(go, move |_, _| counter.set(counter.get() + 1))
        .unwrap();

    assert_eq!(
        image_sources(&render(&mut gui)),
        vec![Rect::new(0.0, 0.0, 40.0, 20.0)]
    );

    let inside = Point::new(5.0, 5.0);
    gui.process(InputEvent::PointerMoved { position: inside });
    assert_eq!(
        image_sources(&render(&mut gui)),
        vec![Rect::new(0.0, 20.0, 40.0, 20.0)]
    );

    gui.process(InputEvent::PointerButtonDown {
        position: inside,
        button: MouseButton::Left,
    });
    assert_eq!(
        image_sources(&render(&mut gui)),
        vec![Rect::new(0.0, 40.0, 40.0, 20.0)]
    );
    assert!(gui.tree().get_as::<ImageButton>(go).unwrap().is_held());

    gui.process(InputEvent::PointerButtonUp {
        position: inside,
        button: MouseButton::Left,
    });
    assert_eq!(clicks.get(), 1);
    assert!(!gui.tree().get_as::<ImageButton>(go).unwrap().is_held());

    gui.process(InputEvent::KeyDown(KeyEvent::plain(Key::Enter)));
    assert_eq!(clicks.get(), 2);
}

#[test]
fn test_image_widget_takes_part_in_layout() {
    let mut gui = Gui::new(&ThemeConfig::default());
    let row = gui.add(StackBox::horizontal(), "row").unwrap();
    let icon = gui
        .add_to(row, ImageWidget::new(image(5, 32.0, 24.0)), "icon")
        .unwrap();
    let caption = gui.add_to(row, Label::new("Caption"), "").unwrap();

    assert_eq!(gui.widget(icon).unwrap().size(), Size::new(32.0, 24.0));
    assert_eq!(gui.widget(caption).unwrap().pos().x, 36.0);

    gui.with_widget_mut::<ImageWidget, _>(icon, |icon| {
        icon.set_fixed_size(Some(Size::new(48.0, 48.0)))
    })
    .unwrap();
    assert_eq!(gui.widget(caption).unwrap().pos().x, 52.0);

    let outline = gui.dump_tree_with(&tessera::TreeFormatOptions::minimal());
    assert!(outline.contains("Image \"icon\""), "{outline}");
}
