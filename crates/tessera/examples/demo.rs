//! Tessera Headless Demo
//!
//! Builds a small settings dialog, drives it with a scripted sequence of
//! input events and renders each step into a recording sink. The widget tree
//! and the recorded text are logged.
//!
//! Run with: RUST_LOG=info cargo run -p tessera --example demo

use std::time::Duration;

use tessera::prelude::*;
use tessera::render::DrawCommand;
use tracing::info;

fn main() -> tessera::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut gui = Gui::new(&ThemeConfig::default());
    gui.set_position(Point::new(20.0, 20.0));

    gui.add(Label::new("Render settings"), "title")?;
    let form = gui.add(Form::new(), "settings")?;
    let output = gui.add_row(
        form,
        "Output",
        TextBox::new(160.0).with_placeholder("file name"),
        "output",
    )?;
    let quality = gui.add_row(
        form,
        "Quality",
        OptionsBox::new()
            .with_item("Draft", 1_u32)
            .with_item("Normal", 4)
            .with_item("Best", 16),
        "quality",
    )?;
    let samples = gui.add_row(
        form,
        "Samples",
        Slider::new(SliderConfig::default()),
        "samples",
    )?;
    gui.add_row(form, "Preview", CheckBox::new(true), "preview")?;
    gui.add(ProgressBar::new(200.0), "progress")?;
    let start = gui.add(Button::new("Start"), "start")?;

    gui.with_widget_mut::<Button, _>(start, |button| {
        button.widget_base_mut().set_tooltip("Start rendering")
    })?;

    gui.set_callback(samples, |tree, id| {
        let Some(value) = tree.get_as::<Slider>(id).map(Slider::value) else {
            return;
        };
        if let Some(bar) = tree.recall("progress") {
            let _ = tree.with_widget_mut::<ProgressBar, _>(bar, |bar| bar.set_value(value));
        }
    })?;
    gui.set_callback_for::<OptionsBox<u32>>(quality, |options| {
        info!(quality = ?options.value(), "quality changed");
    })?;
    gui.set_callback(start, move |tree, _| {
        let file = tree
            .get_as::<TextBox>(output)
            .map(|text_box| text_box.text().to_owned())
            .unwrap_or_default();
        info!(%file, "render started");
        if let Some(title) = tree.recall("title") {
            let _ = tree.with_widget_mut::<Label, _>(title, |label| {
                label.set_text(format!("Rendering {file}"))
            });
        }
    })?;

    info!("initial layout:\n{}", gui.dump_tree());

    // Screen coordinates of a point inside a widget.
    let at = |gui: &Gui, id: WidgetId, dx: f32| -> Point {
        let pos = gui.tree().absolute_position(id).unwrap_or(Point::ZERO);
        Point::new(gui.position().x + pos.x + dx, gui.position().y + pos.y + 5.0)
    };

    let mut script = Vec::new();
    let entry = at(&gui, output, 10.0);
    script.push(InputEvent::PointerMoved { position: entry });
    script.push(InputEvent::PointerButtonDown {
        position: entry,
        button: MouseButton::Left,
    });
    script.push(InputEvent::PointerButtonUp {
        position: entry,
        button: MouseButton::Left,
    });
    script.extend("frame.png".chars().map(InputEvent::TextEntered));
    script.push(InputEvent::KeyDown(KeyEvent::plain(Key::Tab)));
    script.push(InputEvent::KeyDown(KeyEvent::plain(Key::ArrowRight)));
    script.push(InputEvent::KeyDown(KeyEvent::plain(Key::Tab)));
    script.push(InputEvent::KeyDown(KeyEvent::plain(Key::End)));
    script.push(InputEvent::KeyDown(KeyEvent::plain(Key::PageDown)));
    let button = at(&gui, start, 10.0);
    script.push(InputEvent::PointerMoved { position: button });
    script.push(InputEvent::PointerButtonDown {
        position: button,
        button: MouseButton::Left,
    });
    script.push(InputEvent::PointerButtonUp {
        position: button,
        button: MouseButton::Left,
    });

    let mut sink = RecordingSink::new();
    for event in script {
        gui.process(event);
        gui.advance_time(Duration::from_millis(100));
        sink.reset();
        gui.render(&mut sink);
    }

    let filled = sink
        .commands()
        .iter()
        .filter(|cmd| matches!(cmd, DrawCommand::FillRect { .. }))
        .count();
    info!(filled, texts = ?sink.texts(), "last frame");
    info!(
        focused = ?gui.focused(),
        hovered = ?gui.hovered(),
        cursor = ?gui.cursor(),
        "final state"
    );
    info!("final layout:\n{}", gui.dump_tree());

    gui.process(InputEvent::WindowClosed);
    info!(active = gui.active(), "closed");
    Ok(())
}
