//! Integration tests for loading themes into a GUI.

use std::fs;

use tessera::prelude::*;
use tessera::style::Error as StyleError;

fn write_theme(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("theme.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_theme_file_drives_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_theme(&dir, "name = \"Roomy\"\nmargin = 10.0\nmin_widget_width = 100.0\n");
    let config = ThemeConfig::load(&path).unwrap();

    let mut gui = Gui::new(&config);
    assert!(gui.active());
    let row = gui.add(StackBox::horizontal(), "").unwrap();
    gui.add_to(row, Button::new("A"), "").unwrap();
    let b = gui.add_to(row, Button::new("B"), "").unwrap();

    assert_eq!(gui.widget(b).unwrap().pos().x, 110.0);
    assert_eq!(gui.widget(row).unwrap().size().width, 210.0);
}

#[test]
fn test_missing_asset_deactivates_gui() {
    let dir = tempfile::tempdir().unwrap();
    let body = format!(
        "base_path = {:?}\nfont_file = \"fonts/absent.ttf\"\n",
        dir.path().display().to_string()
    );
    let config = ThemeConfig::load(write_theme(&dir, &body)).unwrap();

    let gui = Gui::new(&config);
    assert!(!gui.active());
    match gui.error() {
        Some(GuiError::Theme(err)) => {
            assert!(matches!(**err, StyleError::MissingAsset { .. }));
        }
        other => panic!("expected a theme error, got {other:?}"),
    }
}

#[test]
fn test_theme_reload_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut gui = Gui::new(&ThemeConfig::default());
    let label = gui.add(Label::new("Scaled"), "").unwrap();
    let before = gui.widget(label).unwrap().size();

    let path = write_theme(&dir, "text_size = 24\ncursor_style = \"pulse\"\n");
    gui.set_theme(&ThemeConfig::load(&path).unwrap()).unwrap();

    assert!(gui.widget(label).unwrap().size().width > before.width);
    assert_eq!(gui.theme().text_size(), 24.0);
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_theme(&dir, "text_size = \"large\"\n");
    assert!(matches!(ThemeConfig::load(&path), Err(StyleError::Parse(_))));
}

#[test]
fn test_background_clear_is_optional() {
    let config = ThemeConfig {
        clear_background: false,
        ..Default::default()
    };
    let mut gui = Gui::new(&config);
    gui.add(Label::new("No clear"), "").unwrap();

    let mut sink = RecordingSink::new();
    gui.render(&mut sink);
    assert!(
        !sink
            .commands()
            .iter()
            .any(|cmd| matches!(cmd, tessera::render::DrawCommand::Clear(_)))
    );
    assert_eq!(sink.texts(), vec!["No clear"]);
}
