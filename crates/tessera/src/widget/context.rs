//! Services available to widgets while they handle events.

use std::time::Duration;

use super::cursor::CursorShape;

/// Text clipboard used by editing widgets.
pub trait Clipboard {
    /// The current clipboard text, if any.
    fn get_text(&mut self) -> Option<String>;

    /// Replace the clipboard text.
    fn set_text(&mut self, text: &str);
}

/// A clipboard that lives only as long as the GUI.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_owned());
    }
}

/// The operating-system clipboard.
#[cfg(feature = "system-clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    /// Open the system clipboard.
    pub fn new() -> Result<Self, arboard::Error> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

#[cfg(feature = "system-clipboard")]
impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        match self.inner.get_text() {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::debug!(target: tessera_core::logging::targets::TREE, %err, "clipboard read failed");
                None
            }
        }
    }

    fn set_text(&mut self, text: &str) {
        if let Err(err) = self.inner.set_text(text.to_owned()) {
            tracing::warn!(target: tessera_core::logging::targets::TREE, %err, "clipboard write failed");
        }
    }
}

/// Per-GUI state shared by every event dispatch.
pub struct Environment {
    pub(crate) clipboard: Box<dyn Clipboard>,
    pub(crate) cursor: CursorShape,
    pub(crate) session_time: Duration,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            clipboard: Box::new(MemoryClipboard::new()),
            cursor: CursorShape::Arrow,
            session_time: Duration::ZERO,
        }
    }
}

impl Environment {
    /// Replace the clipboard.
    pub fn set_clipboard(&mut self, clipboard: Box<dyn Clipboard>) {
        self.clipboard = clipboard;
    }

    /// The most recently requested cursor shape.
    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    /// Session time as of the last frame.
    pub fn session_time(&self) -> Duration {
        self.session_time
    }
}

/// Context handed to widget hooks.
pub struct EventContext<'a> {
    env: &'a mut Environment,
    captured: bool,
}

impl<'a> EventContext<'a> {
    pub(crate) fn new(env: &'a mut Environment, captured: bool) -> Self {
        Self { env, captured }
    }

    /// Session time as of the last frame.
    #[inline]
    pub fn session_time(&self) -> Duration {
        self.env.session_time
    }

    /// The clipboard.
    pub fn clipboard(&mut self) -> &mut dyn Clipboard {
        self.env.clipboard.as_mut()
    }

    /// Ask the host to show `shape` as the mouse cursor.
    pub fn set_cursor(&mut self, shape: CursorShape) {
        self.env.cursor = shape;
    }

    /// Whether this widget holds the mouse capture, that is, the left button
    /// went down on it and has not been released yet.
    #[inline]
    pub fn has_capture(&self) -> bool {
        self.captured
    }
}
