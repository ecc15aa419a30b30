//! Logging and debugging facilities for Tessera.
//!
//! Tessera uses the `tracing` crate for instrumentation. To see logs, install
//! a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("tessera::registry=warn,tessera::layout=debug")
//!     .init();
//! ```
//!
//! The [`targets`] constants name the subsystems so they can be filtered
//! individually.

/// Span names used for tracing.
pub mod span_names {
    /// Input event dispatch.
    pub const DISPATCH: &str = "tessera::dispatch";
    /// Layout propagation.
    pub const RELAYOUT: &str = "tessera::relayout";
    /// Frame rendering.
    pub const RENDER: &str = "tessera::render";
}

/// Target names for log filtering.
pub mod targets {
    /// Widget tree structure: insertion, removal, callbacks.
    pub const TREE: &str = "tessera::tree";
    /// Geometry recomputation and size propagation.
    pub const LAYOUT: &str = "tessera::layout";
    /// Named-widget registry.
    pub const REGISTRY: &str = "tessera::registry";
    /// Event routing, focus and capture.
    pub const ROUTER: &str = "tessera::router";
    /// Theme application.
    pub const THEME: &str = "tessera::theme";
}

/// Options for textual widget-tree dumps.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// Whether to show widget ids.
    pub show_ids: bool,
    /// Whether to show local geometry.
    pub show_geometry: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            show_ids: true,
            show_geometry: true,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Options for a compact outline: names and types only.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_geometry: false,
            ..Default::default()
        }
    }

    /// Whether nodes at `depth` should be printed.
    pub fn includes_depth(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }

    /// The indentation prefix for `depth`.
    pub fn indent(&self, depth: usize) -> String {
        " ".repeat(depth * self.indent_size)
    }
}
