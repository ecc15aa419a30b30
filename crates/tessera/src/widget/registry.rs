//! Named-widget registry.
//!
//! The registry maps names to [`WidgetId`]s. It never owns widgets: the
//! [`WidgetTree`](super::WidgetTree) purges a widget's entry when the widget
//! is removed.
//!
//! A name maps to at most one widget, and a widget holds at most one name.
//! Registering a name that is already taken either fails (the default) or,
//! when an override is requested, evicts the previous holder, which keeps a
//! synthesized default name so it stays reverse-resolvable.

use std::collections::HashMap;

use slotmap::SecondaryMap;
use tessera_core::WidgetId;
use tessera_core::logging::targets;

/// Name-to-widget mapping for one widget tree.
#[derive(Debug, Default, Clone)]
pub struct WidgetRegistry {
    by_name: HashMap<String, WidgetId>,
    names: SecondaryMap<WidgetId, String>,
}

impl WidgetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` under `name`.
    ///
    /// An empty `name` stands for the widget's default name, the lowercase
    /// hex form of its id. Returns false if the name belongs to another
    /// widget and `override_existing` is not set; both mappings are then
    /// left as they were.
    pub fn remember(&mut self, id: WidgetId, name: &str, override_existing: bool) -> bool {
        let name = if name.is_empty() {
            id.default_name()
        } else {
            name.to_owned()
        };

        match self.by_name.get(&name).copied() {
            Some(holder) if holder == id => return true,
            Some(holder) => {
                if !override_existing {
                    tracing::warn!(
                        target: targets::REGISTRY,
                        %name,
                        holder = holder.as_raw(),
                        rejected = id.as_raw(),
                        "widget name already in use; keeping the existing mapping"
                    );
                    return false;
                }
                self.evict(holder);
            }
            None => {}
        }

        if let Some(previous) = self.names.remove(id) {
            self.by_name.remove(&previous);
        }
        tracing::debug!(target: targets::REGISTRY, %name, id = id.as_raw(), "widget registered");
        self.by_name.insert(name.clone(), id);
        self.names.insert(id, name);
        true
    }

    /// Look up a widget by name.
    ///
    /// A miss is logged and reported as `None`.
    pub fn recall(&self, name: &str) -> Option<WidgetId> {
        let found = self.by_name.get(name).copied();
        if found.is_none() {
            tracing::warn!(target: targets::REGISTRY, %name, "no widget registered under this name");
        }
        found
    }

    /// The name `id` is registered under, or `""` if it has none.
    pub fn recall_name(&self, id: WidgetId) -> &str {
        self.names.get(id).map(String::as_str).unwrap_or("")
    }

    /// The name `id` is registered under.
    pub fn name_of(&self, id: WidgetId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Drop the entry for `id`, if any. Returns the name it held.
    pub fn forget(&mut self, id: WidgetId) -> Option<String> {
        let name = self.names.remove(id)?;
        self.by_name.remove(&name);
        Some(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// All `(name, id)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, WidgetId)> {
        self.by_name.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Move `holder` off its current name onto its default name.
    fn evict(&mut self, holder: WidgetId) {
        let Some(old) = self.names.remove(holder) else {
            return;
        };
        self.by_name.remove(&old);

        let fallback = holder.default_name();
        if self.by_name.contains_key(&fallback) {
            tracing::warn!(
                target: targets::REGISTRY,
                name = %old,
                %fallback,
                "evicted widget's default name is taken; leaving it unnamed"
            );
            return;
        }
        tracing::debug!(
            target: targets::REGISTRY,
            name = %old,
            %fallback,
            "evicting widget from its name"
        );
        self.by_name.insert(fallback.clone(), holder);
        self.names.insert(holder, fallback);
    }
}
