//! Widget identifiers.

use slotmap::new_key_type;

new_key_type! {
    /// A unique identifier for a widget in a widget tree.
    ///
    /// `WidgetId`s are versioned arena keys: once the widget they name is
    /// removed, the id never resolves again, even if its slot is reused by a
    /// later widget.
    pub struct WidgetId;
}

impl WidgetId {
    /// Convert the id to a raw u64 value.
    ///
    /// The raw value is stable for the lifetime of the widget and is used to
    /// synthesize default registry names.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Create a `WidgetId` from a raw u64 value.
    ///
    /// This does not check whether the widget still exists.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }

    /// The lowercase hexadecimal form of the raw value.
    pub fn default_name(self) -> String {
        format!("{:x}", self.as_raw())
    }
}

static_assertions::assert_impl_all!(WidgetId: Send, Sync, Copy, Eq, std::hash::Hash);

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_raw_round_trip_names_the_same_widget() {
        let mut map: SlotMap<WidgetId, ()> = SlotMap::with_key();
        let id = map.insert(());
        assert_eq!(WidgetId::from_raw(id.as_raw()), id);
    }

    #[test]
    fn test_default_name_is_hex_of_raw() {
        let mut map: SlotMap<WidgetId, ()> = SlotMap::with_key();
        let a = map.insert(());
        let b = map.insert(());
        assert_eq!(a.default_name(), format!("{:x}", a.as_raw()));
        assert_ne!(a.default_name(), b.default_name());
    }

    #[test]
    fn test_removed_slot_gets_a_new_id() {
        let mut map: SlotMap<WidgetId, ()> = SlotMap::with_key();
        let a = map.insert(());
        map.remove(a);
        let b = map.insert(());
        assert_ne!(a, b);
        assert!(!map.contains_key(a));
    }
}
