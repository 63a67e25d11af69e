use leptos::prelude::*;

/// Sidebar width while expanded, in pixels
pub const EXPANDED_WIDTH: u32 = 256;
/// Sidebar width while collapsed, in pixels
pub const COLLAPSED_WIDTH: u32 = 80;

/// Sidebar collapsed/expanded state and the content offset derived from it
#[derive(Clone, Copy)]
pub struct LayoutStore {
    collapsed: RwSignal<bool>,
    offset: Memo<u32>,
}

impl LayoutStore {
    pub fn new() -> Self {
        let collapsed = RwSignal::new(false);
        let offset = Memo::new(move |_| {
            if collapsed.get() {
                COLLAPSED_WIDTH
            } else {
                EXPANDED_WIDTH
            }
        });
        Self { collapsed, offset }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed.get()
    }

    pub fn toggle(&self) {
        self.collapsed.update(|value| *value = !*value);
    }

    pub fn set_collapsed(&self, value: bool) {
        self.collapsed.set(value);
    }

    /// Left offset of the content area in pixels
    pub fn offset(&self) -> u32 {
        self.offset.get()
    }

    /// `offset()` as a CSS length, e.g. "256px"
    pub fn offset_css(&self) -> String {
        format!("{}px", self.offset())
    }
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_offset_follows_latest_set(values in proptest::collection::vec(any::<bool>(), 1..64)) {
            let layout = LayoutStore::new();
            for value in values {
                layout.set_collapsed(value);
                prop_assert_eq!(layout.is_collapsed(), value);
                let expected = if value { COLLAPSED_WIDTH } else { EXPANDED_WIDTH };
                prop_assert_eq!(layout.offset(), expected);
            }
        }
    }

    #[test]
    fn test_starts_expanded() {
        let layout = LayoutStore::new();
        assert!(!layout.is_collapsed());
        assert_eq!(layout.offset(), EXPANDED_WIDTH);
        assert_eq!(layout.offset_css(), "256px");
    }

    #[test]
    fn test_toggle_flips_offset() {
        let layout = LayoutStore::new();
        layout.toggle();
        assert_eq!(layout.offset(), COLLAPSED_WIDTH);
        layout.toggle();
        assert_eq!(layout.offset(), EXPANDED_WIDTH);
    }

    #[test]
    fn test_set_collapsed_is_idempotent() {
        let layout = LayoutStore::new();
        layout.set_collapsed(true);
        layout.set_collapsed(true);
        assert!(layout.is_collapsed());
        assert_eq!(layout.offset(), COLLAPSED_WIDTH);
    }
}
