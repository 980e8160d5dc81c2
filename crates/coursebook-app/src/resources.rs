//! String resources for the card toggle affordance.
//!
//! The views never spell out "show more" / "show less" themselves; they ask a
//! [`Resources`] implementation for the label matching the card's state.

use crate::config::StringsSettings;

/// Keys of the localizable strings the views need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    ShowMore,
    ShowLess,
}

impl StringKey {
    /// Resource identifier, also used as the fallback label
    pub fn id(self) -> &'static str {
        match self {
            StringKey::ShowMore => "show_more",
            StringKey::ShowLess => "show_less",
        }
    }

    /// Affordance for a card: what the toggle will do next
    pub fn toggle_for(expanded: bool) -> Self {
        if expanded {
            StringKey::ShowLess
        } else {
            StringKey::ShowMore
        }
    }
}

/// Lookup of localized strings by key
pub trait Resources {
    fn string(&self, key: StringKey) -> Option<&str>;
}

/// Resolve a label, falling back to the key identifier when it is missing
pub fn label<R: Resources + ?Sized>(resources: &R, key: StringKey) -> &str {
    match resources.string(key) {
        Some(text) => text,
        None => {
            tracing::warn!("Missing string resource: {}", key.id());
            key.id()
        }
    }
}

/// Strings loaded from settings. Empty entries count as missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTable {
    show_more: Option<String>,
    show_less: Option<String>,
}

impl StringTable {
    pub fn from_settings(settings: &StringsSettings) -> Self {
        fn non_empty(s: &str) -> Option<String> {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Self {
            show_more: non_empty(&settings.show_more),
            show_less: non_empty(&settings.show_less),
        }
    }
}

impl Default for StringTable {
    fn default() -> Self {
        Self::from_settings(&StringsSettings::default())
    }
}

impl Resources for StringTable {
    fn string(&self, key: StringKey) -> Option<&str> {
        match key {
            StringKey::ShowMore => self.show_more.as_deref(),
            StringKey::ShowLess => self.show_less.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_key_follows_state() {
        assert_eq!(StringKey::toggle_for(false), StringKey::ShowMore);
        assert_eq!(StringKey::toggle_for(true), StringKey::ShowLess);
    }

    #[test]
    fn test_default_table_labels() {
        let table = StringTable::default();
        assert_eq!(label(&table, StringKey::ShowMore), "Show more");
        assert_eq!(label(&table, StringKey::ShowLess), "Show less");
    }

    #[test]
    fn test_custom_labels_from_settings() {
        let table = StringTable::from_settings(&StringsSettings {
            show_more: "Mehr anzeigen".into(),
            show_less: "Weniger anzeigen".into(),
        });
        assert_eq!(label(&table, StringKey::ShowMore), "Mehr anzeigen");
        assert_eq!(label(&table, StringKey::ShowLess), "Weniger anzeigen");
    }

    #[test]
    fn test_missing_label_falls_back_to_id() {
        let table = StringTable::from_settings(&StringsSettings {
            show_more: "  ".into(),
            show_less: "Less".into(),
        });
        assert_eq!(table.string(StringKey::ShowMore), None);
        assert_eq!(label(&table, StringKey::ShowMore), "show_more");
    }
}
