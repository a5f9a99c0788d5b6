//! String resource lookup.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::resources::StringId;

/// Resolves [`StringId`]s to display text.
///
/// Overrides loaded from configuration win over the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    overrides: HashMap<StringId, String>,
}

impl StringCatalog {
    /// Creates a catalog with only the built-in strings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from a `key -> text` table.
    ///
    /// Unknown keys are logged and skipped.
    #[must_use]
    pub fn with_overrides(table: &HashMap<String, String>) -> Self {
        let mut overrides = HashMap::with_capacity(table.len());
        for (key, text) in table {
            match key.parse::<StringId>() {
                Ok(id) => {
                    overrides.insert(id, text.clone());
                }
                Err(e) => warn!(key = %key, error = %e, "Ignoring string override"),
            }
        }
        Self { overrides }
    }

    /// Text for `id`.
    #[must_use]
    pub fn get(&self, id: StringId) -> &str {
        self.overrides
            .get(&id)
            .map_or_else(|| id.default_text(), String::as_str)
    }

    /// Number of active overrides.
    #[must_use]
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        let catalog = StringCatalog::new();
        assert_eq!(catalog.get(StringId::RollLabel), "Roll");
        assert_eq!(catalog.override_count(), 0);
    }

    #[test]
    fn test_override_wins() {
        let table = HashMap::from([
            ("lemon_instruction".to_string(), "Squeeze harder".to_string()),
            ("greeting_from".to_string(), "From Ana".to_string()),
        ]);
        let catalog = StringCatalog::with_overrides(&table);

        assert_eq!(catalog.get(StringId::LemonInstruction), "Squeeze harder");
        assert_eq!(catalog.get(StringId::GreetingFrom), "From Ana");
        assert_eq!(catalog.get(StringId::GreetingMessage), "Happy Birthday Sam!");
    }

    #[test]
    fn test_unknown_keys_skipped() {
        let table = HashMap::from([
            ("lemon_sorbet".to_string(), "???".to_string()),
            ("roll_label".to_string(), "Throw".to_string()),
        ]);
        let catalog = StringCatalog::with_overrides(&table);

        assert_eq!(catalog.override_count(), 1);
        assert_eq!(catalog.get(StringId::RollLabel), "Throw");
    }
}
