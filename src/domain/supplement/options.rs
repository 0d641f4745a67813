//! Per-call lookup options.

use serde::{Deserialize, Serialize};

use super::cycle::CycleLabel;

/// Options for a supplement lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupOptions {
    /// Query the Next cycle when it is published, otherwise the Current one.
    #[serde(default)]
    pub get_next_cycle: bool,
}

impl LookupOptions {
    /// Options that prefer the Next cycle.
    pub fn next_cycle() -> Self {
        Self {
            get_next_cycle: true,
        }
    }

    /// The cycle these options ask for first.
    pub fn preferred_cycle(&self) -> CycleLabel {
        if self.get_next_cycle {
            CycleLabel::Next
        } else {
            CycleLabel::Current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_current_cycle() {
        let options = LookupOptions::default();
        assert!(!options.get_next_cycle);
        assert_eq!(options.preferred_cycle(), CycleLabel::Current);
    }

    #[test]
    fn next_cycle_prefers_next() {
        assert_eq!(LookupOptions::next_cycle().preferred_cycle(), CycleLabel::Next);
    }

    #[test]
    fn deserializes_from_camel_case_with_default() {
        let options: LookupOptions = serde_json::from_str(r#"{"getNextCycle":true}"#).unwrap();
        assert!(options.get_next_cycle);

        let options: LookupOptions = serde_json::from_str("{}").unwrap();
        assert!(!options.get_next_cycle);
    }
}
