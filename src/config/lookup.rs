//! Lookup defaults

use serde::Deserialize;

use crate::domain::supplement::LookupOptions;

/// Defaults applied when a caller does not pass explicit options
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupConfig {
    /// Prefer the Next cycle when it is published
    #[serde(default)]
    pub get_next_cycle: bool,
}

impl LookupConfig {
    /// Lookup options carrying these defaults
    pub fn options(&self) -> LookupOptions {
        LookupOptions {
            get_next_cycle: self.get_next_cycle,
        }
    }
}
