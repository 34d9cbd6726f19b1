use serde::{Deserialize, Serialize};

/// Per-construct toggles, read fresh on every recompute.
///
/// Every construct defaults on except aliased-URI collection (opt-in) and
/// the fully-hidden reference display mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub inline_code: bool,
    pub block_code: bool,
    pub simple_uri: bool,
    pub headings: bool,
    pub horizontal_line: bool,
    pub aliased_uris: bool,
    pub reference_uris: bool,
    /// When set, the `[ref]` tail of a reference link is hidden entirely
    /// instead of being shown recolored.
    pub reference_uris_fully: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bold: true,
            italic: true,
            strikethrough: true,
            inline_code: true,
            block_code: true,
            simple_uri: true,
            headings: true,
            horizontal_line: true,
            aliased_uris: false,
            reference_uris: true,
            reference_uris_fully: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert!(options.bold);
        assert!(options.reference_uris);
        assert!(!options.aliased_uris);
        assert!(!options.reference_uris_fully);
    }
}
