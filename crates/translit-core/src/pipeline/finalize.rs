use tracing::debug_span;

use super::normalize::nfc;
use crate::script::{DANDA, VIRAMA};

/// Strip residual viramas, turn any remaining danda into a period and
/// recompose.
pub fn finalize(text: &str) -> String {
    let _span = debug_span!("finalize", len = text.len()).entered();
    let cleaned: String = text
        .chars()
        .filter(|&c| c != VIRAMA)
        .map(|c| if c == DANDA { '.' } else { c })
        .collect();
    nfc(&cleaned).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virama_removed() {
        assert_eq!(finalize("k\u{094D}ya"), "kya");
        assert_eq!(finalize("laksh\u{094D}mi"), "lakshmi");
        assert_eq!(finalize("\u{094D}\u{094D}"), "");
    }

    #[test]
    fn test_danda_to_period() {
        assert_eq!(finalize("raam\u{0964}"), "raam.");
    }

    #[test]
    fn test_recomposes() {
        assert_eq!(finalize("e\u{0301}"), "\u{00E9}");
    }

    #[test]
    fn test_whitespace_untouched() {
        assert_eq!(finalize("raam  raam\n\traam"), "raam  raam\n\traam");
    }
}
