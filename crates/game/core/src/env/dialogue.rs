use crate::dialogue::{ContentBundle, DisplayUnit};
use crate::interaction::InteractionData;
use crate::locale::Locale;

/// Read-only access to a scene's dialogue tables.
///
/// Tables are keyed by locale and then by interaction kind. Implementations
/// report missing entries with `None`; the lookup helpers below supply the
/// fallbacks so that a missing entry never fails an interaction.
pub trait DialogueOracle: Send + Sync {
    /// Display name shown above the dialogue box.
    fn speaker(&self, locale: Locale, kind: &str) -> Option<String>;

    /// Raw content units for `kind`.
    fn content(&self, locale: Locale, kind: &str) -> Option<Vec<DisplayUnit>>;

    /// Typing speed multiplier for this speaker's voice.
    fn speed_multiplier(&self, _kind: &str) -> f32 {
        1.0
    }
}

/// Content for `kind`, or the two-line placeholder when the table has none.
pub fn lookup_content(oracle: &dyn DialogueOracle, locale: Locale, kind: &str) -> ContentBundle {
    oracle
        .content(locale, kind)
        .map(ContentBundle::from_units)
        .filter(|bundle| !bundle.is_empty())
        .unwrap_or_else(|| ContentBundle::placeholder(kind))
}

/// Speaker name for `kind`, falling back to the kind itself.
pub fn lookup_speaker(oracle: &dyn DialogueOracle, locale: Locale, kind: &str) -> String {
    oracle
        .speaker(locale, kind)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| kind.to_string())
}

pub fn resolve(oracle: &dyn DialogueOracle, locale: Locale, kind: &str) -> InteractionData {
    InteractionData {
        speaker: lookup_speaker(oracle, locale, kind),
        content: lookup_content(oracle, locale, kind),
    }
}

/// Oracle without any entries. Every lookup falls back.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyDialogue;

impl DialogueOracle for EmptyDialogue {
    fn speaker(&self, _locale: Locale, _kind: &str) -> Option<String> {
        None
    }

    fn content(&self, _locale: Locale, _kind: &str) -> Option<Vec<DisplayUnit>> {
        None
    }
}
