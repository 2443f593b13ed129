//! Display language selection.

/// Active display language. Content tables are keyed by these names.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    Korean,
    #[default]
    English,
}

impl Locale {
    /// Returns the other locale. Used by the locale toggle key.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Korean => Self::English,
            Self::English => Self::Korean,
        }
    }

    pub const fn is_korean(self) -> bool {
        matches!(self, Self::Korean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_table_keys() {
        assert_eq!(Locale::from_str("korean").unwrap(), Locale::Korean);
        assert_eq!(Locale::from_str("english").unwrap(), Locale::English);
        assert!(Locale::from_str("french").is_err());
        assert_eq!(Locale::Korean.as_ref(), "korean");
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Locale::English.toggled(), Locale::Korean);
        assert_eq!(Locale::English.toggled().toggled(), Locale::English);
    }
}
