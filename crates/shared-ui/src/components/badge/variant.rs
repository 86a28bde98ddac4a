use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tailwind_fuse::*;

/// Classes shared by every badge before the variant classes are applied.
pub const BADGE_BASE: &str = "inline-flex items-center rounded-md border px-2.5 py-0.5 text-xs font-semibold transition-colors focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2";

/// Visual variant for badges.
// `TwVariant` also implements `Clone` and `Copy`.
#[derive(Debug, PartialEq, Eq, Hash, Serialize, Deserialize, TwVariant)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[tw(
        default,
        class = "border-transparent bg-primary text-primary-foreground shadow hover:bg-primary/80"
    )]
    Default,
    #[tw(class = "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80")]
    Secondary,
    #[tw(
        class = "border-transparent bg-destructive text-destructive-foreground shadow hover:bg-destructive/80"
    )]
    Destructive,
    #[tw(class = "text-foreground")]
    Outline,
}

/// All badge variants in display order.
pub const ALL_VARIANTS: &[BadgeVariant] = &[
    BadgeVariant::Default,
    BadgeVariant::Secondary,
    BadgeVariant::Destructive,
    BadgeVariant::Outline,
];

impl BadgeVariant {
    /// Key used in markup, config files and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }

    /// Parse a variant key, falling back to [`BadgeVariant::Default`].
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_else(|err: ParseBadgeVariantError| {
            tracing::warn!(key = %err.key, "unknown badge variant, using default");
            BadgeVariant::default()
        })
    }
}

impl fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a badge variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBadgeVariantError {
    pub key: String,
}

impl fmt::Display for ParseBadgeVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown badge variant: {:?}", self.key)
    }
}

impl std::error::Error for ParseBadgeVariantError {}

impl FromStr for BadgeVariant {
    type Err = ParseBadgeVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        ALL_VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| ParseBadgeVariantError {
                key: key.to_string(),
            })
    }
}

/// Resolve the full class string for a variant: base classes merged with the
/// variant's own classes.
pub fn badge_variants(variant: BadgeVariant) -> String {
    tw_merge!(BADGE_BASE, variant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_variant_is_default() {
        assert_eq!(BadgeVariant::default(), BadgeVariant::Default);
    }

    #[test]
    fn as_str_roundtrip() {
        for variant in ALL_VARIANTS {
            assert_eq!(variant.as_str().parse::<BadgeVariant>(), Ok(*variant));
            assert_eq!(BadgeVariant::from_key(&variant.to_string()), *variant);
        }
    }

    #[test]
    fn from_str_ignores_case_and_whitespace() {
        assert_eq!(" Destructive ".parse(), Ok(BadgeVariant::Destructive));
        assert_eq!("OUTLINE".parse(), Ok(BadgeVariant::Outline));
    }

    #[test]
    fn from_str_rejects_unknown_keys() {
        let err = "success".parse::<BadgeVariant>().unwrap_err();
        assert_eq!(err.key, "success");
        assert_eq!(err.to_string(), "unknown badge variant: \"success\"");
        assert!("".parse::<BadgeVariant>().is_err());
    }

    #[test]
    fn from_key_unknown_falls_back() {
        assert_eq!(BadgeVariant::from_key("success"), BadgeVariant::Default);
        assert_eq!(BadgeVariant::from_key(""), BadgeVariant::Default);
    }

    #[test]
    fn serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&BadgeVariant::Destructive).unwrap();
        assert_eq!(json, "\"destructive\"");
        let parsed: BadgeVariant = serde_json::from_str("\"secondary\"").unwrap();
        assert_eq!(parsed, BadgeVariant::Secondary);
    }

    #[test]
    fn resolved_classes_include_base_and_variant() {
        for variant in ALL_VARIANTS {
            let class = badge_variants(*variant);
            let tokens: Vec<&str> = class.split_whitespace().collect();
            assert!(tokens.contains(&"inline-flex"), "{class}");
            assert!(tokens.contains(&"rounded-md"), "{class}");
            for token in variant.as_class().split_whitespace() {
                assert!(tokens.contains(&token), "{token} missing from {class}");
            }
        }
    }

    #[test]
    fn resolved_classes_are_deterministic() {
        for variant in ALL_VARIANTS {
            assert_eq!(badge_variants(*variant), badge_variants(*variant));
        }
    }

    #[test]
    fn variants_resolve_to_distinct_classes() {
        let classes: std::collections::HashSet<String> =
            ALL_VARIANTS.iter().map(|v| badge_variants(*v)).collect();
        assert_eq!(classes.len(), ALL_VARIANTS.len());
    }
}
