use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Where the `+1` units go when an amount does not divide evenly.
///
/// The names are kebab-case both in serialized form and when parsed from a string,
/// e.g. `from-outside-spaced`. A bare `random` parses with seed 0.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DistributionStrategy {
    /// The first slots get the extra unit.
    FromLeft,
    /// The last slots get the extra unit.
    FromRight,
    /// Extra units cluster around the middle.
    FromCenter,
    /// Extra units are pushed to both edges.
    FromOutside,
    /// Every other slot from the left, then the skipped slots from the right end.
    FromLeftSpaced,
    /// Interleaved from both edges towards the middle.
    #[default]
    FromOutsideSpaced,
    /// Uniformly random slots, drawn from a ChaCha stream seeded with `seed`.
    Random { seed: u64 },
}

impl DistributionStrategy {
    /// Returns true if the placement does not depend on a random source.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, DistributionStrategy::Random { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::DistributionStrategy;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn default_is_outside_spaced() {
        assert_eq!(
            DistributionStrategy::default(),
            DistributionStrategy::FromOutsideSpaced
        );
    }

    #[test]
    fn parses_kebab_case_names() {
        assert_eq!(
            DistributionStrategy::from_str("from-center"),
            Ok(DistributionStrategy::FromCenter)
        );
        assert_eq!(
            DistributionStrategy::from_str("random"),
            Ok(DistributionStrategy::Random { seed: 0 })
        );
        assert!(DistributionStrategy::from_str("sideways").is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for strategy in DistributionStrategy::iter().filter(|s| s.is_deterministic()) {
            let name = strategy.to_string();
            assert_eq!(DistributionStrategy::from_str(&name), Ok(strategy), "{name}");
        }
    }

    #[test]
    fn reads_from_config_json() {
        let strategy: DistributionStrategy = serde_json::from_str("\"from-left-spaced\"").unwrap();
        assert_eq!(strategy, DistributionStrategy::FromLeftSpaced);

        let strategy: DistributionStrategy =
            serde_json::from_str(r#"{"random":{"seed":7}}"#).unwrap();
        assert_eq!(strategy, DistributionStrategy::Random { seed: 7 });
    }
}
