use crate::LexiconError;

/// Similarity a key must reach to be offered as a suggestion.
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Settings for [`resolve`](crate::resolve).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverConfig {
    /// Minimum similarity ratio for a suggestion, in `[0, 1]`.
    pub cutoff: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

impl ResolverConfig {
    /// Build a config with a custom cutoff, rejecting values outside `[0, 1]`
    /// (including NaN).
    pub fn with_cutoff(cutoff: f64) -> Result<Self, LexiconError> {
        if !(0.0..=1.0).contains(&cutoff) {
            return Err(LexiconError::InvalidCutoff(cutoff));
        }
        Ok(Self { cutoff })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cutoff() {
        assert_eq!(ResolverConfig::default().cutoff, 0.6);
    }

    #[test]
    fn cutoff_range() {
        assert!(ResolverConfig::with_cutoff(0.0).is_ok());
        assert!(ResolverConfig::with_cutoff(1.0).is_ok());
        assert!(matches!(
            ResolverConfig::with_cutoff(1.5),
            Err(LexiconError::InvalidCutoff(_))
        ));
        assert!(ResolverConfig::with_cutoff(-0.1).is_err());
        assert!(ResolverConfig::with_cutoff(f64::NAN).is_err());
    }
}
