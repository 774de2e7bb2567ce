//! Loader configuration.

/// Options controlling how strictly raws are validated while loading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Reject words whose compound flags point at an empty form
    /// (for example `FRONT_COMPOUND_NOUN_PLUR` on a noun with no plural).
    ///
    /// Off by default: such words load, and the composer skips the empty
    /// form when building candidates.
    pub strict_compound_forms: bool,
}

impl LoaderConfig {
    /// Creates the default, permissive configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that rejects empty compound forms.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict_compound_forms: true,
        }
    }

    /// Builder method to enable/disable empty compound form rejection.
    #[must_use]
    pub fn with_strict_compound_forms(mut self, strict: bool) -> Self {
        self.strict_compound_forms = strict;
        self
    }
}
