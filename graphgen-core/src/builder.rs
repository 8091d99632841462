//! Builder utilities for configuring graph generation.
//!
//! Exposes seed selection for [`GraphGenerator`] so random graphs can be
//! reproduced exactly.

use rand::{RngCore, thread_rng};

use crate::generator::GraphGenerator;

/// Configures and constructs [`GraphGenerator`] instances.
///
/// # Examples
/// ```
/// use graphgen_core::GeneratorBuilder;
///
/// let generator = GeneratorBuilder::new().with_seed(17).build();
/// assert_eq!(generator.seed(), 17);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    seed: Option<u64>,
}

impl GeneratorBuilder {
    /// Creates a builder with no fixed seed.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::GeneratorBuilder;
    ///
    /// assert_eq!(GeneratorBuilder::new().seed(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the seed of the generator's random number source.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Applies `seed` when present, keeping the current setting otherwise.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::GeneratorBuilder;
    ///
    /// let builder = GeneratorBuilder::new().with_seed(3).with_optional_seed(None);
    /// assert_eq!(builder.seed(), Some(3));
    /// ```
    #[must_use]
    pub const fn with_optional_seed(self, seed: Option<u64>) -> Self {
        match seed {
            Some(value) => self.with_seed(value),
            None => self,
        }
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Constructs the generator.
    ///
    /// Without a configured seed one is drawn from the thread-local entropy
    /// source; [`GraphGenerator::seed`] reports it so the run can be
    /// replayed.
    #[must_use]
    pub fn build(self) -> GraphGenerator {
        let seed = self.seed.unwrap_or_else(|| thread_rng().next_u64());
        GraphGenerator::new(seed)
    }
}
