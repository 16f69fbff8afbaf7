//! Builder for configuring the barcode engine.

use crate::{engine::Zeroth, ratio::RatioStrategy};

/// Configures and constructs [`Zeroth`] instances.
///
/// # Examples
/// ```
/// use zeroth_core::{RatioStrategy, ZerothBuilder};
///
/// let zeroth = ZerothBuilder::new()
///     .with_ratio_strategy(RatioStrategy::Replay)
///     .build();
/// assert_eq!(zeroth.ratio_strategy(), RatioStrategy::Replay);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZerothBuilder {
    ratio_strategy: RatioStrategy,
}

impl ZerothBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use zeroth_core::{RatioStrategy, ZerothBuilder};
    ///
    /// let builder = ZerothBuilder::new();
    /// assert_eq!(builder.ratio_strategy(), RatioStrategy::Traversal);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strategy used to compute per-bar bipartitions.
    ///
    /// Both strategies produce identical output; `Replay` is the defining
    /// computation and `Traversal` the fast path.
    #[must_use]
    pub fn with_ratio_strategy(mut self, strategy: RatioStrategy) -> Self {
        self.ratio_strategy = strategy;
        self
    }

    /// Returns the currently configured ratio strategy.
    #[must_use]
    pub fn ratio_strategy(&self) -> RatioStrategy {
        self.ratio_strategy
    }

    /// Constructs a [`Zeroth`] instance.
    #[must_use]
    pub fn build(self) -> Zeroth {
        Zeroth::new(self.ratio_strategy)
    }
}
