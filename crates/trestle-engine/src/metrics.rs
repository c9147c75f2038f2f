//! Per-search performance metrics.
//!
//! [`SearchMetrics`] captures how much of the configuration graph a
//! single path search touched, for logging and benchmarking.

/// Counters collected during one path search.
///
/// Durations are in microseconds. The search fills these in as it runs;
/// the session keeps the most recent set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// Configurations taken off the frontier and expanded.
    pub expanded: usize,
    /// Distinct configurations discovered, including the start.
    pub discovered: usize,
    /// Number of moves in the returned path, if one was found.
    pub path_len: Option<usize>,
    /// Wall-clock time for the whole search, in microseconds.
    pub elapsed_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = SearchMetrics::default();
        assert_eq!(m.expanded, 0);
        assert_eq!(m.discovered, 0);
        assert_eq!(m.path_len, None);
        assert_eq!(m.elapsed_us, 0);
    }
}
