//! Validators for various configuration options.

/// Validates and returns parallel processing options.
pub fn try_parallel(parallel: bool) -> anyhow::Result<bool> {
    #[cfg(not(feature = "rayon"))]
    if parallel {
        return Err(anyhow::anyhow!(
            "Parallel processing requires the `rayon` feature to be enabled."
        ));
    }
    Ok(parallel)
}

/// Resolve a sequence length.
///
/// An explicit length wins; otherwise the longest observed sequence is
/// widened by one slot each for the start and stop markers.
pub fn resolve_seq_len(
    explicit: Option<usize>,
    max_observed: usize,
    prepend: bool,
    append: bool,
) -> usize {
    explicit.unwrap_or(max_observed + prepend as usize + append as usize)
}
