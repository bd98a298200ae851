/// Tuning knobs for a [`PrefixTree`](crate::PrefixTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of completions returned per prefix.
    pub max_completions: usize,
}

impl Config {
    /// Completion limit used by [`Config::default`].
    pub const DEFAULT_MAX_COMPLETIONS: usize = 3;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_completions: Self::DEFAULT_MAX_COMPLETIONS,
        }
    }
}
