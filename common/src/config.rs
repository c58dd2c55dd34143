#[derive(Debug, Default)]
pub struct Config {
    /// Silences the per-range status lines (1) and the final summary (2).
    pub quiet: u8,
    /// Upper bound on the number of addresses a single range may expand to.
    ///
    /// `None` expands everything, including `-.-.-.-`.
    pub limit: Option<u64>,
    /// Print only the number of addresses each range covers.
    pub count_only: bool,
}

impl Config {
    /// Returns `true` when `count` addresses are allowed under the configured limit.
    pub fn within_limit(&self, count: u64) -> bool {
        self.limit.is_none_or(|limit| count <= limit)
    }
}
