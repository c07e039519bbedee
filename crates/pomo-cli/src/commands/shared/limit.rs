/// `--limit` when given and non-zero, else the configured default.
///
/// Matches how the API treats `?limit=0`.
#[must_use]
pub fn effective_limit(flag: Option<u32>, fallback: u32) -> u32 {
    flag.filter(|limit| *limit > 0).unwrap_or(fallback)
}
