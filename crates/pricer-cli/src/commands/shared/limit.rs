/// Compute effective limit with precedence: local arg -> global flag -> fallback.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// Convert a CLI limit into a query limit. Zero is passed through and
/// rejected by the query itself.
pub fn query_limit(limit: u32) -> anyhow::Result<usize> {
    usize::try_from(limit).map_err(|_| anyhow::anyhow!("limit {limit} is too large"))
}
