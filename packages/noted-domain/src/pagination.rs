/// Server-side paging bounds, sourced from configuration.
#[derive(Clone, Copy, Debug)]
pub struct PageBounds {
	pub default_limit: u32,
	pub max_limit: u32,
}

/// Resolved LIMIT/OFFSET for one list call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSlice {
	pub limit: u32,
	pub offset: u32,
}

/// Resolves optional `page`/`limit` query values against the configured
/// bounds. Pages start at 1 (zero is treated as the first page). `limit`
/// defaults to `default_limit` and clamps to `max_limit`; an explicit zero
/// is honored as an empty slice.
pub fn resolve(page: Option<u32>, limit: Option<u32>, bounds: PageBounds) -> PageSlice {
	let limit = limit.unwrap_or(bounds.default_limit).min(bounds.max_limit);
	let page = page.unwrap_or(1).max(1);
	let offset = (page - 1).saturating_mul(limit);

	PageSlice { limit, offset }
}
