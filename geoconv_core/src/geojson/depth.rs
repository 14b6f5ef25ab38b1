use crate::{DEFAULT_MAX_DEPTH, GeoJsonError, Result};

/// Nesting levels the reader passes without descending: the object of a geometry and the array
/// of a single position.
const UNCOUNTED_LEVELS: usize = 2;

/// Remaining nesting budget while descending into a JSON tree.
///
/// Every reader that steps into a nested array or object calls [`DepthGuard::descend`] first, so
/// adversarial input fails with [`GeoJsonError::DepthLimitExceeded`] instead of exhausting the
/// stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthGuard {
	limit: usize,
	remaining: usize,
}

impl DepthGuard {
	pub fn new(limit: usize) -> Self {
		Self {
			limit,
			remaining: limit,
		}
	}

	/// A guard for raw JSON nesting, which also counts the levels the reader passes for free.
	/// Exhausting it still reports `limit`.
	pub(crate) fn for_raw_nesting(limit: usize) -> Self {
		Self {
			limit,
			remaining: limit.saturating_add(UNCOUNTED_LEVELS),
		}
	}

	/// Whether `depth` levels of raw JSON nesting fit into [`DepthGuard::for_raw_nesting`].
	pub(crate) fn allows_raw_nesting(limit: usize, depth: usize) -> bool {
		depth <= limit.saturating_add(UNCOUNTED_LEVELS)
	}

	pub fn descend(self) -> Result<Self> {
		if self.remaining == 0 {
			return Err(GeoJsonError::DepthLimitExceeded(self.limit));
		}
		Ok(Self {
			limit: self.limit,
			remaining: self.remaining - 1,
		})
	}
}

impl Default for DepthGuard {
	fn default() -> Self {
		Self::new(DEFAULT_MAX_DEPTH)
	}
}
