//! List limit clamping.
//!
//! List endpoints take an optional `?limit=` parameter. Repositories clamp
//! the caller-supplied value so a missing parameter falls back to the
//! default and an absurd one cannot drag the whole table across the wire.

/// Default number of rows returned by list endpoints.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Hard ceiling for caller-supplied limits.
pub const MAX_LIST_LIMIT: i64 = 1000;

/// Rows returned per table by the admin database dump.
pub const DUMP_ROWS_PER_TABLE: i64 = 200;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_limit_uses_default() {
        assert_eq!(clamp_limit(None, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT), 100);
    }

    #[test]
    fn in_range_limit_is_kept() {
        assert_eq!(clamp_limit(Some(5), DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT), 5);
    }

    #[test]
    fn oversized_limit_is_capped() {
        assert_eq!(
            clamp_limit(Some(1_000_000), DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT),
            MAX_LIST_LIMIT
        );
    }

    #[test]
    fn zero_and_negative_limits_floor_to_one() {
        assert_eq!(clamp_limit(Some(0), DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT), 1);
        assert_eq!(clamp_limit(Some(-7), DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT), 1);
    }
}
