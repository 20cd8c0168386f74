//! Shared constants for ideadup.
//!
//! Defaults mirror the parameters the intake pipeline has always run with.

/// Default maximum cosine distance between two neighbours in coarse clustering.
pub const DEFAULT_CLUSTER_EPS: f64 = 0.25;

/// Default minimum neighbourhood size (the point itself included) to seed a coarse cluster.
pub const DEFAULT_CLUSTER_MIN_SAMPLES: usize = 2;

/// Default Jaccard percentage at which two keyword sets land in the same subgroup.
pub const DEFAULT_KEYWORD_THRESHOLD: f64 = 20.0;

/// Default number of ranked ideas returned by a match query.
pub const DEFAULT_MATCH_TOP_N: usize = 15;

/// Maximum number of ranked ideas a single match query may request (DoS protection).
pub const MAX_TOP_N: usize = 1000;

/// Maximum number of ideas accepted in one batch insert (DoS protection).
pub const MAX_BATCH_IDEAS: usize = 5000;

/// Stand-in keyword for ideas with no extracted keywords.
///
/// Keeps Jaccard comparisons defined: two keyword-less ideas compare as identical.
pub const EMPTY_KEYWORDS_SENTINEL: &str = "АРГЕС";

/// Label the coarse clusterer assigns to ideas outside every dense region.
pub const NOISE_LABEL: i64 = -1;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 8;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;
