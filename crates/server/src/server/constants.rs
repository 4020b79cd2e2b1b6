/// Placeholder stored when a resource is created without a `type`.
pub const DEFAULT_RESOURCE_TYPE: &str = "Otro";
/// Placeholder stored when a resource is created without a `platform`.
pub const DEFAULT_RESOURCE_PLATFORM: &str = "Otro";

pub const USER_NAME_LENGTH_LIMIT: usize = 100;
pub const RESOURCE_TITLE_LENGTH_LIMIT: usize = 255;
pub const RESOURCE_URL_LENGTH_LIMIT: usize = 2048;

/// How often stale per-client rate limiter entries are evicted.
pub const RATE_LIMITER_HOUSEKEEPING_SECS: u64 = 60;
