/// Crate version, reported by the service descriptor.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Human-readable service name.
pub const SERVICE_NAME: &str = "AI Traffic Signal Optimizer";

/// Public API version advertised at `/`.
pub const API_VERSION: &str = "1.0";

/// Shortest green a priority lane can be given (seconds).
pub const MIN_GREEN_SECS: f64 = 15.0;

/// Longest green a priority lane can be given (seconds).
pub const MAX_GREEN_SECS: f64 = 90.0;

/// Fixed yellow interval (seconds).
pub const YELLOW_SECS: f64 = 3.0;

/// Fixed all-red clearance interval (seconds).
pub const ALL_RED_SECS: f64 = 2.0;

/// Share assumed for the priority lane when every lane is empty.
/// Independent of lane count.
pub const ZERO_DENSITY_SHARE: f64 = 0.25;

/// Source tag for lanes the transport fills in.
pub const SOURCE_DEFAULTED: &str = "defaulted";

/// Source tag assumed when a caller omits one.
pub const SOURCE_MANUAL: &str = "manual";

/// Minimum lanes a full optimize request must supply.
pub const MIN_REQUEST_LANES: usize = 2;
