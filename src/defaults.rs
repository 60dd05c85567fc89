//! Default values for nexus-provision configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::time::Duration;

/// Default base URL of the repository manager.
///
/// Can be overridden by the `--base-url` CLI flag or the `NEXUS_BASE_URL`
/// environment variable.
pub const BASE_URL: &str = "http://localhost:8081";

/// Default username for the management API.
pub const USERNAME: &str = "admin";

/// Environment variable holding the base URL.
pub const BASE_URL_ENV: &str = "NEXUS_BASE_URL";

/// Environment variable holding the username.
pub const USERNAME_ENV: &str = "NEXUS_USER";

/// Environment variable holding the password or token.
pub const PASSWORD_ENV: &str = "NEXUS_PASSWORD";

/// Request timeout for every management API call, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum age of cached artifact content before revalidation.
pub const CONTENT_MAX_AGE: u32 = 14400;

/// Maximum age of cached repository metadata before revalidation.
pub const METADATA_MAX_AGE: u32 = 14400;

/// Time-to-live for negative cache entries, in minutes.
pub const NEGATIVE_CACHE_TTL: u32 = 1440;

/// Maximum age of cached NuGet query results, in seconds.
pub const NUGET_QUERY_CACHE_MAX_AGE: u32 = 3600;

/// Pause between consecutive create calls, to stay gentle on the server.
pub const CREATE_THROTTLE: Duration = Duration::from_millis(100);
