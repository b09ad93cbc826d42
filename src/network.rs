//! Network URL constants for the Pokédex SDK.

/// Default REST API base URL.
///
/// All operation paths are relative to this prefix; in the reference
/// deployment the serving origin proxies `/api` to the backend process.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";
