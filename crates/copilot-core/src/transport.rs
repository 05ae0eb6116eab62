//! HTTP plumbing shared by the remote embedding and generation providers.

use std::time::Duration;

use reqwest::blocking::Client;

/// Blocking HTTP client with a bounded request timeout.
///
/// A client that cannot be built is reported through `unavailable`, which
/// receives `"{provider}: {cause}"` and maps it into the caller's error type.
pub fn blocking_client<E>(
    provider: &str,
    timeout_ms: u64,
    unavailable: impl FnOnce(String) -> E,
) -> Result<Client, E> {
    Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()
        .map_err(|e| unavailable(format!("{provider}: {e}")))
}

/// Join a base URL and a path without doubling slashes.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
