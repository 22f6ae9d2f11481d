//! Operating-system hostname lookup.
//!
//! In a container the hostname is typically the container ID, which makes it
//! a useful marker for which instance served a request. The value is read
//! fresh on every call rather than cached; it cannot change during process
//! lifetime, but the lookup is a single near-instant syscall.

/// Returns the system hostname, or an empty string if the lookup fails.
///
/// Lookup failure is non-fatal and never surfaced to the client; the
/// greeting simply renders with an empty hostname field.
pub fn lookup() -> String {
    match hostname::get() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(e) => {
            tracing::debug!(error = %e, "Hostname lookup failed");
            String::new()
        }
    }
}
