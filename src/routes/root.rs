//! Greeting handler for the root endpoint.

use tracing::instrument;

use crate::config::GREETING;
use crate::hostname;

/// Root endpoint handler.
///
/// Returns the greeting followed by the container hostname, queried from
/// the operating system at request time. A failed lookup leaves the
/// hostname field empty; the response still succeeds.
#[instrument(name = "root::index")]
pub async fn index() -> String {
    format!("{GREETING}\nContainer hostname: {}\n", hostname::lookup())
}
