//! hostd: a minimal greeting and health-check HTTP service.
//!
//! Exposes two plain-text endpoints: `/` returns a greeting plus the
//! container hostname, and `/health` returns a static `OK` for liveness
//! probes. Everything else is a 404. The library surface exists so
//! integration tests can build the router without binding a socket.

pub mod config;
pub mod error;
pub mod hostname;
pub mod middleware;
pub mod routes;
pub mod shutdown;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
