//! Personalisation-aware aggregation backend.
//!
//! Sits between a client application and several third-party content APIs,
//! merging stored user preferences with upstream results into a uniform
//! response shape, with a deterministic mock-data fallback whenever an
//! upstream call fails or no credentials are configured.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use doc::ApiDoc;
pub use middleware::Trace;
