//! Board game catalogue service.
//!
//! The domain owns the board game types and the repository port; inbound
//! adapters speak HTTP and outbound adapters store records in PostgreSQL or
//! in memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
