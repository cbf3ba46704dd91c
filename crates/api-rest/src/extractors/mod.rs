//! Custom Axum extractors.
//!
//! Schema validation happens here, before a handler body runs.

pub mod player_id;
pub mod request_context;
pub mod validated_json;
pub mod validated_query;

pub use player_id::PlayerIdPath;
pub use request_context::RequestContext;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
