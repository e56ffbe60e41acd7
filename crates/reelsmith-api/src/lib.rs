//! Reelsmith API — the HTTP surface of the creative agent.
//!
//! One POST endpoint accepts a tagged request (`planVideo`,
//! `generateMetadata`, `chat`), validates it against a strict shape,
//! dispatches to the matching generator, and wraps the result in a
//! uniform success/error envelope.

pub mod dispatch;
pub mod error;
pub mod routes;
pub mod schema;
