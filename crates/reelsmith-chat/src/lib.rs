//! Reelsmith — Chat Response bounded context.
//!
//! Composes a single reply from a free-text message plus a lightweight
//! snapshot of the caller's workspace. Stateless per call; any transcript
//! lives with the caller.

pub mod prompt;
pub mod responder;
