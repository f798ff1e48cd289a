//! Per-user session state.
//!
//! A [`SessionState`] is an explicit value owned by the host, one per
//! interactive session. It remembers what was surfaced (recently viewed),
//! what the user picked (selection) and the query in effect (last query).
//! Nothing here survives a process restart.

pub mod feedback;
pub mod focus;
pub mod recent;
pub mod state;
pub mod store;

pub use feedback::{Feedback, Rating};
pub use focus::{focus, Focus};
pub use recent::{RecentlyViewed, RECENTLY_VIEWED_CAPACITY};
pub use state::SessionState;
pub use store::{InMemorySessionStore, SessionStore, DEFAULT_MAX_SESSIONS};
