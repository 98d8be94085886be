//! Intent / state / reducer traits behind the temperature menu.
//!
//! ```text
//! line ──→ Intent ──→ Reducer ──→ State ──→ prompt
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
