//! Model-View-Intent (MVI) primitives for form state.
//!
//! Forms use unidirectional data flow: every user action or system event is
//! an intent, and a reducer folds it into the next state.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of one form
//! - **Intent**: Field edits, blurs, submit lifecycle events, timers
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ModelState;
