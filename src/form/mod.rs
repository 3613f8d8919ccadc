//! Form state engine.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Per-field and aggregate form state
//! - `intent.rs` - Field edits, blurs and submit lifecycle events
//! - `reducer.rs` - Pure state transitions against a schema
//! - `controller.rs` - Owner that dispatches intents and reports outcomes
//!
//! ```text
//! Idle ──submit(valid)──→ Submitting ──success──→ Idle (reset)
//!  │                          ├──fieldError──→ Idle (error shown)
//!  └──submit(invalid)──→ Idle └──unknown────→ Idle (unchanged)
//!      (all touched)
//! ```

mod controller;
mod error;
mod intent;
mod outcome;
mod reducer;
mod state;

pub use controller::FormController;
pub use error::FormError;
pub use intent::FormIntent;
pub use outcome::{SubmitAttempt, SubmitOutcome};
pub use reducer::FormReducer;
pub use state::{FieldState, FormState};
