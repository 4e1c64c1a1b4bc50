//! Model-View-Intent (MVI) primitives for the screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Intents come from key presses (reload) and from fetch completion.
//! Reducers are pure; the controller owns the only stored state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
