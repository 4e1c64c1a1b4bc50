//! Terminal user directory backed by a remote JSON API.
//!
//! ```text
//! ApiClient ──→ UserListController ──→ watch<UsersState> ──→ ui
//!                       ↑                                    │
//!                       └────────── load_users (retry) ──────┘
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod logging;
pub mod ui;
