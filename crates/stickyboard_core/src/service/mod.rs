//! Core use-case services.
//!
//! # Responsibility
//! - Route user gestures into state mutations scoped to the active board.
//! - Write the full state snapshot back to the store after every change.
//!
//! # See also
//! - `crate::state` for the mutation rules themselves.

pub mod board_service;
