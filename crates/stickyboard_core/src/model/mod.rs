//! Board and task domain model.
//!
//! # Responsibility
//! - Define the persisted shapes of boards and task notes.
//! - Own the fixed size-bucket table and the card color palette.
//!
//! # Invariants
//! - Every board and task is identified by a string id that is never reused.
//! - Tasks are square: `width == height` for every note this crate creates.
//!
//! # See also
//! - `crate::state` for mutation rules over these shapes.

pub mod board;
pub mod size;
pub mod task;
