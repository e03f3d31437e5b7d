// Draft domain module
// Contains the nomination entity, turn order and the rules that validate a pick

#![allow(clippy::module_inception)]

pub mod board;
pub mod draft;
pub mod errors;
pub mod events;
pub mod turn_order;
pub mod value_objects;

// Re-export main types for convenience
pub use board::{DraftBoard, Nomination};
pub use draft::Draft;
pub use errors::DraftError;
pub use events::DraftEvent;
pub use turn_order::{PickSlot, TurnOrder};
pub use value_objects::DraftStatus;
