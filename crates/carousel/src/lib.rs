pub mod entity;
pub mod layout;
pub mod macros;
pub mod selection;

pub use entity::{Entity, EntityId, EntityName, Face};
pub use layout::{Placement, WheelLayout};
pub use selection::{SelectionController, SelectionState};
