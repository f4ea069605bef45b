pub mod hover;
pub mod pointer;

pub use hover::wire_hover_targets;
pub use pointer::{wire_pointer_handlers, PointerWiring};
