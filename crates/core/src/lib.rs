pub mod events;
pub mod render;
pub mod selection;
pub mod session;
