pub mod input;
pub mod render;

pub use input::handle_input;
pub use render::{page_bottom_hints, render};
