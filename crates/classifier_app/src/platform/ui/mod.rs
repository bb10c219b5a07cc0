pub mod fonts;
pub mod layout;
mod render;
pub mod style;
