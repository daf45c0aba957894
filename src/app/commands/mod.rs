pub mod check;
pub mod generate;
pub mod phases;
pub mod project;
pub mod render;
