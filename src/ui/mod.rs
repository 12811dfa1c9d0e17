pub mod controller;
pub mod renderer;
pub mod terminal;
