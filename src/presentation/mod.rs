// Presentation layer - Terminal output
pub mod renderer;
