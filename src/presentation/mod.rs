// Presentation layer - Terminal delivery
pub mod card;
pub mod clock_face;
pub mod input;
pub mod screen;
pub mod terminal;
