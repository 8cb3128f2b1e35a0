pub mod input;
pub mod movement;
pub mod proximity;
