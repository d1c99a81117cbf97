pub mod recipes;
pub mod state;
