pub use board::*;
pub use errors::*;
pub use game::*;
pub use player::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod game;
mod player;
