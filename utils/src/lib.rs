mod castling;
mod material;
mod position;

pub use castling::{is_castle, Castled};
pub use material::game_phase;
pub use position::Position;
