pub mod piece_values;
pub mod scores;
pub mod traits;

pub use piece_values::PieceValues;
pub use traits::{EvalBoard, Wing, HCE};
