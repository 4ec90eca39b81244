pub mod creature;
pub mod game_object;
pub mod guid;
