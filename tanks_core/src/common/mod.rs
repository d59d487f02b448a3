pub mod constants;
pub mod environment;
pub mod error;
pub mod gamestate;
pub mod interface;
pub mod player;
pub mod shot;
pub mod trajectory;
