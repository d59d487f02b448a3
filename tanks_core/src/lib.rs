//! Rules of a two player artillery duel
//!
//! Shells follow a sampled ballistic arc, and a hit only counts when the arc
//! reaches the other tank before it runs into the obstacle between them.

pub mod common;
pub mod utils;

pub use common::{
    environment::Board,
    error::DomainError,
    gamestate::{GameConfig, GameConfigBuilder, GameResult, GameState, TurnOutcome, TurnState},
    interface::{Acknowledge, ColorTag, LineStyle, NullRenderer, Renderer, ShotInput},
    player::PlayerNum,
    shot::{resolve_shot, Shot, ShotResolution},
};
