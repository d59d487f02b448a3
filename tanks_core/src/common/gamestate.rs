use derive_builder::Builder;
use tracing::{debug, info};

use super::{
    constants::{
        BOARD_X_RANGE, BOARD_Y_RANGE, GRAVITY, OBSTACLE_COLOR, SHOT_SAMPLE_COUNT, SHOT_STYLE,
        TANK1_COLOR, TANK2_COLOR,
    },
    environment::Board,
    error::DomainError,
    interface::{Acknowledge, Renderer, ShotInput, ANY_NUMBER},
    player::PlayerNum,
    shot::{resolve_shot_with_samples, Shot},
};

/// Prompt shown between turns after a miss
pub const CONTINUE_PROMPT: &str = "hit enter to continue >";

/// Everything fixed for the length of one game
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(default)]
pub struct GameConfig {
    pub board: Board,
    pub gravity: f64,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// Samples per shot when checking for hits
    pub sample_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: Board::default(),
            gravity: GRAVITY,
            x_range: BOARD_X_RANGE,
            y_range: BOARD_Y_RANGE,
            sample_count: SHOT_SAMPLE_COUNT,
        }
    }
}

impl GameConfig {
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !(self.gravity > 0.0 && self.gravity.is_finite()) {
            return Err(DomainError::NonPositiveGravity(self.gravity));
        }

        self.board.validate()?;

        for (name, (low, high)) in [("x_range", self.x_range), ("y_range", self.y_range)] {
            if !(low < high) {
                return Err(DomainError::Config(format!(
                    "{} must be increasing, got ({}, {})",
                    name, low, high
                )));
            }
        }

        Ok(())
    }
}

impl GameConfigBuilder {
    /// Builds and validates the configuration
    pub fn finish(&self) -> Result<GameConfig, DomainError> {
        let config = self
            .build()
            .map_err(|err| DomainError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting on the given player to fire
    AwaitingShot(PlayerNum),
    /// Someone hit; the game is over
    Resolved(PlayerNum),
}

/// What happened during one player's turn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnOutcome {
    pub player: PlayerNum,
    pub shot: Shot,
    pub hit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Winner(PlayerNum),
    /// Input ran out before anyone hit
    Abandoned { turns: u32 },
}

#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    state: TurnState,
    turns_taken: u32,
}

impl GameState {
    /// Starts a game with player 1 to shoot. Bad boxes or gravity are fatal here.
    pub fn new(config: GameConfig) -> Result<Self, DomainError> {
        config.validate()?;

        Ok(Self {
            config,
            state: TurnState::AwaitingShot(PlayerNum::One),
            turns_taken: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    /// The player due to shoot, or `None` once someone has won
    pub fn current_player(&self) -> Option<PlayerNum> {
        match self.state {
            TurnState::AwaitingShot(player) => Some(player),
            TurnState::Resolved(_) => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerNum> {
        match self.state {
            TurnState::Resolved(player) => Some(player),
            TurnState::AwaitingShot(_) => None,
        }
    }
}

/// Turn sequencing
impl GameState {
    /// Redraws the tanks and the obstacle with `player`'s turn in the title
    pub fn draw_board(&self, renderer: &mut impl Renderer, player: PlayerNum) {
        let board = &self.config.board;

        renderer.clear_board();
        renderer.draw_box(&board.tank1, TANK1_COLOR);
        renderer.draw_box(&board.tank2, TANK2_COLOR);
        renderer.draw_box(&board.obstacle, OBSTACLE_COLOR);
        renderer.set_title(&format!("Player {} turn", player));
        renderer.set_view_bounds(self.config.x_range, self.config.y_range);
        renderer.refresh();
    }

    /// Plays one turn for the current player.
    ///
    /// A hit ends the game, a miss hands the turn over. Returns `None` without
    /// changing anything when the game is already over or `input` is closed.
    pub fn take_turn(
        &mut self,
        input: &mut impl ShotInput,
        renderer: &mut impl Renderer,
    ) -> Result<Option<TurnOutcome>, DomainError> {
        let TurnState::AwaitingShot(player) = self.state else {
            return Ok(None);
        };

        self.draw_board(renderer, player);

        let Some(velocity) =
            input.prompt_number(&format!("Player {} enter velocity >", player), ANY_NUMBER)
        else {
            return Ok(None);
        };
        let Some(angle) =
            input.prompt_number(&format!("Player {} enter angle (deg) >", player), ANY_NUMBER)
        else {
            return Ok(None);
        };

        let board = &self.config.board;
        let shot = Shot {
            origin: board.tank(player).center(),
            velocity,
            angle,
            gravity: self.config.gravity,
        };

        let resolution = resolve_shot_with_samples(
            board.target_of(player),
            &board.obstacle,
            &shot,
            self.config.sample_count,
        )?;

        renderer.draw_line(&resolution.path, SHOT_STYLE);
        renderer.refresh();

        self.turns_taken += 1;
        self.state = if resolution.hit {
            TurnState::Resolved(player)
        } else {
            TurnState::AwaitingShot(player.other())
        };

        debug!(%player, velocity, angle, hit = resolution.hit, "turn finished");

        Ok(Some(TurnOutcome {
            player,
            shot,
            hit: resolution.hit,
        }))
    }

    /// Alternates turns until someone hits, pausing on `ack` after every miss
    pub fn play(
        &mut self,
        input: &mut impl ShotInput,
        ack: &mut impl Acknowledge,
        renderer: &mut impl Renderer,
    ) -> Result<GameResult, DomainError> {
        loop {
            if let TurnState::Resolved(winner) = self.state {
                info!(%winner, turns = self.turns_taken, "game over");
                return Ok(GameResult::Winner(winner));
            }

            let Some(outcome) = self.take_turn(input, renderer)? else {
                info!(turns = self.turns_taken, "input closed, game abandoned");
                return Ok(GameResult::Abandoned {
                    turns: self.turns_taken,
                });
            };

            if !outcome.hit {
                info!(player = %outcome.player, "miss");
                ack.acknowledge(CONTINUE_PROMPT);
            }
        }
    }
}
