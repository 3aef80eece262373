//! Turn orchestration on top of the board.

use tracing::{debug, info, instrument, warn};

use super::{GameStatus, MoveOutcome, MoveReport};
use crate::board::Board;
use crate::core::{
    GameConfig, GameRng, Player, Players, Position, Seat, SelectionSource, MIN_BOARD_SIZE,
};
use crate::error::{ConfigError, ConstructionError, MoveError};

/// A single game between two players on one board.
///
/// Each move runs a fixed sequence:
/// 1. place the current player's symbol
/// 2. apply the adjacency penalty rule at that cell
/// 3. check five in a row for the mover on the post-removal board
/// 4. otherwise check for a full board
///
/// The turn is never advanced inside `make_move`. Callers invoke
/// `next_turn` after a `MoveOutcome::Continue`.
#[derive(Clone, Debug)]
pub struct Game<R = GameRng> {
    board: Board,
    players: Players,
    current: Seat,
    status: GameStatus,
    turn_count: u32,
    rng: R,
}

impl Game<GameRng> {
    /// Start a game with the first player on X and an entropy-seeded RNG.
    pub fn new(
        board_size: usize,
        player_one: impl Into<String>,
        player_two: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        Self::with_rng(
            board_size,
            Players::with_names(player_one, player_two),
            GameRng::from_entropy(),
        )
    }

    /// Start a game from a validated configuration.
    #[instrument(skip_all, fields(board_size = config.board_size, seed = ?config.seed))]
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let players = Players::with_names(config.player_one.as_str(), config.player_two.as_str());
        let game = Self::with_rng(config.board_size, players, rng)?;
        info!(seed = game.rng.seed(), "game created");
        Ok(game)
    }
}

impl<R: SelectionSource> Game<R> {
    /// Start a game with explicit players and selection source.
    pub fn with_rng(board_size: usize, players: Players, rng: R) -> Result<Self, ConstructionError> {
        if board_size < MIN_BOARD_SIZE {
            return Err(ConstructionError::BoardTooSmall {
                size: board_size,
                min: MIN_BOARD_SIZE,
            });
        }
        Ok(Self {
            board: Board::new(board_size)?,
            players,
            current: Seat::First,
            status: GameStatus::InProgress,
            turn_count: 1,
            rng,
        })
    }

    /// Play the current player's symbol at `(row, col)`.
    ///
    /// On error nothing changes and the turn does not advance. On success
    /// the report carries any stones removed by the adjacency rule and the
    /// outcome evaluated after that removal.
    #[instrument(skip(self), fields(player = %self.current, turn = self.turn_count))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<MoveReport, MoveError> {
        if self.status.is_over() {
            warn!(status = ?self.status, "move rejected");
            return Err(MoveError::GameOver);
        }

        let symbol = self.current_player().symbol();
        if let Err(err) = self.board.place_sign(row, col, symbol) {
            if err.is_recoverable() {
                debug!(%err, "move rejected");
            } else {
                warn!(%err, "move rejected");
            }
            return Err(err);
        }

        let placed = Position::new(row, col);
        let removal = self.board.handle_adjacent_count(placed, symbol, &mut self.rng);

        let outcome = if self.board.check_five_in_a_row(symbol) {
            MoveOutcome::Won(symbol)
        } else if self.board.is_full() {
            MoveOutcome::Draw
        } else {
            MoveOutcome::Continue
        };

        if outcome.is_terminal() {
            self.status = outcome.into();
            info!(?outcome, "game over");
        }

        Ok(MoveReport {
            placed,
            symbol,
            removal,
            outcome,
        })
    }

    /// Hand the move to the other player.
    pub fn next_turn(&mut self) {
        self.current = self.current.other();
        self.turn_count += 1;
    }

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Seat of the player to move.
    #[must_use]
    pub const fn current_seat(&self) -> Seat {
        self.current
    }

    /// Player waiting for their turn.
    #[must_use]
    pub fn other_player(&self) -> &Player {
        &self.players[self.current.other()]
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    /// Mutable access for renaming. Symbols cannot be changed.
    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat]
    }

    #[must_use]
    pub const fn players(&self) -> &Players {
        &self.players
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 1-based turn number, incremented by `next_turn`.
    #[must_use]
    pub const fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// The selection source driving removals.
    #[must_use]
    pub const fn rng(&self) -> &R {
        &self.rng
    }
}
