//! Game session - the single owner of board, active piece and score
//!
//! Every operation runs to completion synchronously and reports what it changed
//! through [`Outcome`]. Rejected moves are `Outcome::Unchanged`, never errors.
//! Once the session is over every mutating operation except [`GameSession::reset`]
//! is a no-op.

use crate::core::{
    try_rotate, ActiveSnapshot, Board, ConfigError, EngineConfig, GameSnapshot, Piece,
    PieceGenerator, Shape, ShapeKind,
};
use crate::outcome::{LockReport, Outcome};
use crate::types::{Direction, GridCell, InteractionState, POINTS_PER_LINE};

/// Seed used when the config does not carry one
const DEFAULT_SEED: u32 = 1;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    config: EngineConfig,
    board: Board,
    pub(crate) active: Option<Piece>,
    generator: PieceGenerator,
    score: u32,
    lines: u32,
    is_over: bool,
    paused: bool,
    started: bool,
    tick_interval_ms: u32,
    /// Monotonic restart counter (increments on reset).
    episode_id: u32,
}

impl GameSession {
    /// Create a session with an empty board. No piece is active until [`start`](Self::start).
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (rows, cols) = config.grid();
        let generator = PieceGenerator::new(config.piece_set, config.seed.unwrap_or(DEFAULT_SEED));
        Ok(Self::build(config, Board::new(rows, cols), generator))
    }

    fn build(config: EngineConfig, board: Board, generator: PieceGenerator) -> Self {
        let tick_interval_ms = config.tick_interval_ms;
        Self {
            config,
            board,
            active: None,
            generator,
            score: 0,
            lines: 0,
            is_over: false,
            paused: false,
            started: false,
            tick_interval_ms,
            episode_id: 0,
        }
    }

    /// Replace the board before the game starts (scripted openings, puzzles).
    ///
    /// The session takes the board's dimensions, including across [`reset`](Self::reset).
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Spawn the first piece. Does nothing if already started.
    pub fn start(&mut self) -> Outcome {
        if self.started {
            return Outcome::Unchanged;
        }
        self.spawn_piece()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this session
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn interaction_state(&self) -> Option<InteractionState> {
        self.active.map(|p| p.state())
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.is_over = self.is_over;
        out.paused = self.paused;
        out.tick_interval_ms = self.tick_interval_ms;
        out.piece_set = self.generator.set();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a random piece from the configured set.
    ///
    /// A blocked spawn ends the game and leaves no active piece.
    pub fn spawn_piece(&mut self) -> Outcome {
        if self.is_over {
            return Outcome::Unchanged;
        }
        let kind = self.generator.next_kind();
        self.spawn_shape(kind.shape())
    }

    /// Spawn a specific tetromino (same rules as [`spawn_piece`](Self::spawn_piece)).
    pub fn spawn_kind(&mut self, kind: ShapeKind) -> Outcome {
        if self.is_over {
            return Outcome::Unchanged;
        }
        self.spawn_shape(kind.shape())
    }

    fn spawn_shape(&mut self, shape: Shape) -> Outcome {
        self.started = true;
        let color = self.generator.next_color();
        let piece = Piece::spawn(shape, color, self.board.cols());

        if !piece.fits(&self.board) {
            self.is_over = true;
            self.active = None;
            return Outcome::GameOver;
        }

        self.active = Some(piece);
        Outcome::Spawned
    }

    /// The active piece if it is under gravity/keyboard control
    fn falling_piece(&self) -> Option<Piece> {
        if self.is_over {
            return None;
        }
        self.active.filter(|p| p.is_falling())
    }

    /// Move the active piece one step.
    ///
    /// A blocked down-move locks the piece; blocked sideways moves are dropped.
    pub fn move_piece(&mut self, direction: Direction) -> Outcome {
        let Some(mut piece) = self.falling_piece() else {
            return Outcome::Unchanged;
        };

        let (dx, dy) = direction.offset();
        if piece.fits_offset(&self.board, dx, dy) {
            piece.x += dx;
            piece.y += dy;
            self.active = Some(piece);
            return Outcome::Moved(piece.origin());
        }

        match direction {
            Direction::Down => self.lock_active(),
            Direction::Left | Direction::Right => Outcome::Unchanged,
        }
    }

    /// Rotate the active piece clockwise, trying the rule's kicks in order
    pub fn rotate(&mut self) -> Outcome {
        let Some(mut piece) = self.falling_piece() else {
            return Outcome::Unchanged;
        };

        let board = &self.board;
        let Some(rotated) = try_rotate(&piece.shape, piece.x, piece.y, |s, x, y| {
            board.can_place(s, x, y)
        }) else {
            return Outcome::Unchanged;
        };

        let (dx, dy) = rotated.kick;
        // The O matrix maps onto itself.
        if rotated.shape == piece.shape && (dx, dy) == (0, 0) {
            return Outcome::Unchanged;
        }
        piece.shape = rotated.shape;
        piece.x += dx;
        piece.y += dy;
        self.active = Some(piece);
        Outcome::Rotated(piece.origin())
    }

    /// Drop the active piece as far as it goes and lock it
    pub fn hard_drop(&mut self) -> Outcome {
        let Some(mut piece) = self.falling_piece() else {
            return Outcome::Unchanged;
        };

        // Rows above the top never block, so start at most one height out.
        piece.y = piece.y.max(-(piece.shape.height() as i32));
        while piece.fits_offset(&self.board, 0, 1) {
            piece.y += 1;
        }
        self.active = Some(piece);
        self.lock_active()
    }

    /// Automatic gravity step. Skipped while paused.
    pub fn tick(&mut self) -> Outcome {
        if self.paused {
            return Outcome::Unchanged;
        }
        self.move_piece(Direction::Down)
    }

    /// Merge the active piece, clear rows, score them and spawn the next piece
    pub(crate) fn lock_active(&mut self) -> Outcome {
        let Some(piece) = self.active.take() else {
            return Outcome::Unchanged;
        };

        self.board.lock(&piece.shape, piece.x, piece.y, piece.color);

        let lines_cleared = self.board.clear_full_rows() as u32;
        let points = lines_cleared.saturating_mul(POINTS_PER_LINE);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines_cleared);

        let settled = ActiveSnapshot {
            state: InteractionState::Settled,
            ..ActiveSnapshot::from(piece)
        };

        let game_over = self.spawn_piece() == Outcome::GameOver;

        Outcome::Locked(LockReport {
            settled,
            lines_cleared,
            points,
            game_over,
        })
    }

    pub fn pause(&mut self) -> Outcome {
        if self.paused {
            return Outcome::Unchanged;
        }
        self.paused = true;
        Outcome::Session
    }

    pub fn resume(&mut self) -> Outcome {
        if !self.paused {
            return Outcome::Unchanged;
        }
        self.paused = false;
        Outcome::Session
    }

    pub fn toggle_pause(&mut self) -> Outcome {
        if self.paused {
            self.resume()
        } else {
            self.pause()
        }
    }

    /// Set the gravity interval, clamped to the configured minimum.
    /// Returns the interval actually applied.
    pub fn set_tick_interval_ms(&mut self, ms: u32) -> u32 {
        self.tick_interval_ms = ms.max(self.config.min_tick_interval_ms);
        self.tick_interval_ms
    }

    /// Shorten the interval by one speed step
    pub fn speed_up(&mut self) -> Outcome {
        let target = self.tick_interval_ms.saturating_sub(self.config.speed_step_ms);
        self.retime(target)
    }

    /// Lengthen the interval by one speed step
    pub fn speed_down(&mut self) -> Outcome {
        let target = self.tick_interval_ms.saturating_add(self.config.speed_step_ms);
        self.retime(target)
    }

    fn retime(&mut self, target: u32) -> Outcome {
        let before = self.tick_interval_ms;
        if self.set_tick_interval_ms(target) == before {
            Outcome::Unchanged
        } else {
            Outcome::Session
        }
    }

    /// Replace the session wholesale and spawn the first piece.
    ///
    /// Board dimensions and the random sequence carry over; everything else
    /// (score, pause, speed) returns to its configured start value.
    pub fn reset(&mut self) -> Outcome {
        let config = self.config.clone();
        let board = Board::new(self.board.rows(), self.board.cols());
        let generator = PieceGenerator::new(config.piece_set, self.generator.seed());
        let next_episode = self.episode_id.wrapping_add(1);

        *self = Self::build(config, board, generator);
        self.episode_id = next_episode;
        self.start()
    }

    /// Origin of the active piece, if any
    pub fn active_origin(&self) -> Option<GridCell> {
        self.active.map(|p| p.origin())
    }
}
