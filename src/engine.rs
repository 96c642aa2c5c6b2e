//! Game engine owning one session of five-in-a-row
//!
//! The engine holds the board, whose turn it is, the game status and the
//! mode. The front end never mutates any of these; it forwards clicks to
//! [`GameEngine::apply_move`] and renders the returned [`MoveOutcome`] or a
//! full [`Snapshot`].
//!
//! In [`Mode::HumanVsAi`] the automated opponent plays `O`, moves first on
//! every new game, and answers each accepted human move inline before
//! `apply_move` returns. A single click can therefore place two markers.
//!
//! # Example
//!
//! ```
//! use gomoku::{GameEngine, GameStatus, Mode, Player};
//!
//! let mut engine = GameEngine::new(Mode::HumanVsHuman);
//! for col in 0..4 {
//!     engine.apply_move(0, col).unwrap();
//!     engine.apply_move(1, col).unwrap();
//! }
//! let outcome = engine.apply_move(0, 4).unwrap();
//! assert_eq!(outcome.status, GameStatus::Won(Player::X));
//! ```

use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Player, Pos, WIN_LENGTH};
use crate::config::GameConfig;
use crate::error::MoveError;
use crate::opponent::RandomOpponent;
use crate::rules::{find_winning_line, has_five_at_pos};

/// Who controls the `O` seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Two humans share the board (hotseat)
    #[default]
    HumanVsHuman,
    /// `O` is played by the random opponent
    HumanVsAi,
}

impl Mode {
    /// Check if `player` is controlled by the automated opponent in this mode
    #[inline]
    pub fn is_automated(self, player: Player) -> bool {
        self == Mode::HumanVsAi && player == Player::O
    }
}

/// Outcome state of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    /// Board filled with no five-in-a-row
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// One marker placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub pos: Pos,
    pub player: Player,
    /// Placed by the random opponent rather than a human
    pub automated: bool,
}

/// Incremental result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The human's placement, followed by the opponent's reply if one was made
    pub placements: Vec<Placement>,
    pub status: GameStatus,
    /// Player to move next (the last mover once the game is over)
    pub turn: Player,
}

/// Full view of the engine state for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub turn: Player,
    pub status: GameStatus,
    pub mode: Mode,
    pub last_move: Option<Pos>,
    pub winning_line: Option<[Pos; WIN_LENGTH]>,
    pub move_count: usize,
}

impl Snapshot {
    /// Status line shown to players
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::InProgress if self.mode.is_automated(self.turn) => "AI's turn".to_string(),
            GameStatus::InProgress => format!("Player {}'s turn", self.turn),
            GameStatus::Won(winner) if self.mode.is_automated(winner) => "AI wins!".to_string(),
            GameStatus::Won(winner) => format!("{} wins!", winner),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}

/// Engine for a single game session.
pub struct GameEngine {
    board: Board,
    turn: Player,
    status: GameStatus,
    mode: Mode,
    opponent: RandomOpponent,
    last_move: Option<Pos>,
    winning_line: Option<[Pos; WIN_LENGTH]>,
    move_count: usize,
}

impl GameEngine {
    /// Start a new game in `mode` with an OS-seeded opponent.
    pub fn new(mode: Mode) -> Self {
        Self::with_config(&GameConfig::new(mode))
    }

    /// Start a new game from a session configuration.
    pub fn with_config(config: &GameConfig) -> Self {
        let opponent = match config.seed {
            Some(seed) => RandomOpponent::new(seed),
            None => RandomOpponent::from_entropy(),
        };

        let mut engine = Self {
            board: Board::new(),
            turn: Player::X,
            status: GameStatus::InProgress,
            mode: config.mode,
            opponent,
            last_move: None,
            winning_line: None,
            move_count: 0,
        };
        engine.initialize(config.mode);
        engine
    }

    /// Begin a fresh game in `mode`.
    ///
    /// In [`Mode::HumanVsAi`] the opponent places its first marker before
    /// this returns.
    #[instrument(skip(self))]
    pub fn initialize(&mut self, mode: Mode) -> Snapshot {
        self.board = Board::new();
        self.turn = Player::X;
        self.status = GameStatus::InProgress;
        self.mode = mode;
        self.last_move = None;
        self.winning_line = None;
        self.move_count = 0;

        if mode == Mode::HumanVsAi {
            // Opponent opens the game
            self.turn = Player::O;
            self.automated_move();
        }

        info!(?mode, "new game");
        self.snapshot()
    }

    /// Start over with the current mode. Always allowed, even after a win.
    pub fn reset(&mut self) -> Snapshot {
        self.initialize(self.mode)
    }

    /// Place the current player's marker at `(row, col)`.
    ///
    /// Rejected moves leave the engine untouched and return the reason.
    /// When the next seat is automated its reply is made before returning.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: i32, col: i32) -> Result<MoveOutcome, MoveError> {
        if self.status.is_over() {
            debug!("move after game over ignored");
            return Err(MoveError::GameOver);
        }

        let pos = Pos::try_from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;

        if !self.board.is_empty(pos) {
            debug!(?pos, "cell already taken");
            return Err(MoveError::CellOccupied(pos));
        }

        let mut placements = vec![self.place(pos, false)];

        if self.status == GameStatus::InProgress && self.mode.is_automated(self.turn) {
            placements.extend(self.automated_move());
        }

        Ok(MoveOutcome {
            placements,
            status: self.status,
            turn: self.turn,
        })
    }

    /// Let the random opponent move for the current player.
    ///
    /// Only reached while the game is in progress and the board has room; a
    /// full board ends the game as a draw before the turn passes.
    fn automated_move(&mut self) -> Option<Placement> {
        match self.opponent.choose(&self.board) {
            Some(pos) => Some(self.place(pos, true)),
            None => {
                warn!("no empty cell for automated move");
                self.status = GameStatus::Draw;
                None
            }
        }
    }

    /// Put the current player's marker at `pos` and resolve the result.
    fn place(&mut self, pos: Pos, automated: bool) -> Placement {
        let player = self.turn;
        self.board.place(pos, player);
        self.last_move = Some(pos);
        self.move_count += 1;
        debug!(?pos, %player, automated, "placed");

        if has_five_at_pos(&self.board, pos, player) {
            self.status = GameStatus::Won(player);
            self.winning_line = find_winning_line(&self.board, pos, player);
            info!(%player, moves = self.move_count, "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!(moves = self.move_count, "board full, draw");
        } else {
            self.turn = player.opponent();
        }

        Placement {
            pos,
            player,
            automated,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            turn: self.turn,
            status: self.status,
            mode: self.mode,
            last_move: self.last_move,
            winning_line: self.winning_line,
            move_count: self.move_count,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, BOARD_SIZE, TOTAL_CELLS};

    fn pvp() -> GameEngine {
        GameEngine::new(Mode::HumanVsHuman)
    }

    fn vs_ai(seed: u64) -> GameEngine {
        GameEngine::with_config(&GameConfig::new(Mode::HumanVsAi).with_seed(seed))
    }

    /// X plays the given cells, O answers on row 9 from the left.
    fn play_x(engine: &mut GameEngine, cells: &[(i32, i32)]) -> MoveOutcome {
        let mut last = None;
        for (i, &(r, c)) in cells.iter().enumerate() {
            if i > 0 {
                engine.apply_move(9, i as i32 - 1).unwrap();
            }
            last = Some(engine.apply_move(r, c).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn test_initialize_pvp() {
        let engine = pvp();
        let snap = engine.snapshot();
        assert!(snap.board.is_board_empty());
        assert_eq!(snap.turn, Player::X);
        assert_eq!(snap.status, GameStatus::InProgress);
        assert_eq!(snap.status_text(), "Player X's turn");
    }

    #[test]
    fn test_initialize_ai_moves_first() {
        let engine = vs_ai(42);
        let snap = engine.snapshot();
        assert_eq!(snap.board.stone_count(), 1);
        let pos = snap.last_move.unwrap();
        assert_eq!(snap.board.get(pos), Cell::Occupied(Player::O));
        assert_eq!(snap.turn, Player::X);
        assert_eq!(snap.status_text(), "Player X's turn");
    }

    #[test]
    fn test_horizontal_win() {
        let mut engine = pvp();
        let outcome = play_x(&mut engine, &[(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(outcome.status, GameStatus::InProgress);

        engine.apply_move(9, 5).unwrap();
        let outcome = engine.apply_move(0, 4).unwrap();
        assert_eq!(outcome.status, GameStatus::Won(Player::X));
        assert_eq!(outcome.turn, Player::X);
        assert_eq!(engine.snapshot().status_text(), "X wins!");

        let line = engine.snapshot().winning_line.unwrap();
        assert_eq!(line[0], Pos::new(0, 0));
        assert_eq!(line[4], Pos::new(0, 4));
    }

    #[test]
    fn test_win_placed_out_of_order() {
        let mut engine = pvp();
        let outcome = play_x(&mut engine, &[(5, 1), (5, 5), (5, 2), (5, 4), (5, 3)]);
        assert_eq!(outcome.status, GameStatus::Won(Player::X));
    }

    #[test]
    fn test_o_can_win() {
        let mut engine = pvp();
        // X scatters, O builds a column
        let x_moves = [(0, 0), (0, 2), (0, 4), (0, 6), (0, 8)];
        for (i, &(r, c)) in x_moves.iter().enumerate() {
            engine.apply_move(r, c).unwrap();
            let outcome = engine.apply_move(3 + i as i32, 7).unwrap();
            if i == 4 {
                assert_eq!(outcome.status, GameStatus::Won(Player::O));
            } else {
                assert_eq!(outcome.status, GameStatus::InProgress);
            }
        }
        assert_eq!(engine.snapshot().status_text(), "O wins!");
    }

    #[test]
    fn test_four_is_not_a_win() {
        let mut engine = pvp();
        let outcome = play_x(&mut engine, &[(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert!(!engine.is_over());
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut engine = pvp();
        for (r, c) in [(-1, 0), (10, 0), (0, 10), (0, -1)] {
            assert_eq!(
                engine.apply_move(r, c),
                Err(MoveError::OutOfBounds { row: r, col: c })
            );
        }
        assert!(engine.board().is_board_empty());
        assert_eq!(engine.turn(), Player::X);
    }

    #[test]
    fn test_occupied_rejected() {
        let mut engine = pvp();
        engine.apply_move(4, 4).unwrap();
        assert_eq!(
            engine.apply_move(4, 4),
            Err(MoveError::CellOccupied(Pos::new(4, 4)))
        );
        assert_eq!(engine.board().get(Pos::new(4, 4)), Cell::Occupied(Player::X));
        assert_eq!(engine.turn(), Player::O);
    }

    #[test]
    fn test_turn_alternates() {
        let mut engine = pvp();
        let mut expected = Player::X;
        for col in 0..BOARD_SIZE as i32 {
            assert_eq!(engine.turn(), expected);
            let outcome = engine.apply_move(col % 3, col).unwrap();
            assert_eq!(outcome.placements[0].player, expected);
            expected = expected.opponent();
            assert_eq!(outcome.turn, expected);
        }
    }

    #[test]
    fn test_moves_after_win_ignored() {
        let mut engine = pvp();
        play_x(&mut engine, &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]);
        let before = engine.snapshot();

        assert_eq!(engine.apply_move(5, 5), Err(MoveError::GameOver));
        assert_eq!(engine.apply_move(-3, 42), Err(MoveError::GameOver));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_reset_after_win() {
        let mut engine = pvp();
        play_x(&mut engine, &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]);
        assert!(engine.is_over());

        let snap = engine.reset();
        assert!(snap.board.is_board_empty());
        assert_eq!(snap.turn, Player::X);
        assert_eq!(snap.status, GameStatus::InProgress);
        assert_eq!(snap.winning_line, None);
        assert_eq!(snap.move_count, 0);
    }

    #[test]
    fn test_reset_keeps_ai_mode() {
        let mut engine = vs_ai(5);
        engine.apply_move(0, 0).ok();
        let snap = engine.reset();
        assert_eq!(snap.mode, Mode::HumanVsAi);
        assert_eq!(snap.board.stone_count(), 1);
        assert_eq!(snap.turn, Player::X);
    }

    #[test]
    fn test_initialize_switches_mode() {
        let mut engine = pvp();
        let snap = engine.initialize(Mode::HumanVsAi);
        assert_eq!(snap.mode, Mode::HumanVsAi);
        assert_eq!(engine.mode(), Mode::HumanVsAi);
        assert_eq!(snap.board.stone_count(), 1);
    }

    #[test]
    fn test_ai_replies_inline() {
        let mut engine = vs_ai(11);
        let opening = engine.snapshot().last_move.unwrap();
        let target = if opening == Pos::new(5, 5) { (4, 4) } else { (5, 5) };

        let outcome = engine.apply_move(target.0, target.1).unwrap();
        assert_eq!(outcome.placements.len(), 2);
        assert_eq!(outcome.placements[0].player, Player::X);
        assert!(!outcome.placements[0].automated);
        assert_eq!(outcome.placements[1].player, Player::O);
        assert!(outcome.placements[1].automated);
        assert_eq!(outcome.turn, Player::X);
        assert_eq!(engine.board().stone_count(), 3);
    }

    #[test]
    fn test_pvp_single_placement() {
        let mut engine = pvp();
        let outcome = engine.apply_move(0, 0).unwrap();
        assert_eq!(outcome.placements.len(), 1);
        assert_eq!(engine.snapshot().status_text(), "Player O's turn");
    }

    #[test]
    fn test_ai_status_text() {
        let mut snap = vs_ai(1).snapshot();
        snap.turn = Player::O;
        assert_eq!(snap.status_text(), "AI's turn");
        snap.status = GameStatus::Won(Player::O);
        assert_eq!(snap.status_text(), "AI wins!");
        snap.status = GameStatus::Won(Player::X);
        assert_eq!(snap.status_text(), "X wins!");
    }

    #[test]
    fn test_full_board_is_draw() {
        // Two-wide vertical stripes shifted each row: no run longer than two
        let owner = |idx: usize| {
            let pos = Pos::from_index(idx);
            if (pos.col as usize / 2 + pos.row as usize) % 2 == 0 {
                Player::X
            } else {
                Player::O
            }
        };
        let xs: Vec<Pos> = (0..TOTAL_CELLS).filter(|&i| owner(i) == Player::X).map(Pos::from_index).collect();
        let os: Vec<Pos> = (0..TOTAL_CELLS).filter(|&i| owner(i) == Player::O).map(Pos::from_index).collect();
        assert_eq!(xs.len(), os.len());

        let mut engine = pvp();
        let mut last = None;
        for (x, o) in xs.iter().zip(&os) {
            engine.apply_move(x.row as i32, x.col as i32).unwrap();
            last = Some(engine.apply_move(o.row as i32, o.col as i32).unwrap());
        }

        let outcome = last.unwrap();
        assert_eq!(outcome.status, GameStatus::Draw);
        assert!(engine.board().is_full());
        assert_eq!(engine.snapshot().status_text(), "It's a draw!");
        assert_eq!(engine.apply_move(0, 0), Err(MoveError::GameOver));
    }
}
