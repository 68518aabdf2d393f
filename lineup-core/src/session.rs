//! PuzzleSession - the primary public API for playing a puzzle.
//!
//! A session owns the active puzzle, the placement state, the in-flight drag
//! and the visible result message. Front-ends translate user gestures into
//! calls on this type and render what it exposes; nothing here knows about
//! terminals or browsers.

use crate::board::{PlaceOutcome, Placement, Position, Slot};
use crate::catalog::{self, CatalogError, Hint, Puzzle, PuzzleNumber};
use crate::drag::{DragState, DropOutcome, DropTarget, OutsideDropPolicy};
use crate::roster::CharacterId;
use crate::validate::{check_placement, Verdict};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable selecting the starting puzzle.
pub const ENV_PUZZLE: &str = "LINEUP_PUZZLE";
/// Environment variable seeding the random puzzle picker.
pub const ENV_SEED: &str = "LINEUP_SEED";
/// Environment variable choosing the outside-drop policy.
pub const ENV_DROP_OUTSIDE: &str = "LINEUP_DROP_OUTSIDE";

/// Errors from PuzzleSession operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },
}

/// Configuration for creating a new session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Puzzle loaded when the session starts.
    pub starting_puzzle: PuzzleNumber,

    /// Seed for the random puzzle picker. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// What a drop outside every position does.
    pub outside_drop: OutsideDropPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionConfig {
    /// Default configuration: puzzle 1, OS-seeded randomness, outside drops ignored.
    pub fn new() -> Self {
        Self {
            starting_puzzle: PuzzleNumber::FIRST,
            seed: None,
            outside_drop: OutsideDropPolicy::Ignore,
        }
    }

    /// Set the starting puzzle.
    pub fn with_starting_puzzle(mut self, number: PuzzleNumber) -> Self {
        self.starting_puzzle = number;
        self
    }

    /// Seed the random puzzle picker.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the outside-drop policy.
    pub fn with_outside_drop(mut self, policy: OutsideDropPolicy) -> Self {
        self.outside_drop = policy;
        self
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, SessionError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary lookup function.
    ///
    /// Unset or empty variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SessionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(value) = get(ENV_PUZZLE) {
            config.starting_puzzle = value
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(|n| PuzzleNumber::new(n).ok())
                .ok_or(SessionError::InvalidConfig { key: ENV_PUZZLE, value })?;
        }

        if let Some(value) = get(ENV_SEED) {
            config.seed = Some(
                value
                    .trim()
                    .parse()
                    .map_err(|_| SessionError::InvalidConfig { key: ENV_SEED, value: value.clone() })?,
            );
        }

        if let Some(value) = get(ENV_DROP_OUTSIDE) {
            config.outside_drop = value
                .parse()
                .map_err(|_| SessionError::InvalidConfig { key: ENV_DROP_OUTSIDE, value: value.clone() })?;
        }

        Ok(config)
    }
}

/// Serializable view of a session, for headless output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub puzzle: PuzzleNumber,
    pub hints: Vec<String>,
    pub placement: Vec<SlotEntry>,
    pub dragging: Option<CharacterId>,
    pub message: Option<Verdict>,
}

/// One character's slot in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotEntry {
    pub character: CharacterId,
    pub slot: Slot,
}

/// A single puzzle game.
pub struct PuzzleSession {
    config: SessionConfig,
    puzzle: &'static Puzzle,
    placement: Placement,
    drag: DragState,
    message: Option<Verdict>,
    rng: StdRng,
}

impl PuzzleSession {
    /// Create a session with the configured starting puzzle loaded.
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let puzzle = catalog::puzzle(config.starting_puzzle);
        info!(puzzle = %puzzle.number, policy = %config.outside_drop, "session started");

        Self {
            config,
            puzzle,
            placement: Placement::new(),
            drag: DragState::new(),
            message: None,
            rng,
        }
    }

    // ========================================================================
    // Puzzle selection
    // ========================================================================

    /// Load puzzle `n`, rejecting numbers outside the catalog.
    pub fn load_puzzle(&mut self, n: u8) -> Result<(), SessionError> {
        let number = PuzzleNumber::new(n)?;
        self.select_puzzle(number);
        Ok(())
    }

    /// Make `number` the active puzzle and start it from a clean board.
    pub fn select_puzzle(&mut self, number: PuzzleNumber) {
        self.puzzle = catalog::puzzle(number);
        info!(puzzle = %number, "puzzle loaded");
        self.reset();
    }

    /// Load a puzzle chosen uniformly at random, using the session's RNG.
    pub fn load_random_puzzle(&mut self) -> PuzzleNumber {
        let number = PuzzleNumber::random(&mut self.rng);
        self.select_puzzle(number);
        number
    }

    /// Load a random puzzle using a caller-supplied RNG.
    pub fn load_random_puzzle_with_rng<R: Rng>(&mut self, rng: &mut R) -> PuzzleNumber {
        let number = PuzzleNumber::random(rng);
        self.select_puzzle(number);
        number
    }

    /// Put every character back in the pool and hide the result message.
    pub fn reset(&mut self) {
        self.placement.reset();
        self.drag.cancel();
        self.message = None;
        debug!(puzzle = %self.puzzle.number, "board reset");
    }

    // ========================================================================
    // Placement
    // ========================================================================

    /// Place a character directly, as if it had been dragged onto `position`.
    pub fn place(&mut self, character: CharacterId, position: Position) -> PlaceOutcome {
        self.drag.cancel();
        let outcome = self.placement.place(character, position);
        debug!(?outcome, "placed");
        outcome
    }

    /// Begin dragging a character.
    pub fn begin_drag(&mut self, character: CharacterId) {
        self.drag.begin(character);
    }

    /// Highlight the position under the pointer during a drag.
    pub fn hover(&mut self, position: Option<Position>) {
        self.drag.hover(position);
    }

    /// Finish the current drag on `target`.
    pub fn drop_on(&mut self, target: impl Into<DropTarget>) -> DropOutcome {
        self.drag
            .drop_on(target.into(), &mut self.placement, self.config.outside_drop)
    }

    /// Abandon the current drag without changing anything.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check the board against the active puzzle and show the result.
    pub fn validate(&mut self) -> Verdict {
        let verdict = Verdict::from(self.is_solved());
        info!(puzzle = %self.puzzle.number, ?verdict, "placement checked");
        self.message = Some(verdict);
        verdict
    }

    /// Whether the current board matches the solution, without showing a message.
    pub fn is_solved(&self) -> bool {
        check_placement(&self.placement, &self.puzzle.solution)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The active puzzle.
    pub fn puzzle(&self) -> &'static Puzzle {
        self.puzzle
    }

    /// Number of the active puzzle.
    pub fn puzzle_number(&self) -> PuzzleNumber {
        self.puzzle.number
    }

    /// Hints of the active puzzle, in catalog order.
    pub fn hints(&self) -> &'static [Hint] {
        &self.puzzle.hints
    }

    /// Current placement.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Drag gesture state.
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// The visible result message, if a check has been run since the last reset.
    pub fn message(&self) -> Option<Verdict> {
        self.message
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Serializable view of the session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            puzzle: self.puzzle.number,
            hints: self.hints().iter().map(|h| h.text.to_string()).collect(),
            placement: self
                .placement
                .iter()
                .map(|(character, slot)| SlotEntry { character, slot })
                .collect(),
            dragging: self.drag.in_flight(),
            message: self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn session() -> PuzzleSession {
        PuzzleSession::new(SessionConfig::new().with_seed(42))
    }

    fn solve(session: &mut PuzzleSession) {
        let solution = session.puzzle().solution.clone();
        for (character, position) in solution.iter() {
            session.place(character, position);
        }
    }

    #[test]
    fn test_session_config() {
        let config = SessionConfig::new()
            .with_starting_puzzle(PuzzleNumber::new(3).unwrap())
            .with_seed(9)
            .with_outside_drop(OutsideDropPolicy::ReturnToPool);

        assert_eq!(config.starting_puzzle.get(), 3);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.outside_drop, OutsideDropPolicy::ReturnToPool);
        assert_eq!(SessionConfig::default(), SessionConfig::new());
    }

    #[test]
    fn test_config_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (ENV_PUZZLE, "2"),
            (ENV_SEED, "1234"),
            (ENV_DROP_OUTSIDE, "return"),
        ]
        .into_iter()
        .collect();

        let config = SessionConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.starting_puzzle.get(), 2);
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.outside_drop, OutsideDropPolicy::ReturnToPool);
    }

    #[test]
    fn test_config_from_lookup_rejects_bad_values() {
        let err = SessionConfig::from_lookup(|k| (k == ENV_PUZZLE).then(|| "4".to_string())).unwrap_err();
        assert!(matches!(err, SessionError::InvalidConfig { key: ENV_PUZZLE, .. }));

        let err = SessionConfig::from_lookup(|k| (k == ENV_SEED).then(|| "abc".to_string())).unwrap_err();
        assert!(matches!(err, SessionError::InvalidConfig { key: ENV_SEED, .. }));

        let config = SessionConfig::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(config, SessionConfig::new());
    }

    #[test]
    fn test_new_session_starts_clean() {
        let session = session();
        assert_eq!(session.puzzle_number(), PuzzleNumber::FIRST);
        assert!(session.placement().is_empty());
        assert_eq!(session.message(), None);
        assert_eq!(session.hints().len(), 5);
    }

    #[test]
    fn test_load_puzzle_then_reset_is_empty() {
        let mut session = session();
        for n in 1..=3 {
            session.load_puzzle(n).unwrap();
            session.place(CharacterId::Fox, Position::Left);
            session.reset();
            assert!(session.placement().is_empty());
            assert_eq!(session.puzzle_number().get(), n);
        }
    }

    #[test]
    fn test_load_puzzle_is_idempotent() {
        let mut once = session();
        once.load_puzzle(2).unwrap();

        let mut twice = session();
        twice.place(CharacterId::Cat, Position::Right);
        twice.load_puzzle(2).unwrap();
        twice.load_puzzle(2).unwrap();

        assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn test_load_unknown_puzzle_is_rejected() {
        let mut session = session();
        session.place(CharacterId::Bat, Position::Center);

        let err = session.load_puzzle(4).unwrap_err();
        assert!(matches!(err, SessionError::Catalog(CatalogError::UnknownPuzzle(4))));
        // State is untouched by a rejected load.
        assert_eq!(session.puzzle_number(), PuzzleNumber::FIRST);
        assert_eq!(session.placement().placed_count(), 1);
    }

    #[test]
    fn test_seeded_random_is_deterministic() {
        let mut a = PuzzleSession::new(SessionConfig::new().with_seed(5));
        let mut b = PuzzleSession::new(SessionConfig::new().with_seed(5));
        let picks_a: Vec<_> = (0..10).map(|_| a.load_random_puzzle()).collect();
        let picks_b: Vec<_> = (0..10).map(|_| b.load_random_puzzle()).collect();
        assert_eq!(picks_a, picks_b);
        assert_eq!(a.puzzle_number(), *picks_a.last().unwrap());
    }

    #[test]
    fn test_validate_shows_message_until_reset() {
        let mut session = session();
        assert_eq!(session.validate(), Verdict::Incorrect);
        assert_eq!(session.message(), Some(Verdict::Incorrect));

        solve(&mut session);
        assert!(session.is_solved());
        assert_eq!(session.validate(), Verdict::Solved);
        assert_eq!(session.message(), Some(Verdict::Solved));

        session.reset();
        assert_eq!(session.message(), None);
    }

    #[test]
    fn test_loading_hides_message() {
        let mut session = session();
        session.validate();
        session.load_random_puzzle();
        assert_eq!(session.message(), None);
    }

    #[test]
    fn test_drag_and_drop_flow() {
        let mut session = session();
        session.begin_drag(CharacterId::Fox);
        session.hover(Some(Position::Left));
        assert_eq!(session.drag().hovered(), Some(Position::Left));

        let outcome = session.drop_on(Position::Left);
        assert!(outcome.changed_placement());
        assert_eq!(session.placement().occupant(Position::Left), Some(CharacterId::Fox));

        session.begin_drag(CharacterId::Fox);
        let outcome = session.drop_on(None::<Position>);
        assert_eq!(outcome, DropOutcome::Ignored(CharacterId::Fox));
        assert_eq!(session.placement().position_of(CharacterId::Fox), Some(Position::Left));
    }

    #[test]
    fn test_return_to_pool_policy() {
        let mut session =
            PuzzleSession::new(SessionConfig::new().with_outside_drop(OutsideDropPolicy::ReturnToPool));
        session.place(CharacterId::Blue, Position::Center);
        session.begin_drag(CharacterId::Blue);
        session.drop_on(DropTarget::Outside);
        assert!(session.placement().is_empty());
    }

    #[test]
    fn test_reset_cancels_drag() {
        let mut session = session();
        session.begin_drag(CharacterId::Cat);
        session.reset();
        assert_eq!(session.drop_on(Position::Right), DropOutcome::NothingInFlight);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut session = session();
        session.place(CharacterId::Silver, Position::Right);
        let json = serde_json::to_value(session.snapshot()).unwrap();

        assert_eq!(json["puzzle"], 1);
        assert_eq!(json["hints"].as_array().unwrap().len(), 5);
        assert_eq!(json["placement"][0]["character"], "silver");
        assert_eq!(json["placement"][0]["slot"]["position"], "position-right");
        assert_eq!(json["placement"][1]["slot"]["state"], "unplaced");
        assert!(json["message"].is_null());
    }
}
