//! Player identification, per-player storage, and the player entity.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players. Player ids are
//! also the order players are listed in, which is what winner detection
//! scans, independent of whose turn it is.
//!
//! ## PlayerMap
//!
//! Efficient per-player data storage backed by `Vec` for O(1) access.
//!
//! ## Player
//!
//! Mutable per-player race state: position, the path stack of visited
//! squares, the planned animation steps, roll count, shortcut flag and
//! score. Only the crate mutates it; callers see it through `&Player`
//! accessors or a [`PlayerView`](crate::view::PlayerView).

use im::Vector;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::ops::{Index, IndexMut};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use snake_ladder::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// Display name, 1-based: `PlayerId(0)` is "Player 1".
    #[must_use]
    pub fn default_name(self) -> String {
        format!("Player {}", self.index() + 1)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use snake_ladder::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::new(3, |_| 0);
/// wins[PlayerId::new(1)] += 1;
/// assert_eq!(wins[PlayerId::new(1)], 1);
/// assert_eq!(wins.player_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over values in player order.
    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over values in player order.
    pub fn values_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// View all entries as a slice, in player order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// RGB colour distinguishing a player's pawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PlayerColor {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Palette entry for a player, cycling when there are more players
    /// than colours.
    #[must_use]
    pub fn for_player(player: PlayerId) -> Self {
        PLAYER_PALETTE[player.index() % PLAYER_PALETTE.len()]
    }
}

/// Crimson, dodger blue, lime green, gold, blue violet, dark orange.
pub const PLAYER_PALETTE: [PlayerColor; 6] = [
    PlayerColor::rgb(220, 20, 60),
    PlayerColor::rgb(30, 144, 255),
    PlayerColor::rgb(50, 205, 50),
    PlayerColor::rgb(255, 215, 0),
    PlayerColor::rgb(138, 43, 226),
    PlayerColor::rgb(255, 140, 0),
];

/// A racer on the track.
///
/// Invariants maintained by the rules engine:
/// - `path` is never empty and starts at square 0.
/// - `position` is always on the track.
/// - Outside an animation, `path.last() == position`.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: PlayerColor,
    position: usize,
    path: Vector<usize>,
    planned_path: VecDeque<usize>,
    roll_count: u32,
    shortcut_unlocked: bool,
    total_score: u32,
}

impl Player {
    /// Fresh player at the start square with the default name and colour.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self::with_identity(id, id.default_name(), PlayerColor::for_player(id))
    }

    /// Fresh player at the start square with an explicit identity.
    #[must_use]
    pub fn with_identity(id: PlayerId, name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            position: 0,
            path: Vector::unit(0),
            planned_path: VecDeque::new(),
            roll_count: 0,
            shortcut_unlocked: false,
            total_score: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    /// Current square index.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Visited squares as a stack; index 0 is the start.
    #[must_use]
    pub fn path(&self) -> &Vector<usize> {
        &self.path
    }

    /// Remaining animation steps for the roll in flight.
    #[must_use]
    pub fn planned_path(&self) -> &VecDeque<usize> {
        &self.planned_path
    }

    #[must_use]
    pub fn roll_count(&self) -> u32 {
        self.roll_count
    }

    /// Whether shortcut links are usable by this player.
    #[must_use]
    pub fn shortcut_unlocked(&self) -> bool {
        self.shortcut_unlocked
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Top of the path stack.
    #[must_use]
    pub fn path_top(&self) -> usize {
        self.path.last().copied().unwrap_or(0)
    }

    // === Crate-internal mutation ===

    pub(crate) fn record_roll(&mut self) {
        self.roll_count += 1;
    }

    pub(crate) fn set_plan(&mut self, plan: impl IntoIterator<Item = usize>) {
        self.planned_path.clear();
        self.planned_path.extend(plan);
    }

    pub(crate) fn next_planned_step(&mut self) -> Option<usize> {
        self.planned_path.pop_front()
    }

    /// Apply one animation step to the live path stack.
    ///
    /// Returns true if the step retreated one level on the stack.
    pub(crate) fn apply_step(&mut self, next: usize) -> bool {
        let len = self.path.len();
        let backtrack = len >= 2 && self.path.get(len - 2) == Some(&next);

        if backtrack {
            self.path.pop_back();
        } else if self.path.last() != Some(&next) {
            self.path.push_back(next);
        }

        self.position = next;
        backtrack
    }

    /// One-way flip; returns true only on the call that unlocked.
    pub(crate) fn unlock_shortcuts(&mut self) -> bool {
        let changed = !self.shortcut_unlocked;
        self.shortcut_unlocked = true;
        changed
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.total_score = self.total_score.saturating_add(points);
    }

    pub(crate) fn reset_score(&mut self) {
        self.total_score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 1");
        assert_eq!(p1.default_name(), "Player 2");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(4, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.as_slice(), &[0, 10, 20, 30]);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::new(2, |_| 0);

        map[PlayerId::new(0)] = 10;
        for v in map.values_mut() {
            *v += 1;
        }

        assert_eq!(map[PlayerId::new(0)], 11);
        assert_eq!(map[PlayerId::new(1)], 1);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::new(0, |_| 0);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(PlayerColor::for_player(PlayerId::new(0)), PLAYER_PALETTE[0]);
        assert_eq!(PlayerColor::for_player(PlayerId::new(6)), PLAYER_PALETTE[0]);
        assert_eq!(PlayerColor::for_player(PlayerId::new(7)), PLAYER_PALETTE[1]);
    }

    #[test]
    fn test_new_player_starts_at_zero() {
        let player = Player::new(PlayerId::new(2));

        assert_eq!(player.name(), "Player 3");
        assert_eq!(player.position(), 0);
        assert_eq!(player.path().iter().copied().collect::<Vec<_>>(), vec![0]);
        assert!(player.planned_path().is_empty());
        assert_eq!(player.roll_count(), 0);
        assert!(!player.shortcut_unlocked());
        assert_eq!(player.total_score(), 0);
    }

    #[test]
    fn test_apply_step_push_and_backtrack() {
        let mut player = Player::new(PlayerId::new(0));

        assert!(!player.apply_step(1));
        assert!(!player.apply_step(2));
        assert_eq!(player.path().len(), 3);

        assert!(player.apply_step(1));
        assert_eq!(player.position(), 1);
        assert_eq!(player.path_top(), 1);
        assert_eq!(player.path().len(), 2);
    }

    #[test]
    fn test_apply_step_no_duplicate_top() {
        let mut player = Player::new(PlayerId::new(0));

        // Forced to 0 repeatedly at the floor of the stack.
        player.apply_step(0);
        player.apply_step(0);
        assert_eq!(player.path().len(), 1);
        assert_eq!(player.position(), 0);
    }

    #[test]
    fn test_unlock_is_one_way() {
        let mut player = Player::new(PlayerId::new(0));
        assert!(player.unlock_shortcuts());
        assert!(!player.unlock_shortcuts());
        assert!(player.shortcut_unlocked());
    }
}
