//! Terminal key handling: maps crossterm events onto game keys and tracks
//! which keys are currently held.

use crate::core::constants::KEY_HOLD_WINDOW_MS;
use crate::game::{process_key, Game, GameKey, KeyboardState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Player closed the game. State should be saved first.
    Quit,
}

/// Map a terminal key to a game key, if it has one.
pub fn map_key(code: KeyCode) -> Option<GameKey> {
    match code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameKey::Start),
        KeyCode::Left => Some(GameKey::Left),
        KeyCode::Right => Some(GameKey::Right),
        KeyCode::Up => Some(GameKey::Up),
        KeyCode::Down => Some(GameKey::Down),
        _ => None,
    }
}

/// Esc, q or Ctrl-C close the game.
pub fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Tracks held keys from press/repeat/release events.
///
/// Terminals without keyboard enhancement never report releases, so a key
/// also stops counting as held once the hold window passes without a repeat.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    last_seen: HashMap<GameKey, Instant>,
    hold_window: Duration,
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new(Duration::from_millis(KEY_HOLD_WINDOW_MS))
    }
}

impl HeldKeys {
    pub fn new(hold_window: Duration) -> Self {
        Self {
            last_seen: HashMap::new(),
            hold_window,
        }
    }

    /// Record a key event observed at `now`.
    pub fn record(&mut self, key: GameKey, kind: KeyEventKind, now: Instant) {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(key, now);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&key);
            }
        }
    }

    /// Drop keys not refreshed within the hold window. Call once per frame.
    pub fn expire(&mut self, now: Instant) {
        let window = self.hold_window;
        self.last_seen
            .retain(|_, seen| now.saturating_duration_since(*seen) <= window);
    }
}

impl KeyboardState for HeldKeys {
    fn is_held(&self, key: GameKey) -> bool {
        self.last_seen.contains_key(&key)
    }
}

/// Handle one key event: update held state and dispatch presses to the game.
pub fn handle_key_event<R: Rng>(
    key: KeyEvent,
    game: &mut Game,
    held: &mut HeldKeys,
    rng: &mut R,
    now: Instant,
) -> InputResult {
    if key.kind != KeyEventKind::Release && is_quit(&key) {
        return InputResult::Quit;
    }

    let Some(game_key) = map_key(key.code) else {
        return InputResult::Continue;
    };

    held.record(game_key, key.kind, now);
    if key.kind == KeyEventKind::Press {
        process_key(game, game_key, rng);
    }
    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::game::{GameMode, Skin};
    use crossterm::event::KeyEventState;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn setup() -> (Game, HeldKeys, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let game = Game::new(&GameConfig::default(), &mut rng);
        (game, HeldKeys::default(), rng)
    }

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(KeyCode::Char(' ')), Some(GameKey::Start));
        assert_eq!(map_key(KeyCode::Enter), Some(GameKey::Start));
        assert_eq!(map_key(KeyCode::Left), Some(GameKey::Left));
        assert_eq!(map_key(KeyCode::Down), Some(GameKey::Down));
        assert_eq!(map_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(&key(KeyCode::Esc, KeyEventKind::Press)));
        assert!(is_quit(&key(KeyCode::Char('q'), KeyEventKind::Press)));
        assert!(!is_quit(&key(KeyCode::Char('c'), KeyEventKind::Press)));

        let mut ctrl_c = key(KeyCode::Char('c'), KeyEventKind::Press);
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        assert!(is_quit(&ctrl_c));
    }

    #[test]
    fn test_press_dispatches_to_game() {
        let (mut game, mut held, mut rng) = setup();
        let now = Instant::now();
        let result = handle_key_event(
            key(KeyCode::Char(' '), KeyEventKind::Press),
            &mut game,
            &mut held,
            &mut rng,
            now,
        );
        assert_eq!(result, InputResult::Continue);
        assert_eq!(game.mode, GameMode::Playing);
    }

    #[test]
    fn test_repeat_does_not_dispatch() {
        let (mut game, mut held, mut rng) = setup();
        let now = Instant::now();
        handle_key_event(
            key(KeyCode::Right, KeyEventKind::Repeat),
            &mut game,
            &mut held,
            &mut rng,
            now,
        );
        assert_eq!(game.skin(), Skin::Plane);
        assert!(held.is_held(GameKey::Right));
    }

    #[test]
    fn test_release_clears_held() {
        let mut held = HeldKeys::default();
        let now = Instant::now();
        held.record(GameKey::Up, KeyEventKind::Press, now);
        assert!(held.is_held(GameKey::Up));
        held.record(GameKey::Up, KeyEventKind::Release, now);
        assert!(!held.is_held(GameKey::Up));
    }

    #[test]
    fn test_hold_window_expires() {
        let mut held = HeldKeys::new(Duration::from_millis(100));
        let start = Instant::now();
        held.record(GameKey::Down, KeyEventKind::Press, start);

        held.expire(start + Duration::from_millis(50));
        assert!(held.is_held(GameKey::Down));

        held.expire(start + Duration::from_millis(250));
        assert!(!held.is_held(GameKey::Down));
    }

    #[test]
    fn test_quit_returns_quit() {
        let (mut game, mut held, mut rng) = setup();
        let result = handle_key_event(
            key(KeyCode::Esc, KeyEventKind::Press),
            &mut game,
            &mut held,
            &mut rng,
            Instant::now(),
        );
        assert_eq!(result, InputResult::Quit);
    }
}
