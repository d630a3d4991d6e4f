//! Integration test: save file round trips and best-effort loading.

use flapper::game::{Entity, Game};
use flapper::utils::{load_game, save_game, SaveRecord};
use flapper::GameConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::PathBuf;

fn new_game() -> Game {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    Game::new(&GameConfig::default(), &mut rng)
}

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("flapper_{}_{}.txt", name, std::process::id()))
}

#[test]
fn test_save_load_roundtrip_is_exact() {
    let path = temp_file("roundtrip");

    let mut game = new_game();
    game.character.set_position(12.5, 300.0);
    game.score.set(7);
    save_game(&path, &game).expect("save should succeed");
    assert_eq!(fs::read_to_string(&path).unwrap(), "12.5 300 7\n");

    let mut loaded = new_game();
    assert!(load_game(&path, &mut loaded));
    assert_eq!(loaded.character.position(), (12.5, 300.0));
    assert_eq!(loaded.score.get(), 7);

    fs::remove_file(path).ok();
}

#[test]
fn test_missing_file_leaves_defaults() {
    let path = temp_file("missing");
    fs::remove_file(&path).ok();

    let mut game = new_game();
    let before = (game.character.position(), game.score.get());
    assert!(!load_game(&path, &mut game));
    assert_eq!((game.character.position(), game.score.get()), before);
}

#[test]
fn test_malformed_file_leaves_defaults() {
    let path = temp_file("malformed");
    for contents in ["", "garbage", "1.0 2.0", "1.0 two 3", "1 2 x\n"] {
        fs::write(&path, contents).unwrap();

        let mut game = new_game();
        let before = (game.character.position(), game.score.get());
        assert!(!load_game(&path, &mut game), "loaded {:?}", contents);
        assert_eq!((game.character.position(), game.score.get()), before);
    }
    fs::remove_file(path).ok();
}

#[test]
fn test_record_from_game() {
    let mut game = new_game();
    game.character.set_position(-3.75, 42.0);
    game.score.set(11);
    assert_eq!(
        SaveRecord::from_game(&game),
        SaveRecord {
            x: -3.75,
            y: 42.0,
            score: 11
        }
    );
}
