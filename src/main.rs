use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flapper::core::{GameConfig, LOG_FILE_NAME, MAX_FRAME_SECONDS, SAVE_FILE_NAME};
use flapper::game::{process_held_keys, process_tick, Game, GameMode};
use flapper::input::{handle_key_event, HeldKeys, InputResult};
use flapper::ui::assets::Assets;
use flapper::ui::draw_ui;
use flapper::utils::persistence::data_path;
use flapper::utils::{load_game, save_game};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Send log output to ~/.flapper/flapper.log; the terminal itself belongs to the game.
fn init_logging() {
    let Ok(path) = data_path(LOG_FILE_NAME) else {
        return;
    };
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

fn main() -> io::Result<()> {
    init_logging();

    let config = GameConfig::load();
    log::info!("Starting flapper with {:?}", config);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(&config, &mut rng);

    let save_path = match data_path(SAVE_FILE_NAME) {
        Ok(path) => Some(path),
        Err(e) => {
            log::warn!("Saving disabled: {}", e);
            None
        }
    };
    if let Some(path) = &save_path {
        load_game(path, &mut game);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    log::debug!("Keyboard enhancement: {}", enhanced);
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game, &config, &mut rng);

    // Restore terminal
    if enhanced {
        terminal.backend_mut().execute(PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(path) = &save_path {
        if let Err(e) = save_game(path, &game) {
            log::warn!("Could not save to {}: {}", path.display(), e);
        }
    }
    if let Err(e) = &result {
        log::error!("Game loop failed: {}", e);
    }
    result
}

/// Frame loop: drain input, advance the simulation, draw. Returns when the
/// player quits.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &mut Game,
    config: &GameConfig,
    rng: &mut StdRng,
) -> io::Result<()> {
    let assets = Assets::default();
    let frame_interval = Duration::from_millis(config.frame_interval_ms);
    let mut held = HeldKeys::default();
    let mut last_frame = Instant::now();

    loop {
        // Poll input until this frame's deadline
        let deadline = last_frame + frame_interval;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                let mode = game.mode;
                if handle_key_event(key, game, &mut held, rng, Instant::now())
                    == InputResult::Quit
                {
                    log::info!("Quit requested");
                    return Ok(());
                }
                if game.mode != mode {
                    log::info!("Mode {:?} -> {:?}", mode, game.mode);
                }
            }
        }

        // Elapsed time is measured once per frame and applied to everything
        let now = Instant::now();
        held.expire(now);
        if game.mode == GameMode::Playing {
            process_held_keys(game, &held);
            let dt = now
                .duration_since(last_frame)
                .as_secs_f32()
                .min(MAX_FRAME_SECONDS);
            process_tick(game, dt, rng);
        }
        last_frame = now;

        terminal.draw(|frame| draw_ui(frame, game, &assets))?;
    }
}
