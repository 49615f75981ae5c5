use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{GridSize, FRAME_SLICE_MS, THEME_CLASSIC};
use grid_snake::game::GameState;
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::renderer;
use grid_snake::settings::{load_settings, save_settings, Settings};
use grid_snake::terminal_runtime::{install_panic_hook, AppTerminal, TerminalSession};
use grid_snake::ui::hud::HudInfo;

#[derive(Debug, Parser)]
#[command(version, about = "Classic single-player Snake for the terminal")]
struct Cli {
    /// Player name shown in the HUD (persisted for future sessions).
    #[arg(long = "player")]
    player: Option<String>,

    /// Seed for deterministic food placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let mut settings = match load_settings() {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("Failed to load settings: {error}");
            Settings::default()
        }
    };
    if let Some(player) = cli.player {
        settings.player_name = player;
        if let Err(error) = save_settings(&settings) {
            eprintln!("Failed to save settings: {error}");
        }
    }

    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    run(session.terminal_mut(), &settings, cli.seed)
}

fn run(terminal: &mut AppTerminal, settings: &Settings, seed: Option<u64>) -> io::Result<()> {
    let viewport = terminal.size()?;
    let mut bounds = GridSize::from_viewport(viewport.width, viewport.height);
    let mut state = match seed {
        Some(seed) => GameState::new_with_seed(bounds, seed),
        None => GameState::new(bounds),
    };
    let mut input = InputHandler::new();
    let mut last_tick = Instant::now();

    loop {
        // The grid tracks the viewport, recomputed every pass so a terminal
        // resize takes effect on the next frame.
        let viewport = terminal.size()?;
        let next_bounds = GridSize::from_viewport(viewport.width, viewport.height);
        if next_bounds != bounds {
            bounds = next_bounds;
            state.set_bounds(bounds);
        }

        terminal.draw(|frame| {
            renderer::render(
                frame,
                &state,
                &HudInfo {
                    player_name: &settings.player_name,
                    theme: &THEME_CLASSIC,
                },
            )
        })?;

        if let Some(game_input) = input.poll_input(Duration::from_millis(FRAME_SLICE_MS))? {
            if game_input == GameInput::Quit {
                break;
            }
            if game_input == GameInput::Restart {
                // Restart reschedules the ticker at the initial interval.
                last_tick = Instant::now();
            }

            state.apply_input(game_input);
        }

        // Single active ticker per session: the interval is re-read from the
        // engine every pass, so a speed change reschedules implicitly instead
        // of spawning a second timer.
        if last_tick.elapsed() >= state.tick_interval() {
            state.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
