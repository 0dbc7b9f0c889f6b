use std::io;
use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use gridsnake::config::{
    step_interval_for_level, DEFAULT_GRID, SPEED_LEVEL_DEFAULT, SPEED_LEVEL_MAX, SPEED_LEVEL_MIN,
};
use gridsnake::game::{Game, Phase};
use gridsnake::input::{poll_input, GameInput};
use gridsnake::renderer;
use gridsnake::score::JsonScoreStore;
use gridsnake::ui::hud::HudInfo;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(15);

/// Deterministic fixed-timestep snake for the terminal.
#[derive(Debug, Parser)]
struct Cli {
    /// Speed level, 5 (slow) to 20 (fast).
    #[arg(long, default_value_t = SPEED_LEVEL_DEFAULT)]
    speed: u8,

    /// RNG seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    install_panic_hook();
    run(cli)?;
    cleanup_terminal()
}

fn run(cli: Cli) -> io::Result<()> {
    let mut terminal = setup_terminal()?;

    let mut speed_level = cli.speed.clamp(SPEED_LEVEL_MIN, SPEED_LEVEL_MAX);
    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut game = Game::new_with_seed(
        DEFAULT_GRID,
        step_interval_for_level(speed_level),
        JsonScoreStore::at_default_location(),
        seed,
    );

    loop {
        terminal.draw(|frame| {
            renderer::render(
                frame,
                game.state(),
                HudInfo {
                    best: game.best(),
                    speed_level,
                },
            )
        })?;

        if let Some(input) = poll_input(INPUT_POLL_INTERVAL)? {
            if input == GameInput::Quit {
                break;
            }
            handle_input(&mut game, &mut speed_level, input);
        }

        game.frame(Instant::now());

        if let Some(error) = game.take_store_error() {
            eprintln!("Failed to persist best score: {error}");
        }
    }

    Ok(())
}

fn handle_input(game: &mut Game<JsonScoreStore>, speed_level: &mut u8, input: GameInput) {
    match input {
        GameInput::Direction(direction) => game.set_direction(direction),
        GameInput::TogglePause => match game.phase() {
            Phase::Ready => game.start(),
            Phase::Running => game.pause(),
            Phase::Paused => game.resume(),
            Phase::GameOver => {}
        },
        GameInput::Restart => game.restart(),
        GameInput::SpeedUp => adjust_speed(game, speed_level, 1),
        GameInput::SpeedDown => adjust_speed(game, speed_level, -1),
        GameInput::Quit => {}
    }
}

fn adjust_speed(game: &mut Game<JsonScoreStore>, speed_level: &mut u8, delta: i8) {
    *speed_level = speed_level
        .saturating_add_signed(delta)
        .clamp(SPEED_LEVEL_MIN, SPEED_LEVEL_MAX);
    game.set_step_interval(step_interval_for_level(*speed_level));
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
