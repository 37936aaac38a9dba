//! Terminal frontend: input translation, tick driving and rendering.
//!
//! Everything here is a thin collaborator around the simulation: keys
//! become `Command`s, the loop waits for whatever interval the last
//! `tick()` reported, and drawing reads the session snapshot without
//! mutating it.

use std::io::{self, Stdout, Write, stdout};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use advanced_snake::sim::{Command, Direction, GamePhase, GameState, PowerUpKind};
use advanced_snake::{GameConfig, HighScoreStore};

fn main() -> io::Result<()> {
    env_logger::init();

    let config = GameConfig::load_or_default(&GameConfig::default_path());
    let store = HighScoreStore::new(HighScoreStore::default_path());
    let seed = rand::random::<u64>();
    let mut state = GameState::new(config, seed, store.load());
    state.start();

    let mut term = Terminal::new();
    term.setup()?;
    let result = run(&mut state, &store, &mut term);
    term.restore()?;
    result
}

fn run(state: &mut GameState, store: &HighScoreStore, term: &mut Terminal) -> io::Result<()> {
    let mut saved_high = state.high_score();
    term.draw(state)?;

    loop {
        // The session controls the interval; re-read it after every tick.
        let deadline = Instant::now() + Duration::from_millis(state.tick_ms());
        while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
            if !event::poll(remaining)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                match translate(key) {
                    Input::Command(cmd) => state.apply(cmd),
                    Input::Quit => return Ok(()),
                    Input::None => {}
                }
            }
        }

        state.tick();
        if state.phase() == GamePhase::GameOver && state.high_score() > saved_high {
            saved_high = state.high_score();
            if let Err(err) = store.save(saved_high) {
                log::warn!("failed to save high score: {err}");
            }
        }
        term.draw(state)?;
    }
}

enum Input {
    Command(Command),
    Quit,
    None,
}

/// Raw key events become logical commands here; nothing below this
/// boundary sees key codes.
fn translate(key: KeyEvent) -> Input {
    match key.code {
        KeyCode::Up => Input::Command(Command::Steer(Direction::Up)),
        KeyCode::Down => Input::Command(Command::Steer(Direction::Down)),
        KeyCode::Left => Input::Command(Command::Steer(Direction::Left)),
        KeyCode::Right => Input::Command(Command::Steer(Direction::Right)),
        KeyCode::Char('p') => Input::Command(Command::TogglePause),
        KeyCode::Char(' ') => Input::Command(Command::ToggleWrap),
        KeyCode::Char('r') => Input::Command(Command::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        _ => Input::None,
    }
}

struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    fn new() -> Self {
        Self { stdout: stdout() }
    }

    fn setup(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.stdout, EnterAlternateScreen, Hide)
    }

    fn restore(&mut self) -> io::Result<()> {
        execute!(self.stdout, Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    /// Full redraw from the session snapshot. The grid is drawn inside
    /// a one-cell border, so cell (c, r) lands at terminal (c+1, r+1).
    fn draw(&mut self, state: &GameState) -> io::Result<()> {
        let cols = state.config().cols as u16;
        let rows = state.config().rows as u16;

        queue!(self.stdout, Clear(ClearType::All))?;
        for x in 0..cols + 2 {
            queue!(self.stdout, MoveTo(x, 0), Print('#'))?;
            queue!(self.stdout, MoveTo(x, rows + 1), Print('#'))?;
        }
        for y in 1..rows + 1 {
            queue!(self.stdout, MoveTo(0, y), Print('#'))?;
            queue!(self.stdout, MoveTo(cols + 1, y), Print('#'))?;
        }

        for &obstacle in state.obstacles() {
            self.put(obstacle.col, obstacle.row, 'X')?;
        }

        let food = state.food();
        self.put(food.pos.col, food.pos.row, if food.special { '$' } else { '*' })?;

        if let Some(power_up) = state.power_up() {
            let glyph = match power_up.kind {
                PowerUpKind::SpeedBoost => 'S',
                PowerUpKind::Shrink => '%',
                PowerUpKind::ClearObstacles => 'C',
            };
            self.put(power_up.pos.col, power_up.pos.row, glyph)?;
        }

        for (i, cell) in state.snake().cells().enumerate() {
            self.put(cell.col, cell.row, if i == 0 { '@' } else { 'o' })?;
        }

        let hud = format!(
            "score {}  high {}  level {}  wrap {}  {}",
            state.score(),
            state.high_score(),
            state.level(),
            if state.snake().wrap() { "on" } else { "off" },
            match state.phase() {
                GamePhase::Paused => "PAUSED (p)",
                GamePhase::GameOver => "GAME OVER - r restarts, q quits",
                _ => "",
            },
        );
        queue!(self.stdout, MoveTo(0, rows + 2), Print(hud))?;
        queue!(
            self.stdout,
            MoveTo(0, rows + 3),
            Print("arrows steer  space wrap  p pause  q quit")
        )?;

        self.stdout.flush()
    }

    fn put(&mut self, col: i32, row: i32, glyph: char) -> io::Result<()> {
        queue!(
            self.stdout,
            MoveTo(col as u16 + 1, row as u16 + 1),
            Print(glyph)
        )
    }
}
