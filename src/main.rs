//! Terminal runner for the isometric board.
//!
//! Raw terminal events are hit-tested by the game view, turned into board
//! actions by the dispatch table and forwarded to the session. The screen is
//! redrawn from a snapshot whenever something changed.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use tracing_subscriber::EnvFilter;

use isoboard::core::{Change, CollisionPolicy, GameConfig, GameState, Session};
use isoboard::input::{
    handle_key_event, should_quit, DispatchTable, EventKind, KeyCommand, PointerState, TileCursor,
};
use isoboard::term::{
    DiceAnimation, FrameBuffer, GameView, Overlay, TerminalCue, TerminalRenderer, Viewport,
};
use isoboard::types::{BoardAction, Target};

/// Poll timeout while nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Play sheep against ostriches on an isometric board.
#[derive(Parser, Debug)]
#[command(name = "isoboard", version, about = "Isometric sheep and ostrich board game")]
struct Cli {
    /// Path to a JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the dice (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Board height in tiles
    #[arg(long, requires = "cols")]
    rows: Option<u8>,

    /// Board width in tiles
    #[arg(long, requires = "rows")]
    cols: Option<u8>,

    /// Tile width in terminal columns
    #[arg(long)]
    tile_size: Option<u16>,

    /// Let moves land on occupied tiles, replacing the piece there
    #[arg(long)]
    overwrite: bool,

    /// Show sound captions without ringing the terminal bell
    #[arg(long)]
    mute: bool,

    /// Where to write logs (the screen belongs to the game)
    #[arg(long, default_value = "isoboard.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = load_config(&cli)?;
    let game = GameState::from_config(&config).context("building the starting board")?;
    tracing::info!(
        rows = config.rows,
        cols = config.cols,
        seed = game.seed(),
        collision = ?config.collision,
        "starting game"
    );

    let cue = if cli.mute {
        TerminalCue::muted()
    } else {
        TerminalCue::new()
    };
    let mut app = App::new(Session::new(game, cue), GameView::new(config.tile_size));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Leave the alternate screen even when the loop failed.
    let _ = term.exit();
    tracing::info!(turns = app.session.game().turn(), "game closed");
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    // Apply CLI overrides
    if let (Some(rows), Some(cols)) = (cli.rows, cli.cols) {
        let fits = config.layout.as_ref().is_some_and(|layout| {
            layout.len() == rows as usize && layout.iter().all(|r| r.len() == cols as usize)
        });
        if config.layout.is_some() && !fits {
            tracing::warn!(rows, cols, "configured layout does not fit the board size, starting empty");
            config.layout = None;
        }
        config.rows = rows;
        config.cols = cols;
    }
    if let Some(tile_size) = cli.tile_size {
        config.tile_size = tile_size;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.overwrite {
        config.collision = CollisionPolicy::Overwrite;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

struct App {
    session: Session<TerminalCue>,
    view: GameView,
    dispatch: DispatchTable,
    pointer: PointerState,
    cursor: TileCursor,
    anim: DiceAnimation,
    message: Option<String>,
    last_frame: Instant,
    dirty: bool,
}

impl App {
    fn new(session: Session<TerminalCue>, view: GameView) -> Self {
        let board = session.game().board();
        let cursor = TileCursor::new(board.rows(), board.cols());
        let anim = DiceAnimation::new(session.game().seed().rotate_left(17));
        Self {
            session,
            view,
            dispatch: DispatchTable::default(),
            pointer: PointerState::default(),
            cursor,
            anim,
            message: None,
            last_frame: Instant::now(),
            dirty: true,
        }
    }

    fn board_size(&self) -> (u8, u8) {
        let board = self.session.game().board();
        (board.rows(), board.cols())
    }

    /// Returns `false` when the user asked to quit.
    fn handle_event(&mut self, ev: Event) -> bool {
        match ev {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return false;
                }
                let action = match handle_key_event(key) {
                    Some(KeyCommand::Cursor(dc, dr)) => {
                        self.cursor.step(dc, dr);
                        None
                    }
                    Some(KeyCommand::Activate) => self.dispatch.dispatch(
                        &mut self.pointer,
                        Target::Tile(self.cursor.pos()),
                        EventKind::Click,
                    ),
                    Some(KeyCommand::Roll) => {
                        self.dispatch
                            .dispatch(&mut self.pointer, Target::Dice, EventKind::Click)
                    }
                    Some(KeyCommand::Restart) => Some(BoardAction::Restart),
                    None => None,
                };
                if let Some(action) = action {
                    self.apply(action);
                }
                self.dirty = true;
            }
            Event::Mouse(mouse) => {
                let kind = match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => EventKind::Click,
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => EventKind::Hover,
                    _ => return true,
                };
                let (rows, cols) = self.board_size();
                let target = self.view.target_at(rows, cols, mouse.column, mouse.row);

                let hover = self.pointer.hover;
                if let Some(action) = self.dispatch.dispatch(&mut self.pointer, target, kind) {
                    self.apply(action);
                    self.dirty = true;
                }
                if let (EventKind::Click, Target::Tile(pos)) = (kind, target) {
                    self.cursor.set(pos);
                    self.dirty = true;
                }
                self.dirty |= self.pointer.hover != hover;
            }
            Event::Resize(..) => self.dirty = true,
            _ => {}
        }
        true
    }

    fn apply(&mut self, action: BoardAction) {
        match self.session.handle(action) {
            Ok(outcome) => {
                self.message = None;
                for change in outcome.changes() {
                    match change {
                        Change::Rolled(value) => {
                            self.anim.start(*value);
                            self.last_frame = Instant::now();
                        }
                        Change::Restarted => {
                            self.anim.cancel();
                            self.session.cue_mut().clear_caption();
                        }
                        Change::TurnPassed(next) if outcome.moved().is_none() => {
                            self.message = Some(format!("no legal move, {next} to roll"));
                        }
                        _ => {}
                    }
                }
            }
            Err(err) => self.message = Some(err.to_string()),
        }
        self.pointer.rolling = self.anim.is_running();
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
        if self.anim.tick(ms) {
            self.dirty = true;
        }
        self.pointer.rolling = self.anim.is_running();
    }

    fn poll_timeout(&self) -> Duration {
        self.anim
            .time_to_next_frame_ms()
            .map(|ms| Duration::from_millis(ms as u64))
            .unwrap_or(IDLE_POLL)
    }

    fn render_into(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let snap = self.session.snapshot();
        let overlay = Overlay {
            hover: self.pointer.hover,
            cursor: Some(self.cursor.pos()),
            dice_face: self.anim.face(),
            caption: self.session.cue().caption(),
            message: self.message.as_deref(),
        };
        self.view.render_into(&snap, &overlay, viewport, fb);
    }
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        if app.dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            app.render_into(&mut fb, Viewport::new(w, h));
            term.present(&mut fb)?;
            app.dirty = false;
        }

        if event::poll(app.poll_timeout())? {
            let ev = event::read()?;
            if matches!(ev, Event::Resize(..)) {
                term.invalidate();
            }
            if !app.handle_event(ev) {
                return Ok(());
            }
            if app.session.cue_mut().take_bell() {
                term.bell()?;
            }
        }

        app.tick();
    }
}
