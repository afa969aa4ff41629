//! Terminal runner (default binary).
//!
//! One loop thread handles keys, mouse events and the gravity timer, feeding
//! each into the session as a single operation.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event};

use blockfall::core::{EngineConfig, GameSnapshot};
use blockfall::engine::GameSession;
use blockfall::input::{handle_key_event, handle_mouse_event, should_quit, PointerMapper};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::PieceSet;

const USAGE: &str = "usage: blockfall [--config <file.json>] [--seed <u32>] [--pieces <classic5|standard7>] [--seven]";

#[derive(Debug, Default)]
struct Cli {
    help: bool,
    config: Option<PathBuf>,
    seed: Option<u32>,
    pieces: Option<PieceSet>,
}

fn parse_cli(args: impl IntoIterator<Item = String>) -> Result<Cli> {
    let mut cli = Cli::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => cli.help = true,
            "--config" => {
                let Some(path) = args.next() else {
                    bail!("--config requires a path");
                };
                cli.config = Some(PathBuf::from(path));
            }
            "--seed" => {
                let Some(raw) = args.next() else {
                    bail!("--seed requires a value");
                };
                let seed = raw
                    .parse::<u32>()
                    .with_context(|| format!("invalid --seed value: {raw}"))?;
                cli.seed = Some(seed);
            }
            "--pieces" => {
                let Some(raw) = args.next() else {
                    bail!("--pieces requires a set name");
                };
                let Some(set) = PieceSet::from_str(&raw) else {
                    bail!("unknown piece set: {raw}");
                };
                cli.pieces = Some(set);
            }
            "--seven" => cli.pieces = Some(PieceSet::Standard7),
            other => bail!("unknown argument: {other} (try --help)"),
        }
    }

    Ok(cli)
}

fn build_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(set) = cli.pieces {
        config = config.with_piece_set(set);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if config.seed.is_none() {
        config = config.with_seed(clock_seed());
    }
    Ok(config)
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    (nanos as u32) ^ ((nanos >> 32) as u32)
}

fn main() -> Result<()> {
    let cli = parse_cli(std::env::args().skip(1))?;
    if cli.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = build_config(&cli)?;
    let mut session = GameSession::new(config).context("invalid engine config")?;
    session.start();

    let mut term = TerminalRenderer::new();
    term.enter().context("entering terminal mode")?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let restored = term.exit();
    result?;
    restored.context("restoring terminal")
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        session.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        let layout = view.board_layout(snap.rows, snap.cols, viewport);
        let pointer = PointerMapper::new(layout.origin_x, layout.origin_y, layout.cell_w, layout.cell_h);

        // Input with timeout until the next gravity step.
        let tick_duration = Duration::from_millis(u64::from(session.tick_interval_ms()));
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            let command = match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    handle_key_event(key)
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, &pointer),
                Event::Resize(_, _) => {
                    term.invalidate();
                    None
                }
                _ => None,
            };
            if let Some(command) = command {
                session.apply(command);
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick();
        }
    }
}
