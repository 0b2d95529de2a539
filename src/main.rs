//! Terminal Block Blast runner (default binary).
//!
//! Thin adapter around the engine: it renders snapshots, turns key presses
//! into placement requests and persists the best score. All game rules live in
//! `block_blast::core`.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use block_blast::best_score::BestScoreStore;
use block_blast::config::Cli;
use block_blast::core::{GameSnapshot, GameState, MoveOutcome};
use block_blast::input::cursor::TraySlot;
use block_blast::input::{handle_key_event, should_quit, CursorCommand, PlacementCursor};
use block_blast::logging;
use block_blast::term::{CursorView, FlashView, FrameBuffer, GameView, TerminalRenderer, ViewOverlay, Viewport};
use block_blast::types::BLOCKS_PER_SET;

/// Input poll interval; also bounds how late a flash disappears.
const POLL_MS: u64 = 50;

/// How long cleared lines stay highlighted. Cosmetic only.
const FLASH_MS: u64 = 300;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let seed = cli.seed_or_clock();
    let mut best = BestScoreStore::open(cli.best_score_path());
    let mut game = GameState::new(seed);
    info!("starting with seed {seed}, best score {}", best.best());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &mut best);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, best: &mut BestScoreStore) -> Result<()> {
    let view = GameView::default();
    let mut cursor = PlacementCursor::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut flash: Option<(FlashView, Instant)> = None;

    loop {
        if flash
            .as_ref()
            .is_some_and(|(_, at)| at.elapsed() >= Duration::from_millis(FLASH_MS))
        {
            flash = None;
        }

        // Render.
        game.snapshot_into(&mut snap);
        let tray = tray_slots(&snap);
        cursor.sync(&tray);
        let overlay = ViewOverlay {
            cursor: Some(CursorView {
                index: cursor.selected(),
                row: cursor.row(),
                col: cursor.col(),
                valid: game.query_valid_placement(cursor.selected(), cursor.row(), cursor.col()),
            }),
            flash: flash.as_ref().map(|(f, _)| f.clone()),
            best_score: best.best(),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, &overlay, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }

        match event::read()? {
            Event::Resize(..) => term.invalidate(),
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                match cursor.apply(action, &tray) {
                    CursorCommand::Place { index, row, col } => {
                        let outcome = game.attempt_placement(index, row, col);
                        if let Some(f) = flash_for(&outcome) {
                            flash = Some((f, Instant::now()));
                        }
                        if outcome.accepted {
                            if let Err(err) = best.record(outcome.total_score) {
                                warn!("could not save best score: {err:#}");
                            }
                        }
                    }
                    CursorCommand::Restart => {
                        game.start_new_game();
                        flash = None;
                    }
                    CursorCommand::None => {}
                }
            }
            _ => {}
        }
    }
}

fn tray_slots(snap: &GameSnapshot) -> [TraySlot; BLOCKS_PER_SET] {
    let mut slots = [None; BLOCKS_PER_SET];
    for (i, slot) in slots.iter_mut().enumerate() {
        *slot = snap
            .block(i)
            .map(|b| (b.shape().height(), b.shape().width()));
    }
    slots
}

fn flash_for(outcome: &MoveOutcome) -> Option<FlashView> {
    if !outcome.accepted || outcome.lines_cleared() == 0 {
        return None;
    }
    Some(FlashView {
        rows: outcome.cleared_rows.clone(),
        cols: outcome.cleared_cols.clone(),
    })
}
