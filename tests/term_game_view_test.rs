use block_blast::core::{Block, GameState, Grid, ShapeId, SimpleRng};
use block_blast::term::{
    CellStyle, CursorView, FlashView, FrameBuffer, GameView, Rgb, ViewOverlay, Viewport,
};
use block_blast::types::BlockColor;

// With cell_w=2: grid pixels 16x8, plus border 18x10, plus tray => 18x16.
const TIGHT: Viewport = Viewport {
    width: 18,
    height: 16,
};

fn text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn dot_game() -> GameState {
    let dot = Block::new(ShapeId::new(0).unwrap(), BlockColor::Blue);
    let square = Block::new(ShapeId::new(10).unwrap(), BlockColor::Teal);
    GameState::from_parts(Grid::new(), [dot, square, dot], SimpleRng::new(1))
}

#[test]
fn test_term_view_layout_height_includes_tray() {
    assert_eq!(GameView::default().layout_height(), TIGHT.height);
}

#[test]
fn test_term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, &ViewOverlay::default(), TIGHT);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(17, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 9).unwrap().ch, '└');
    assert_eq!(fb.get(17, 9).unwrap().ch, '┘');
}

#[test]
fn test_term_view_renders_filled_cell_as_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.grid[7][0] = BlockColor::Red.code();

    let fb = GameView::default().render(&snap, &ViewOverlay::default(), TIGHT);

    // Inside border: (1,1) origin.
    let y0 = 1 + 7;
    assert_eq!(fb.get(1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(2, y0).unwrap().ch, '█');
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');

    // Filled cells take the palette color, empty ones the dim dot style.
    assert_eq!(fb.get(1, y0).unwrap().style, CellStyle::block(BlockColor::Red));
    assert_eq!(fb.get(1, y0).unwrap().style.fg, Rgb::block(BlockColor::Red));
    assert_eq!(fb.get(3, y0).unwrap().style, CellStyle::empty());
}

#[test]
fn test_term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;
    snap.streak = 3;

    let overlay = ViewOverlay {
        best_score: 5678,
        ..ViewOverlay::default()
    };
    let fb = GameView::default().render(&snap, &overlay, Viewport::new(60, 16));
    let all = text(&fb);

    for label in ["SCORE", "BEST", "LEVEL", "COMBO", "STREAK"] {
        assert!(all.contains(label), "missing {label}");
    }
    assert!(all.contains("1234"));
    assert!(all.contains("5678"));
}

#[test]
fn test_term_view_skips_side_panel_when_narrow() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, &ViewOverlay::default(), TIGHT);
    assert!(!text(&fb).contains("SCORE"));
}

#[test]
fn test_term_view_draws_game_over_overlay() {
    let mut snap = GameState::new(1).snapshot();
    assert!(!text(&GameView::default().render(&snap, &ViewOverlay::default(), TIGHT)).contains("GAME OVER"));

    snap.game_over = true;
    let fb = GameView::default().render(&snap, &ViewOverlay::default(), TIGHT);
    assert!(text(&fb).contains("GAME OVER"));
}

#[test]
fn test_term_view_preview_reflects_validity() {
    let game = dot_game();
    let snap = game.snapshot();
    let view = GameView::default();

    let valid = ViewOverlay {
        cursor: Some(CursorView {
            index: 1,
            row: 2,
            col: 3,
            valid: game.query_valid_placement(1, 2, 3),
        }),
        ..ViewOverlay::default()
    };
    let fb = view.render(&snap, &valid, TIGHT);
    // Square covers rows 2-3, cols 3-4.
    assert_eq!(fb.get(1 + 3 * 2, 1 + 2).unwrap().ch, '▓');
    assert_eq!(fb.get(1 + 4 * 2 + 1, 1 + 3).unwrap().ch, '▓');
    assert_eq!(fb.get(1 + 5 * 2, 1 + 2).unwrap().ch, '·');

    let invalid = ViewOverlay {
        cursor: Some(CursorView {
            index: 1,
            row: 2,
            col: 3,
            valid: false,
        }),
        ..ViewOverlay::default()
    };
    let fb = view.render(&snap, &invalid, TIGHT);
    assert_eq!(fb.get(1 + 3 * 2, 1 + 2).unwrap().ch, '▒');
}

#[test]
fn test_term_view_flash_marks_cleared_lines() {
    let snap = GameState::new(1).snapshot();
    let mut flash = FlashView::default();
    flash.rows.push(4);
    let overlay = ViewOverlay {
        flash: Some(flash),
        ..ViewOverlay::default()
    };
    let fb = GameView::default().render(&snap, &overlay, TIGHT);

    let row = fb.row_text(1 + 4);
    assert_eq!(row.chars().filter(|&ch| ch == '░').count(), 16);
    assert!(!fb.row_text(1 + 3).contains('░'));
}

#[test]
fn test_term_view_tray_marks_selected_slot() {
    let game = dot_game();
    let overlay = ViewOverlay {
        cursor: Some(CursorView {
            index: 2,
            row: 0,
            col: 0,
            valid: true,
        }),
        ..ViewOverlay::default()
    };
    let fb = GameView::default().render(&game.snapshot(), &overlay, Viewport::new(60, 16));

    // Labels sit under the tray boxes on the last layout row.
    let labels = fb.row_text(15);
    assert_eq!(labels.matches('▶').count(), 1);
    assert!(labels.contains("▶3"));
    assert!(labels.contains('1') && labels.contains('2'));
}
