/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// session.  No game logic is performed; this module only translates
/// state into terminal commands.  Every grid cell is drawn two columns
/// wide so the board looks roughly square.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::{GameState, Session};
use crate::grid::Cell;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkGreen;
const C_HUD_SCORE: Color = Color::Yellow;
const C_SNAKE_HEAD: Color = Color::Yellow;
const C_APPLE: Color = Color::Red;
const C_COCONUT: Color = Color::DarkYellow;
const C_ENEMY: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

/// Body segments cycle through these, head excluded.
const C_RAINBOW: [Color; 7] = [
    Color::Red,
    Color::DarkYellow,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

// Field origin in terminal coordinates: row 0 is the HUD, row 1 the top
// border, column 0 the left border.
const FIELD_LEFT: u16 = 1;
const FIELD_TOP: u16 = 2;

fn cell_origin(cell: Cell) -> (u16, u16) {
    (FIELD_LEFT + cell.x as u16 * 2, FIELD_TOP + cell.y as u16)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &Session) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match state.state {
        GameState::Menu => draw_menu(out, state)?,
        GameState::Playing | GameState::Paused | GameState::GameOver => {
            draw_border(out, state)?;
            draw_hud(out, state)?;
            draw_food(out, state)?;
            draw_enemies(out, state)?;
            draw_snake(out, state)?;
            draw_controls_hint(out, state)?;
            if state.state == GameState::Paused {
                draw_pause_overlay(out, state)?;
            }
            if state.state == GameState::GameOver {
                draw_game_over(out, state)?;
            }
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, FIELD_TOP + state.grid.height as u16 + 2))?;
    out.flush()?;
    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn draw_menu<W: Write>(out: &mut W, state: &Session) -> std::io::Result<()> {
    let cx = FIELD_LEFT + state.grid.width as u16; // centre column of the field
    let cy = FIELD_TOP + state.grid.height as u16 / 2;

    let centred = |text: &str| cx.saturating_sub(text.chars().count() as u16 / 2);

    let title = "★  GARDEN  SNAKE  ★";
    out.queue(cursor::MoveTo(centred(title), cy.saturating_sub(5)))?;
    out.queue(style::SetForegroundColor(Color::Green))?;
    out.queue(Print(title))?;

    if state.high_score > 0 {
        let hs = format!("High Score: {}", state.high_score);
        out.queue(cursor::MoveTo(centred(&hs), cy.saturating_sub(3)))?;
        out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
        out.queue(Print(&hs))?;
    }

    let start = "Press SPACE to start";
    out.queue(cursor::MoveTo(centred(start), cy))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(start))?;

    let legend: &[(&str, Color, &str)] = &[
        ("●", C_APPLE, " Apple   — +1 point, snake grows"),
        ("◉", C_COCONUT, " Coconut — +2 points, snake shrinks, speeds up"),
        ("◢◣", C_ENEMY, " Enemy  — don't touch!"),
    ];
    for (i, (sym, color, desc)) in legend.iter().enumerate() {
        let row = cy + 2 + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(14), row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*sym))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(*desc))?;
    }

    let hint = "↑ ↓ ← → / WASD : Move   P : Pause   Q : Quit";
    out.queue(cursor::MoveTo(centred(hint), cy + 6))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;

    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, state: &Session) -> std::io::Result<()> {
    let inner = state.grid.width as usize * 2;
    let bottom = FIELD_TOP + state.grid.height as u16;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, FIELD_TOP - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(inner))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(inner))))?;

    for row in FIELD_TOP..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(FIELD_LEFT + inner as u16, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &Session) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    if state.high_score > 0 {
        out.queue(Print(format!(
            "Score:{:>4}  Hi:{:>4}",
            state.score, state.high_score
        )))?;
    } else {
        out.queue(Print(format!("Score:{:>4}", state.score)))?;
    }

    // Speed and coconut alert — right side
    let coconut_tag = if state.coconut.is_some() {
        "◉ Coconut!  "
    } else {
        ""
    };
    let speed_str = format!("{}Speed:{:>3}ms", coconut_tag, state.tick_ms);
    let rx = (FIELD_LEFT + state.grid.width as u16 * 2)
        .saturating_sub(speed_str.chars().count() as u16);
    out.queue(cursor::MoveTo(rx, 0))?;
    if !coconut_tag.is_empty() {
        out.queue(style::SetForegroundColor(C_COCONUT))?;
        out.queue(Print(coconut_tag))?;
    }
    out.queue(style::SetForegroundColor(Color::Blue))?;
    out.queue(Print(format!("Speed:{:>3}ms", state.tick_ms)))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_snake<W: Write>(out: &mut W, state: &Session) -> std::io::Result<()> {
    for (i, &cell) in state.snake.body.iter().enumerate() {
        let (x, y) = cell_origin(cell);
        let color = if i == 0 {
            C_SNAKE_HEAD
        } else {
            C_RAINBOW[(i - 1) % C_RAINBOW.len()]
        };
        out.queue(cursor::MoveTo(x, y))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print("██"))?;
    }
    Ok(())
}

fn draw_food<W: Write>(out: &mut W, state: &Session) -> std::io::Result<()> {
    let (x, y) = cell_origin(state.food.cell);
    out.queue(cursor::MoveTo(x, y))?;
    out.queue(style::SetForegroundColor(C_APPLE))?;
    out.queue(Print("●"))?;

    if let Some(coconut) = &state.coconut {
        let (x, y) = cell_origin(coconut.cell);
        out.queue(cursor::MoveTo(x, y))?;
        out.queue(style::SetForegroundColor(C_COCONUT))?;
        out.queue(Print("◉"))?;
    }
    Ok(())
}

fn draw_enemies<W: Write>(out: &mut W, state: &Session) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_ENEMY))?;
    for enemy in &state.enemies {
        let (x, y) = cell_origin(enemy.cell);
        out.queue(cursor::MoveTo(x, y))?;
        out.queue(Print("◢◣"))?;
    }
    Ok(())
}

// ── Controls hint (below the field) ───────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &Session) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, FIELD_TOP + state.grid.height as u16 + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    let hint = match state.state {
        GameState::GameOver => "R : Play Again   ESC : Menu   Q : Quit",
        GameState::Paused => "P / SPACE : Resume   ESC : Menu   Q : Quit",
        _ => "↑ ↓ ← → / WASD : Move   P : Pause   Q : Quit",
    };
    out.queue(Print(hint))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_pause_overlay<W: Write>(out: &mut W, state: &Session) -> std::io::Result<()> {
    let msg = "║  P A U S E D  ║";
    let cx = FIELD_LEFT + state.grid.width as u16;
    let cy = FIELD_TOP + state.grid.height as u16 / 2;
    let col = cx.saturating_sub(msg.chars().count() as u16 / 2);

    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(cursor::MoveTo(col, cy.saturating_sub(1)))?;
    out.queue(Print("╔═══════════════╗"))?;
    out.queue(cursor::MoveTo(col, cy))?;
    out.queue(Print(msg))?;
    out.queue(cursor::MoveTo(col, cy + 1))?;
    out.queue(Print("╚═══════════════╝"))?;
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, state: &Session) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>4}", state.score);
    let new_best = state.score >= state.high_score && state.score > 0;
    let best_line = if new_best {
        format!("★ NEW BEST: {:>4} ★", state.high_score)
    } else {
        format!("High Score:  {:>4}", state.high_score)
    };

    let box_lines = [
        "╔════════════════════╗",
        "║     GAME  OVER     ║",
        "╚════════════════════╝",
    ];

    let cx = FIELD_LEFT + state.grid.width as u16;
    let total_rows = box_lines.len() as u16 + 3;
    let start_row =
        (FIELD_TOP + state.grid.height as u16 / 2).saturating_sub(total_rows / 2);
    let centred = |text: &str| cx.saturating_sub(text.chars().count() as u16 / 2);

    out.queue(style::SetForegroundColor(Color::Red))?;
    for (i, line) in box_lines.iter().enumerate() {
        out.queue(cursor::MoveTo(centred(line), start_row + i as u16))?;
        out.queue(Print(*line))?;
    }

    let score_row = start_row + box_lines.len() as u16;
    out.queue(cursor::MoveTo(centred(&score_line), score_row))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(&score_line))?;

    out.queue(cursor::MoveTo(centred(&best_line), score_row + 1))?;
    out.queue(style::SetForegroundColor(if new_best {
        Color::Yellow
    } else {
        C_HINT
    }))?;
    out.queue(Print(&best_line))?;

    let hint = "R - Play Again   ESC - Menu   Q - Quit";
    out.queue(cursor::MoveTo(centred(hint), score_row + 2))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
