/// Rendering layer. All terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only scales the
/// logical pixel canvas onto the terminal cell grid and translates state
/// into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use save_the_penguin::consts::{LOGICAL_HEIGHT, LOGICAL_WIDTH};
use save_the_penguin::entities::{GamePhase, GameState, Ship};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_OK: Color = Color::White;
const C_HUD_LOW: Color = Color::Red;
const C_PENGUIN: Color = Color::White;
const C_SHIP: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// Health at or below this renders the HUD in red.
const LOW_HEALTH: i32 = 20;

// ── Canvas-to-cell mapping ────────────────────────────────────────────────────

/// Playfield cell rows/cols: row 0 is the HUD, row 1 and row h-2 are the
/// border bars, row h-1 is the controls hint.  Logical points scale
/// linearly into the box between them.
fn to_cell(x: i32, y: i32, term_w: u16, term_h: u16) -> (u16, u16) {
    let cols = term_w.saturating_sub(2).max(1) as i64;
    let rows = term_h.saturating_sub(4).max(1) as i64;
    let cx = x.clamp(0, LOGICAL_WIDTH) as i64 * (cols - 1).max(1) / LOGICAL_WIDTH as i64;
    let cy = y.clamp(0, LOGICAL_HEIGHT) as i64 * (rows - 1).max(1) / LOGICAL_HEIGHT as i64;
    (1 + cx as u16, 2 + cy as u16)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (term_w, term_h) = terminal::size()?;

    draw_border(out, term_w, term_h)?;
    draw_hud(out, state)?;

    for ship in &state.ships {
        draw_ship(out, ship, term_w, term_h)?;
    }
    draw_penguin(out, state, term_w, term_h)?;
    draw_controls_hint(out, term_h)?;

    if state.phase == GamePhase::GameOver {
        draw_game_over(out, term_w, term_h)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, term_h.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, term_w: u16, term_h: u16) -> std::io::Result<()> {
    let w = term_w as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1: top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar
    out.queue(cursor::MoveTo(0, term_h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..term_h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(term_w.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let color = if state.penguin.health <= LOW_HEALTH {
        C_HUD_LOW
    } else {
        C_HUD_OK
    };
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(format!("Health: {}", state.penguin.health)))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_penguin<W: Write>(
    out: &mut W,
    state: &GameState,
    term_w: u16,
    term_h: u16,
) -> std::io::Result<()> {
    // 2-row sprite centred on the bounding box:
    //   (^)    ← head
    //   ▐█▌    ← body + flippers
    let (cx, cy) = state.penguin.rect.center();
    let (col, row) = to_cell(cx, cy, term_w, term_h);

    out.queue(style::SetForegroundColor(C_PENGUIN))?;
    out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row))?;
    out.queue(Print("(^)"))?;
    if row + 1 < term_h.saturating_sub(2) {
        out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row + 1))?;
        out.queue(Print("▐█▌"))?;
    }
    Ok(())
}

fn draw_ship<W: Write>(out: &mut W, ship: &Ship, term_w: u16, term_h: u16) -> std::io::Result<()> {
    // Ships spawn above the canvas; skip them until they drift into view.
    if ship.rect.bottom() <= 0 {
        return Ok(());
    }
    let (cx, cy) = ship.rect.center();
    let (col, row) = to_cell(cx, cy.max(0), term_w, term_h);

    out.queue(style::SetForegroundColor(C_SHIP))?;
    out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row))?;
    out.queue(Print("«▼»"))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, term_h: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, term_h.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → ↑ ↓ / WASD : Move   ESC : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, term_w: u16, term_h: u16) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║     Game Over!     ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        ("Press R to Restart or Q to Quit", Color::White),
    ];

    let cx = term_w / 2;
    let start_row = (term_h / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
