/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG, so a
/// seeded generator replays a whole run tick for tick.

use rand::Rng;

use crate::consts::{
    COLLISION_DAMAGE, PENGUIN_BOTTOM_OFFSET, PENGUIN_SIZE, PENGUIN_SPEED,
    PENGUIN_START_HEALTH, SHIP_MAX_SPEED, SHIP_MIN_SPEED, SHIP_SIZE,
    SHIP_SPAWN_Y_MAX, SHIP_SPAWN_Y_MIN, WAVE_MAX_SHIPS, WAVE_MIN_SHIPS,
};
use crate::entities::{GamePhase, GameState, Penguin, Rect, Ship};

// ── Input snapshot ───────────────────────────────────────────────────────────

/// The signals consumed by one call to `tick`, polled once per frame.
/// Several directions may be active at the same time.
#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Only honored while the phase is `GameOver`.
    pub restart: bool,
    /// Only honored while the phase is `GameOver`.
    pub quit: bool,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Spawn one ship above the visible top edge.  Draw order is speed, then
/// x, then y, so a scripted RNG sequence lines up with the fields.
pub fn spawn_ship(width: i32, rng: &mut impl Rng) -> Ship {
    let vy = rng.gen_range(SHIP_MIN_SPEED..=SHIP_MAX_SPEED);
    let x = rng.gen_range(0..=width - SHIP_SIZE);
    let y = rng.gen_range(SHIP_SPAWN_Y_MIN..=SHIP_SPAWN_Y_MAX);
    Ship {
        rect: Rect::new(x, y, SHIP_SIZE, SHIP_SIZE),
        vy,
    }
}

/// Spawn a full wave of 1 to 3 ships.
pub fn spawn_wave(width: i32, rng: &mut impl Rng) -> Vec<Ship> {
    let count = rng.gen_range(WAVE_MIN_SHIPS..=WAVE_MAX_SHIPS);
    (0..count).map(|_| spawn_ship(width, rng)).collect()
}

/// The penguin at its canonical start: centered horizontally, center
/// `PENGUIN_BOTTOM_OFFSET` pixels above the bottom edge, full health.
fn start_penguin(width: i32, height: i32) -> Penguin {
    Penguin {
        rect: Rect::from_center(
            width / 2,
            height - PENGUIN_BOTTOM_OFFSET,
            PENGUIN_SIZE,
            PENGUIN_SIZE,
        ),
        health: PENGUIN_START_HEALTH,
    }
}

/// Build the initial game state for the given logical canvas size.
pub fn init_state(width: i32, height: i32, rng: &mut impl Rng) -> GameState {
    GameState {
        penguin: start_penguin(width, height),
        ships: spawn_wave(width, rng),
        phase: GamePhase::Playing,
        running: true,
        frame: 0,
        width,
        height,
    }
}

// ── Penguin movement & health ────────────────────────────────────────────────

/// Hard clamp: the rect is pushed back fully inside [0,w] x [0,h]
/// rather than having the move rejected.
fn clamp_to_canvas(mut rect: Rect, width: i32, height: i32) -> Rect {
    rect.x = rect.x.max(0).min(width - rect.w);
    rect.y = rect.y.max(0).min(height - rect.h);
    rect
}

/// Apply one frame of directional input, then clamp to the canvas.
/// Opposite directions held together cancel out.
pub fn move_penguin(state: &GameState, input: &FrameInput) -> GameState {
    let mut rect = state.penguin.rect;
    if input.left {
        rect.x -= PENGUIN_SPEED;
    }
    if input.right {
        rect.x += PENGUIN_SPEED;
    }
    if input.up {
        rect.y -= PENGUIN_SPEED;
    }
    if input.down {
        rect.y += PENGUIN_SPEED;
    }
    let rect = clamp_to_canvas(rect, state.width, state.height);
    GameState {
        penguin: Penguin {
            rect,
            ..state.penguin.clone()
        },
        ..state.clone()
    }
}

/// Subtract `amount` from health, unconditionally.  There is no floor:
/// health may sit below zero until the next terminal check, which only
/// ever asks `> 0`.
pub fn take_damage(state: &GameState, amount: i32) -> GameState {
    GameState {
        penguin: Penguin {
            health: state.penguin.health - amount,
            ..state.penguin.clone()
        },
        ..state.clone()
    }
}

pub fn is_alive(penguin: &Penguin) -> bool {
    penguin.health > 0
}

// ── Ships & waves ────────────────────────────────────────────────────────────

/// A ship is gone once its top edge has passed the bottom of the canvas.
pub fn is_off_screen(ship: &Ship, height: i32) -> bool {
    ship.rect.top() > height
}

/// Advance every ship by its own fall speed, drop the ones past the
/// bottom edge, and respawn a full wave if none remain.  The live set is
/// therefore never empty once this returns.
pub fn update_ships(state: &GameState, rng: &mut impl Rng) -> GameState {
    let ships: Vec<Ship> = state
        .ships
        .iter()
        .map(|s| Ship {
            rect: Rect {
                y: s.rect.y + s.vy,
                ..s.rect
            },
            ..s.clone()
        })
        .filter(|s| !is_off_screen(s, state.height))
        .collect();

    let ships = if ships.is_empty() {
        spawn_wave(state.width, rng)
    } else {
        ships
    };

    GameState {
        ships,
        ..state.clone()
    }
}

/// Scan the wave in insertion order and resolve the FIRST ship that
/// overlaps the penguin: `COLLISION_DAMAGE` is applied and the entire
/// wave is replaced.  A hit is a wave-reset event, not a single-ship
/// removal; the respawn gap above the screen is the player's breather
/// after taking damage.
pub fn handle_collisions(state: &GameState, rng: &mut impl Rng) -> GameState {
    let hit = state
        .ships
        .iter()
        .find(|s| s.rect.intersects(&state.penguin.rect));
    if hit.is_none() {
        return state.clone();
    }

    GameState {
        ships: spawn_wave(state.width, rng),
        ..take_damage(state, COLLISION_DAMAGE)
    }
}

// ── Phase transitions ────────────────────────────────────────────────────────

/// `Playing` becomes `GameOver` once the penguin's health has run out.
pub fn check_game_over(state: &GameState) -> GameState {
    if is_alive(&state.penguin) {
        return state.clone();
    }
    GameState {
        phase: GamePhase::GameOver,
        ..state.clone()
    }
}

/// Restart after a game over: canonical penguin, a fresh wave, back to
/// `Playing`.  The frame counter keeps counting across restarts.
pub fn reset_state(state: &GameState, rng: &mut impl Rng) -> GameState {
    GameState {
        penguin: start_penguin(state.width, state.height),
        ships: spawn_wave(state.width, rng),
        phase: GamePhase::Playing,
        ..state.clone()
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  All randomness comes through
/// `rng` so callers control determinism (tests use a seeded RNG).
///
/// While the phase is `GameOver` only the restart and quit signals are
/// consumed; penguin and wave state stay frozen until one arrives.
pub fn tick(state: &GameState, input: &FrameInput, rng: &mut impl Rng) -> GameState {
    let frame = state.frame + 1;

    if state.phase == GamePhase::GameOver {
        if input.quit {
            return GameState {
                running: false,
                frame,
                ..state.clone()
            };
        }
        if input.restart {
            return GameState {
                frame,
                ..reset_state(state, rng)
            };
        }
        return GameState {
            frame,
            ..state.clone()
        };
    }

    // ── 1. Move the penguin per the held directions ──────────────────────────
    let state = move_penguin(state, input);

    // ── 2. Ships fall; cull the ones past the bottom, replenish if empty ─────
    let state = update_ships(&state, rng);

    // ── 3. First overlapping ship deals damage and resets the wave ───────────
    let state = handle_collisions(&state, rng);

    // ── 4. Terminal check ────────────────────────────────────────────────────
    let state = check_game_over(&state);

    GameState { frame, ..state }
}
