/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `Session` (and, where needed, an RNG handle) and returns a brand-new
/// `Session`.  Side effects are limited to the injected RNG, so a seeded
/// `StdRng` makes every outcome reproducible in tests.

use rand::Rng;

use crate::config::Config;
use crate::entities::{Enemy, Food, FoodKind, GameState, Session, Snake};
use crate::grid::{Cell, Direction, Grid};

/// A player intent, produced by the input mapper and consumed by [`apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Steer(Direction),
    Pause,
    Resume,
    Restart,
    Menu,
    /// Handled by the binary's event loop, not by the state machine.
    Quit,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a session sitting at the menu.  Entities are laid out but nothing
/// moves until a `Start` command flips the state to `Playing`.
pub fn new_session(config: &Config, high_score: u32, rng: &mut impl Rng) -> Session {
    spawn_session(config, high_score, GameState::Menu, rng)
}

fn spawn_session(
    config: &Config,
    high_score: u32,
    state: GameState,
    rng: &mut impl Rng,
) -> Session {
    let grid = Grid::new(config.grid_width, config.grid_height);

    // Three segments, heading right, head at the grid centre.
    let head = Cell::new(grid.width / 2, grid.height / 2);
    let body = vec![
        head,
        Cell::new(head.x - 1, head.y),
        Cell::new(head.x - 2, head.y),
    ];
    let snake = Snake {
        body,
        direction: Direction::Right,
        queued: None,
    };

    let food = Food {
        cell: grid.random_free_cell(&snake.body, rng),
        kind: FoodKind::Apple,
    };

    let mut enemies: Vec<Enemy> = Vec::with_capacity(config.enemy_count);
    let mut occupied = snake.body.clone();
    occupied.push(food.cell);
    for _ in 0..config.enemy_count {
        let cell = grid.random_free_cell(&occupied, rng);
        occupied.push(cell);
        enemies.push(Enemy { cell });
    }

    Session {
        grid,
        snake,
        food,
        coconut: None,
        enemies,
        score: 0,
        high_score,
        state,
        tick: 0,
        tick_ms: config.tick_start_ms,
    }
}

// ── Command dispatch ─────────────────────────────────────────────────────────

/// The state-machine transition table.  Pairs not listed here are no-ops;
/// in particular a reverse-direction key is simply buffered and rejected
/// later, never an error.
pub fn apply(state: &Session, cmd: Command, config: &Config, rng: &mut impl Rng) -> Session {
    match (&state.state, cmd) {
        (GameState::Menu, Command::Start) | (GameState::GameOver, Command::Restart) => {
            spawn_session(config, state.high_score, GameState::Playing, rng)
        }
        (GameState::Playing, Command::Steer(dir)) => Session {
            snake: Snake {
                queued: Some(dir),
                ..state.snake.clone()
            },
            ..state.clone()
        },
        (GameState::Playing, Command::Pause) => Session {
            state: GameState::Paused,
            ..state.clone()
        },
        (GameState::Paused, Command::Resume) => Session {
            state: GameState::Playing,
            ..state.clone()
        },
        (GameState::Paused, Command::Menu) | (GameState::GameOver, Command::Menu) => Session {
            state: GameState::Menu,
            ..state.clone()
        },
        _ => state.clone(),
    }
}

// ── Per-tick advance (pure — RNG is injected) ────────────────────────────────

/// Advance the session by one tick.  Outside `Playing` this is the identity.
pub fn tick(state: &Session, config: &Config, rng: &mut impl Rng) -> Session {
    if state.state != GameState::Playing {
        return state.clone();
    }

    let tick = state.tick + 1;

    // ── 1. Apply buffered steering, dropping direct reversals ───────────────
    let direction = match state.snake.queued {
        Some(queued) if !state.snake.direction.is_opposite(queued) => queued,
        _ => state.snake.direction,
    };

    let new_head = state.snake.head().step(direction);

    // ── 2. Wall collision — snake stays put, session ends ────────────────────
    if !state.grid.contains(new_head) {
        return game_over(state, tick, state.snake.body.clone(), state.enemies.clone());
    }

    let ate_apple = new_head == state.food.cell;
    let ate_coconut = state
        .coconut
        .as_ref()
        .map(|c| c.cell == new_head)
        .unwrap_or(false);

    // ── 3. Move the snake: new head in front, tail retained only on apple ────
    let mut body = Vec::with_capacity(state.snake.len() + 1);
    body.push(new_head);
    body.extend_from_slice(&state.snake.body);
    if !ate_apple {
        body.pop();
    }
    if ate_coconut && body.len() > 1 {
        body.pop();
    }

    // ── 4. Self collision (the vacated tail cell is already gone) ────────────
    if body[1..].contains(&new_head) {
        return game_over(state, tick, body, state.enemies.clone());
    }

    // ── 5. Enemies random-walk on their interval ─────────────────────────────
    let enemies = if tick % config.enemy_tick_interval == 0 {
        move_enemies(&state.enemies, state.grid, rng)
    } else {
        state.enemies.clone()
    };

    // ── 6. Enemy contact with the head ends the session ──────────────────────
    if enemies.iter().any(|e| e.cell == new_head) {
        return game_over(state, tick, body, enemies);
    }

    // ── 7. Scoring, food relocation, coconut lifecycle ───────────────────────
    let mut score = state.score;
    let mut coconut = state.coconut.clone();
    let mut tick_ms = state.tick_ms;

    let food = if ate_apple {
        score += 1;

        let mut occupied: Vec<Cell> = body.clone();
        occupied.extend(enemies.iter().map(|e| e.cell));
        if let Some(c) = &coconut {
            occupied.push(c.cell);
        }
        let food = Food {
            cell: state.grid.random_free_cell(&occupied, rng),
            kind: FoodKind::Apple,
        };

        if coconut.is_none() && rng.gen_bool(config.coconut_chance) {
            occupied.push(food.cell);
            coconut = Some(Food {
                cell: state.grid.random_free_cell(&occupied, rng),
                kind: FoodKind::Coconut,
            });
        }
        food
    } else {
        state.food.clone()
    };

    if ate_coconut {
        score += 2;
        coconut = None;
        tick_ms = tick_ms.saturating_sub(config.tick_step_ms).max(config.tick_min_ms);
    }

    Session {
        snake: Snake {
            body,
            direction,
            queued: None,
        },
        food,
        coconut,
        enemies,
        score,
        tick,
        tick_ms,
        ..state.clone()
    }
}

fn game_over(state: &Session, tick: u64, body: Vec<Cell>, enemies: Vec<Enemy>) -> Session {
    Session {
        state: GameState::GameOver,
        high_score: state.high_score.max(state.score),
        snake: Snake {
            body,
            queued: None,
            ..state.snake.clone()
        },
        enemies,
        tick,
        ..state.clone()
    }
}

/// Each enemy picks a random direction among those that stay inside the
/// grid and do not land on another enemy; with no legal option it stays
/// in place.  Enemies may cross the snake's body — only head contact kills.
fn move_enemies(enemies: &[Enemy], grid: Grid, rng: &mut impl Rng) -> Vec<Enemy> {
    let mut moved: Vec<Enemy> = Vec::with_capacity(enemies.len());
    for (i, enemy) in enemies.iter().enumerate() {
        let candidates: Vec<Cell> = Direction::ALL
            .iter()
            .map(|&d| enemy.cell.step(d))
            .filter(|&c| {
                grid.contains(c)
                    && !moved.iter().any(|e| e.cell == c)
                    && !enemies[i + 1..].iter().any(|e| e.cell == c)
            })
            .collect();
        let cell = if candidates.is_empty() {
            enemy.cell
        } else {
            candidates[rng.gen_range(0..candidates.len())]
        };
        moved.push(Enemy { cell });
    }
    moved
}
