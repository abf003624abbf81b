//! Fixed timestep simulation tick
//!
//! The per-frame coordinator: moves everything, resolves hits, tops up the
//! enemy wave and runs the round clock.

use super::state::{GameEvent, GameState, RoundPhase, random_spawn_x};
use crate::error::ShapeError;

/// Held keys for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    /// Demo mode - the autopilot flies the ship
    pub autopilot: bool,
}

/// Advance the round by one frame of `dt` seconds.
///
/// Order within a frame:
/// 1. background scroll, ship movement/firing, bullet travel
/// 2. enemies fall (recycling at the bottom)
/// 3. bullet/enemy hits, then enemy/ship contact
/// 4. one enemy spawned when below the cap (it appears at y = 0)
/// 5. round clock and speed ramp
///
/// The frame that ends the round stops after step 3. An error leaves the
/// state consistent but skips whatever remained of the frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Result<Vec<GameEvent>, ShapeError> {
    let mut events = Vec::new();
    if state.is_over() {
        return Ok(events);
    }

    state.time_ticks += 1;
    state.background.update();

    let input = if input.autopilot {
        autopilot(state)
    } else {
        input.clone()
    };
    if state.player.steer(&input) {
        events.push(GameEvent::Fired {
            at: state.player.position(),
        });
    }
    state.player.update_bullets();

    let screen_height = state.config.screen_height;
    for enemy in &mut state.enemies {
        if enemy.advance(screen_height, || random_spawn_x(&mut state.rng, &state.config)) {
            events.push(GameEvent::EnemyRecycled {
                id: enemy.id,
                x: enemy.position().x,
            });
        }
    }

    resolve_bullet_hits(state, &mut events);

    let player_pos = state.player.position();
    if let Some(enemy) = state.enemies.iter().find(|e| e.contains(player_pos)) {
        events.push(GameEvent::PlayerHit { enemy_id: enemy.id });
        state.phase = RoundPhase::Over;
        log::info!(
            "Round over after {} frames with score {}",
            state.time_ticks,
            state.score
        );
        return Ok(events);
    }

    if state.enemies.len() < state.settings.enemy_spawn_cap {
        let id = state.spawn_enemy()?;
        if let Some(enemy) = state.enemies.last() {
            events.push(GameEvent::EnemySpawned {
                id,
                x: enemy.position().x,
            });
        }
    }

    advance_clock(state, dt, &mut events);

    Ok(events)
}

/// A bullet destroys every enemy that contains it and is spent if it hit
/// anything. An enemy dies at most once; both lists are swept after the scan.
fn resolve_bullet_hits(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.enemies.is_empty() || state.player.bullets.is_empty() {
        return;
    }

    let mut dead = vec![false; state.enemies.len()];
    let enemies = &state.enemies;
    let mut hits = 0;

    state.player.bullets.retain(|bullet| {
        let mut spent = false;
        for (i, enemy) in enemies.iter().enumerate() {
            if !dead[i] && enemy.contains(bullet.position) {
                dead[i] = true;
                hits += 1;
                spent = true;
                events.push(GameEvent::EnemyDestroyed {
                    id: enemy.id,
                    at: bullet.position,
                });
            }
        }
        !spent
    });

    if hits > 0 {
        let mut flags = dead.iter();
        state
            .enemies
            .retain(|_| !flags.next().copied().unwrap_or(false));
        state.score += hits;
    }
}

/// Every full `speed_ramp_interval_secs` of round time speeds up all active
/// enemies once.
fn advance_clock(state: &mut GameState, dt: f32, events: &mut Vec<GameEvent>) {
    state.elapsed_secs += dt as f64;
    let interval = state.config.speed_ramp_interval_secs as f64;

    while state.elapsed_secs >= interval * (state.speed_ramps + 1) as f64 {
        state.speed_ramps += 1;
        for enemy in &mut state.enemies {
            enemy.speed += state.config.speed_ramp_step;
        }
        log::info!(
            "Enemy speed ramp {} applied to {} enemies",
            state.speed_ramps,
            state.enemies.len()
        );
        events.push(GameEvent::SpeedIncreased {
            ramp: state.speed_ramps,
            enemies: state.enemies.len(),
        });
    }
}

/// Chase the lowest enemy and fire while lined up under it
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    let player_x = state.player.position().x;

    let target = state
        .enemies
        .iter()
        .map(|e| e.bounds())
        .max_by(|a, b| {
            a.max
                .y
                .partial_cmp(&b.max.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(rect) = target {
        let dx = rect.center().x - player_x;
        input.left = dx < -state.player.speed;
        input.right = dx > state.player.speed;
        input.fire = dx.abs() <= rect.size().x / 2.0;
    }
    input
}
