//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;

use super::collision::first_hit;
use super::input::InputState;
use super::kinematics::decompose_velocity;
use super::state::{GameEvent, GameState, SessionPhase};

/// Advance the game state by one fixed timestep
///
/// Order within a tick: spawner tasks, movement, win check, enemies
/// (including player hits), firing, projectiles (including enemy hits),
/// then removal of everything destroyed this tick. Terminal phases do not
/// stop the loop; they only stop further phase changes.
pub fn tick(state: &mut GameState, input: &InputState, dt: f32) {
    state.time_ticks += 1;
    state.clock += dt as f64;

    // Spawner runs on its own clock, ahead of the simulation step
    state.run_due_tasks();

    // 1. Movement intent, frozen once the player is dead
    let delta = if state.player.is_alive() {
        input.net_movement(state.tuning.move_speed)
    } else {
        Vec2::ZERO
    };
    state.last_world_delta = delta;

    // 2. Scroll the world
    state.world_offset += delta;

    // 3. Nothing left to fight
    if state.enemies.is_empty() && state.waves.is_done() {
        state.finish(SessionPhase::Won);
    }

    let center = state.screen_center();
    let shooting = if input.idle_mode {
        idle_aim(state)
    } else {
        input.shooting
    };

    // 4. Enemies: ride the scroll, home in, bite
    let enemy_speed = state.tuning.enemy_speed;
    let mut player_hits = Vec::new();
    let mut player_killed = false;
    for enemy in &mut state.enemies {
        enemy.pos += delta;
        if state.player.is_alive() {
            enemy.retarget_toward(center);
        }
        enemy.pos += decompose_velocity(enemy_speed, enemy.heading);

        if enemy.contains_point(center) && state.player.is_alive() {
            player_killed |= state.player.apply_damage(1);
            player_hits.push(state.player.health);
        }
    }
    state.stats.damage_taken += player_hits.len() as u32;
    for health in player_hits {
        state.push_event(GameEvent::PlayerHit { health });
    }
    if player_killed {
        state.finish(SessionPhase::Lost);
    }

    // Level-triggered: one shot per tick while held
    if shooting {
        state.fire_projectile();
    }

    // 5. Projectiles: ride the scroll, fly, hit at most one enemy
    let bullet_speed = state.tuning.bullet_speed;
    let despawn_distance = state.tuning.projectile_despawn_distance;
    let mut spent = Vec::new();
    let mut expired = Vec::new();
    let mut hits = Vec::new();
    for projectile in &mut state.projectiles {
        projectile.pos += delta + decompose_velocity(bullet_speed, projectile.heading);

        if let Some(idx) = first_hit(&state.enemies, projectile.pos) {
            let enemy = &mut state.enemies[idx];
            let killed = enemy.apply_damage(1);
            hits.push((enemy.id, enemy.kind, enemy.health, killed));
            spent.push(projectile.id);
        } else if despawn_distance.is_some_and(|limit| projectile.pos.distance(center) > limit) {
            expired.push(projectile.id);
        }
    }

    for (id, kind, health, killed) in hits {
        state.push_event(GameEvent::EnemyHit { id, health });
        if killed {
            log::debug!("{:?} #{} destroyed", kind, id);
            state.stats.enemies_killed += 1;
            state.push_event(GameEvent::EnemyKilled { id, kind });
        }
    }
    for &id in &expired {
        state.stats.projectiles_expired += 1;
        state.push_event(GameEvent::ProjectileExpired { id });
    }

    // 6. Deferred removal
    state.enemies.retain(|e| e.is_alive());
    state
        .projectiles
        .retain(|p| !spent.contains(&p.id) && !expired.contains(&p.id));
}

/// Demo mode: face the nearest enemy. Returns whether there is anything to shoot.
fn idle_aim(state: &mut GameState) -> bool {
    let center = state.screen_center();
    let target = state
        .enemies
        .iter()
        .filter(|e| e.is_alive())
        .map(|e| e.center())
        .min_by(|a, b| {
            a.distance_squared(center)
                .partial_cmp(&b.distance_squared(center))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    match target {
        Some(target) => {
            state.player.retarget_toward(target);
            true
        }
        None => false,
    }
}
