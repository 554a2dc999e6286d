use anyhow::{Context, Result};
use brawl_fsm::engine::game_loop::TickScheduler;
use brawl_fsm::engine::input::{Action, PlayerInput};
use brawl_fsm::engine::physics::{body::presets, PhysicsWorld};
use brawl_fsm::game::characters::{CharacterId, CharacterManager, FighterObserver, FighterStats};
use brawl_fsm::game::combat::MoveCatalog;
use brawl_fsm::game::fsm::{StateConfig, StateType};
use glam::Vec2;
use log::info;
use std::time::Duration;

/// Length of the scripted match in ticks
const MATCH_TICKS: u64 = 420;

/// One synthetic display frame at 60 Hz
const FRAME_TIME: Duration = Duration::from_micros(16_667);

/// A scripted input event
enum Cue {
    Press(usize, Action),
    Release(usize, Action),
    /// Player gets hit for this many frames of stun
    Hit(usize, u32),
    /// Player is knocked out
    Ko(usize),
}

/// Watches for knockouts to call the round
#[derive(Default)]
struct Referee {
    knocked_out: Option<CharacterId>,
}

impl FighterObserver for Referee {
    fn on_death(&mut self, id: CharacterId, name: &str) {
        info!("K.O.! {} is down", name);
        self.knocked_out.get_or_insert(id);
    }
}

/// Input timeline for the headless demo match
fn script() -> Vec<(u64, Cue)> {
    use Action::*;
    use Cue::*;

    vec![
        (30, Press(0, MoveRight)),
        (60, Release(0, MoveRight)),
        (70, Press(0, Punch)),
        (72, Release(0, Punch)),
        (110, Press(1, Jump)),
        (120, Release(1, Jump)),
        (125, Press(1, Kick)),
        (127, Release(1, Kick)),
        (200, Press(0, Down)),
        (200, Press(0, Kick)),
        (205, Release(0, Kick)),
        (205, Release(0, Down)),
        (240, Hit(1, 18)),
        (300, Press(0, Dash)),
        (301, Release(0, Dash)),
        (340, Press(1, MoveLeft)),
        (380, Ko(1)),
    ]
}

fn main() -> Result<()> {
    // Initialize logger, RUST_LOG=fsm::attack=debug narrows to a single state
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting headless match...");

    let catalog = MoveCatalog::standard();
    let moveset = catalog
        .get("standard")
        .context("standard moveset missing from catalog")?;
    let config = StateConfig::standard(moveset);

    // Arena: a wide stage with its top surface at y = 0
    let mut physics = PhysicsWorld::new();
    let stage = physics.add_rigid_body(presets::stage_body(0.0, -0.5));
    physics.add_collider(presets::stage_collider(40.0, 1.0), stage);

    let mut characters = CharacterManager::new();
    for (player, x) in [(0, -3.0), (1, 3.0)] {
        characters
            .spawn_character(
                &format!("Player {}", player + 1),
                player,
                FighterStats::standard(),
                config.clone(),
                &mut physics,
                Vec2::new(x, 1.5),
            )
            .context("failed to spawn fighter")?;
    }

    let mut inputs = [PlayerInput::new(0), PlayerInput::new(1)];
    let mut last_states = [StateType::None; 2];
    let mut scheduler = TickScheduler::new();
    let timeline = script();
    let mut referee = Referee::default();
    let mut tick: u64 = 0;

    while tick < MATCH_TICKS {
        for _ in 0..scheduler.advance(FRAME_TIME) {
            for (_, cue) in timeline.iter().filter(|(at, _)| *at == tick) {
                match *cue {
                    Cue::Press(player, action) => inputs[player].press(action),
                    Cue::Release(player, action) => inputs[player].release(action),
                    Cue::Hit(player, stun) => {
                        if let Some(character) = characters.get_by_player_mut(player) {
                            character.receive_hit(&mut physics, stun);
                        }
                    }
                    Cue::Ko(player) => {
                        if let Some(character) = characters.get_by_player_mut(player) {
                            character.die(&mut physics, &mut referee);
                        }
                    }
                }
            }

            let snapshots = [inputs[0].snapshot(), inputs[1].snapshot()];
            characters.update(&mut physics, &snapshots);
            inputs.iter_mut().for_each(PlayerInput::end_tick);

            for character in characters.all() {
                let Some(player) = character.player_index else {
                    continue;
                };
                let state = character.state();
                if state != last_states[player] {
                    let previous = last_states[player];
                    info!("[tick {:>3}] {}: {} -> {}", tick, character.name, previous, state);
                    last_states[player] = state;
                }
            }

            tick += 1;
        }
    }

    if let Some(loser) = referee.knocked_out {
        if let Some(winner) = characters.opponent_of(loser) {
            info!("{} wins", winner.name);
        }
    }

    info!(
        "Match finished after {} ticks ({} frames)",
        scheduler.tick_count(),
        scheduler.frame_count()
    );
    Ok(())
}
