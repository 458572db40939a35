//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use bastion_core::commands::PlayerCommand;
use bastion_core::enums::GamePhase;
use bastion_core::error::CommandError;
use bastion_core::events::GameEvent;
use bastion_core::rules::GameRules;
use bastion_core::state::*;
use bastion_core::types::{Position, SimClock, Viewport};

use crate::config::SimConfig;
use crate::round::GameState;
use crate::systems;
use crate::world_setup::{self, entity_id};

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimClock,
    state: GameState,
    rules: GameRules,
    viewport: Option<Viewport>,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config. The game waits
    /// in `Start` until [`Self::start_new_game`] is called.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimClock::default(),
            state: GameState::default(),
            rules: config.rules,
            viewport: None,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` nominal frames.
    ///
    /// Queued commands are applied first. Nothing moves outside `Playing`.
    pub fn tick(&mut self, dt: f64) {
        self.process_commands();

        if !self.state.is_playing() {
            return;
        }
        if !dt.is_finite() || dt <= 0.0 {
            debug!(dt, "Ignoring unusable frame delta");
            return;
        }

        self.time.advance(dt);
        self.run_systems(dt);
    }

    /// Fire an interceptor at `point` from the nearest eligible turret.
    ///
    /// Returns `Ok(false)` when nothing was launched: the game is not being
    /// played or no turret is standing with ammo.
    pub fn fire(&mut self, point: Position) -> Result<bool, CommandError> {
        if !point.is_finite() {
            return Err(CommandError::NonFinitePoint {
                x: point.x,
                y: point.y,
            });
        }
        if !self.state.is_playing() {
            debug!(phase = ?self.state.phase, "Fire ignored outside play");
            return Ok(false);
        }

        let Some(launch) = systems::fire_control::fire(&mut self.world, point, &self.rules)?
        else {
            debug!(x = point.x, y = point.y, "No eligible turret");
            return Ok(false);
        };

        self.state.round.interceptors_launched += 1;
        debug!(
            x = point.x,
            y = point.y,
            missiles_left = launch.missiles_left,
            "Interceptor launched"
        );
        self.events.push(GameEvent::InterceptorLaunched {
            turret: entity_id(launch.turret),
            target: point,
            missiles_left: launch.missiles_left,
        });
        Ok(true)
    }

    /// Full reset: lay out a fresh board for the given viewport and start round one.
    pub fn start_new_game(
        &mut self,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Result<(), CommandError> {
        let viewport = Viewport::new(viewport_width, viewport_height);
        if !viewport.is_valid() {
            return Err(CommandError::InvalidViewport {
                width: viewport_width,
                height: viewport_height,
            });
        }
        if !self.state.phase.accepts_new_game() {
            return Err(CommandError::PhaseMismatch {
                command: "start_new_game",
                phase: self.state.phase,
            });
        }

        world_setup::setup_game(&mut self.world, &viewport, &self.rules);
        self.state = GameState::new_game(&self.rules);
        self.time = SimClock::default();
        self.viewport = Some(viewport);

        info!(
            width = viewport.width,
            height = viewport.height,
            quota = self.state.round.quota,
            "New game started"
        );
        Ok(())
    }

    /// Leave `RoundEnd`: clear the sky, repair and refill turrets, start the next round.
    pub fn advance_round(&mut self) -> Result<(), CommandError> {
        if self.state.phase != GamePhase::RoundEnd {
            return Err(CommandError::PhaseMismatch {
                command: "advance_round",
                phase: self.state.phase,
            });
        }

        world_setup::clear_dynamic(&mut self.world, &mut self.despawn_buffer);
        world_setup::replenish_turrets(&mut self.world);
        self.state.next_round(&self.rules);

        info!(
            round = self.state.round.round,
            quota = self.state.round.quota,
            score = self.state.score,
            "Round started"
        );
        Ok(())
    }

    /// Take every event emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Build a complete snapshot of the current state.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.time, self.viewport, &self.state)
    }

    pub fn cities(&self) -> Vec<CityView> {
        systems::snapshot::build_cities(&self.world)
    }

    pub fn turrets(&self) -> Vec<TurretView> {
        systems::snapshot::build_turrets(&self.world)
    }

    pub fn enemies(&self) -> Vec<EnemyView> {
        systems::snapshot::build_enemies(&self.world)
    }

    pub fn interceptors(&self) -> Vec<InterceptorView> {
        systems::snapshot::build_interceptors(&self.world)
    }

    pub fn explosions(&self) -> Vec<ExplosionView> {
        systems::snapshot::build_explosions(&self.world)
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn round(&self) -> u32 {
        self.state.round.round
    }

    pub fn round_stats(&self) -> RoundView {
        self.state.round.view()
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimClock {
        self.time
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Spawn an enemy directly, bypassing the spawner (for testing).
    #[cfg(test)]
    pub(crate) fn spawn_test_enemy(
        &mut self,
        origin: Position,
        target: Position,
        speed: f64,
    ) -> EntityId {
        entity_id(world_setup::spawn_enemy(&mut self.world, origin, target, speed))
    }

    /// Apply all queued commands. Failures are logged and dropped.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(error) = self.handle_command(command) {
                warn!(command = command.name(), %error, "Command rejected");
            }
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) -> Result<(), CommandError> {
        match command {
            PlayerCommand::Fire { x, y } => self.fire(Position::new(x, y)).map(|_| ()),
            PlayerCommand::StartNewGame {
                viewport_width,
                viewport_height,
            } => self.start_new_game(viewport_width, viewport_height),
            PlayerCommand::AdvanceRound => self.advance_round(),
        }
    }

    /// Run all systems in order for one tick.
    fn run_systems(&mut self, dt: f64) {
        let Some(viewport) = self.viewport else {
            return;
        };

        // 1. Spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.state.round,
            &self.rules,
            &viewport,
            dt,
            &mut self.events,
        );

        // 2. Motion
        systems::movement::run(
            &mut self.world,
            &self.rules,
            dt,
            &mut self.despawn_buffer,
            &mut self.events,
        );

        // 3. Arrivals, possibly ending the game
        systems::collision::resolve_arrivals(
            &mut self.world,
            &mut self.state,
            &self.rules,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        if !self.state.is_playing() {
            return;
        }

        // 4. Blast kills
        systems::collision::resolve_blasts(
            &mut self.world,
            &mut self.state,
            &self.rules,
            &mut self.despawn_buffer,
            &mut self.events,
        );

        // 5. Round completion
        systems::collision::check_round_complete(
            &self.world,
            &mut self.state,
            &self.rules,
            &mut self.events,
        );
    }
}
