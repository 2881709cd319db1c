//! Level state and the fixed-timestep tick
//!
//! One tick runs in this order:
//! 1. Score and game time advance by `dt`; the spawn timer may add an asteroid.
//! 2. Player actions are applied (firing, damping toggle).
//! 3. A dead player or planet ends the game.
//! 4. Dead objects are removed and every live object steps.
//! 5. The collision pass runs over the stepped objects.
//! 6. Objects queued by reactions join the level.

use energetic_engine::foundation::math::{normalize_or_zero, truncate_to_int, IntRect, Vec2};
use energetic_engine::physics::{CollisionDetector, CollisionStats};
use rand::rngs::StdRng;
use rand::Rng;
use slotmap::SlotMap;

use crate::config::GameConfig;
use crate::context::{ExplosionRequest, SimulationContext, SoundCue, WorldBounds};
use crate::controls::PlayerControls;
use crate::entities::{EntityKind, EntityTag, GameObject, ObjectKey, SHOT_COST};
use crate::error::GameError;
use crate::random::{random_point_on_donut, random_velocity};

/// Inner edge of the spawn ring as a share of the world radius
pub const SPAWN_INNER_RATIO: f32 = 0.25;

/// Why the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The player ran out of energy
    PlayerDepleted,
    /// The planet ran out of energy
    PlanetDepleted,
}

/// Summary of a level run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelOutcome {
    /// Final score
    pub score: f32,
    /// Simulated seconds
    pub game_time: f32,
    /// Ticks run
    pub ticks: u64,
    /// Set once the game is over
    pub end: Option<EndReason>,
}

/// Effects produced by one tick
#[derive(Debug, Clone, Default)]
pub struct TickEvents {
    /// Sound effects in the order they happened
    pub sounds: Vec<SoundCue>,
    /// Explosion effects in the order they happened
    pub explosions: Vec<ExplosionRequest>,
    /// Collision pass counters
    pub collisions: CollisionStats,
}

/// One running level
#[derive(Debug)]
pub struct Level {
    config: GameConfig,
    rng: StdRng,
    objects: Vec<GameObject>,
    handles: SlotMap<ObjectKey, EntityTag>,
    detector: CollisionDetector,
    ctx: SimulationContext,
    player: ObjectKey,
    planet: ObjectKey,
    game_time: f32,
    spawn_timer: f32,
    ticks: u64,
    end: Option<EndReason>,
}

impl Level {
    /// Create a level with the initial asteroid field, the planet and the player
    pub fn new(config: &GameConfig, rng: StdRng) -> Result<Self, GameError> {
        config.validate()?;

        let world = WorldBounds::centered(config.world.radius);
        let radius = config.world.radius as i32;
        let detector = CollisionDetector::new(IntRect::around(0, 0, radius), config.quadtree);

        let mut level = Self {
            config: config.clone(),
            rng,
            objects: Vec::new(),
            handles: SlotMap::with_key(),
            detector,
            ctx: SimulationContext::new(world),
            player: ObjectKey::default(),
            planet: ObjectKey::default(),
            game_time: 0.0,
            spawn_timer: 0.0,
            ticks: 0,
            end: None,
        };

        let speed = config.spawning.initial_speed;
        for _ in 0..config.spawning.initial_asteroids {
            let position = level.random_field_point();
            let velocity = random_velocity(&mut level.rng, speed);
            level.add_object(GameObject::asteroid(position, velocity));
        }
        for _ in 0..config.spawning.initial_green_asteroids {
            let position = level.random_field_point();
            let velocity = random_velocity(&mut level.rng, speed);
            level.add_object(GameObject::green_asteroid(position, velocity));
        }

        level.planet = level.add_object(GameObject::planet(world.center));
        level.player = level.add_object(GameObject::player(world.center));

        log::info!(
            "Level started: {} asteroids, {} green, world radius {}",
            config.spawning.initial_asteroids,
            config.spawning.initial_green_asteroids,
            config.world.radius
        );

        Ok(level)
    }

    /// Add an object, returning its stable key
    pub fn add_object(&mut self, mut object: GameObject) -> ObjectKey {
        let key = self.handles.insert(object.tag());
        object.key = key;
        self.objects.push(object);
        key
    }

    /// Advance the level by `dt` seconds
    ///
    /// Does nothing once the game is over.
    pub fn step(&mut self, dt: f32, controls: &PlayerControls) -> TickEvents {
        if self.end.is_some() {
            return TickEvents::default();
        }

        self.ticks += 1;
        self.ctx.add_score(dt);
        self.game_time += dt;

        self.spawn_timer += dt;
        if self.spawn_timer > self.config.spawning.interval {
            self.spawn_timer = 0.0;
            self.spawn_asteroid();
        }

        self.apply_actions(controls);

        if !self.is_alive(self.player) {
            self.finish(EndReason::PlayerDepleted);
        } else if !self.is_alive(self.planet) {
            self.finish(EndReason::PlanetDepleted);
        }

        self.compact();
        let world = *self.ctx.world();
        for object in &mut self.objects {
            object.step(dt, &world, controls);
        }

        self.detector.detect_collisions(&mut self.objects, &mut self.ctx);

        for object in self.ctx.drain_spawns() {
            self.add_object(object);
        }

        let collisions = self.detector.last_stats();
        log::debug!(
            "Tick {}: {} objects, {} pairs, {} resolved, quadtree depth {}",
            self.ticks,
            self.objects.len(),
            collisions.pairs_found,
            collisions.pairs_resolved,
            self.detector.quadtree().depth()
        );

        TickEvents {
            sounds: self.ctx.take_sound_cues(),
            explosions: self.ctx.take_explosions(),
            collisions,
        }
    }

    /// Score, time and end state so far
    pub const fn outcome(&self) -> LevelOutcome {
        LevelOutcome {
            score: self.ctx.score(),
            game_time: self.game_time,
            ticks: self.ticks,
            end: self.end,
        }
    }

    /// Whether the game has ended
    pub const fn is_over(&self) -> bool {
        self.end.is_some()
    }

    /// All objects currently in the level, including ones that died this tick
    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    /// Look up an object by key
    pub fn object(&self, key: ObjectKey) -> Option<&GameObject> {
        if !self.handles.contains_key(key) {
            return None;
        }
        self.objects.iter().find(|object| object.key == key)
    }

    /// Mutable lookup by key
    pub fn object_mut(&mut self, key: ObjectKey) -> Option<&mut GameObject> {
        if !self.handles.contains_key(key) {
            return None;
        }
        self.objects.iter_mut().find(|object| object.key == key)
    }

    /// The player ship while it is part of the level
    pub fn player(&self) -> Option<&GameObject> {
        self.object(self.player)
    }

    /// The planet while it is part of the level
    pub fn planet(&self) -> Option<&GameObject> {
        self.object(self.planet)
    }

    /// Key of the player ship
    pub const fn player_key(&self) -> ObjectKey {
        self.player
    }

    /// Key of the planet
    pub const fn planet_key(&self) -> ObjectKey {
        self.planet
    }

    /// Number of tracked objects of one kind
    pub fn count(&self, tag: EntityTag) -> usize {
        self.handles.values().filter(|&&t| t == tag).count()
    }

    /// Shared simulation state
    pub const fn context(&self) -> &SimulationContext {
        &self.ctx
    }

    /// Collision detector, including the quadtree built by the last tick
    pub const fn detector(&self) -> &CollisionDetector {
        &self.detector
    }

    /// Seconds simulated so far
    pub const fn game_time(&self) -> f32 {
        self.game_time
    }

    fn is_alive(&self, key: ObjectKey) -> bool {
        self.object(key).is_some_and(|object| object.alive)
    }

    fn finish(&mut self, reason: EndReason) {
        log::info!(
            "Game over after {:.1}s ({:?}), score {:.1}",
            self.game_time,
            reason,
            self.ctx.score()
        );
        self.end = Some(reason);
    }

    /// Fire and damping actions of the player
    fn apply_actions(&mut self, controls: &PlayerControls) {
        let Some(player) = self.object_mut(self.player) else {
            return;
        };
        let position = player.position;

        if controls.toggle_damping {
            if let EntityKind::Player(state) = &mut player.kind {
                state.damping = !state.damping;
                log::debug!("Inertial damping {}", if state.damping { "on" } else { "off" });
            }
        }

        if controls.fire {
            if let EntityKind::Player(state) = &mut player.kind {
                state.energy -= SHOT_COST;
            }
            let direction = normalize_or_zero(controls.aim - position);
            self.add_object(GameObject::projectile(position, direction));
            self.ctx.play_sound(SoundCue::Gunshot);
        }
    }

    /// Spawn one asteroid on the field ring, away from the player's view if possible
    fn spawn_asteroid(&mut self) {
        let view = self.player().map(|player| {
            let (x, y) = truncate_to_int(player.position);
            let (width, height) = (self.config.world.view_width, self.config.world.view_height);
            IntRect::new(x - width / 2, y - height / 2, width, height)
        });

        let mut position = self.random_field_point();
        if let Some(view) = view {
            for _ in 0..self.config.spawning.placement_attempts {
                let (x, y) = truncate_to_int(position);
                if !view.contains(x, y) {
                    break;
                }
                position = self.random_field_point();
            }
        }

        let speed = if self.game_time < self.config.spawning.speedup_after {
            self.config.spawning.initial_speed
        } else {
            self.config.spawning.late_speed
        };
        let velocity = random_velocity(&mut self.rng, speed);

        let green = self.rng.gen::<f64>() >= 1.0 - self.config.spawning.green_share;
        let object = if green {
            GameObject::green_asteroid(position, velocity)
        } else {
            GameObject::asteroid(position, velocity)
        };
        log::trace!("Spawned {:?} at {:?}", object.tag(), position);
        self.add_object(object);
    }

    fn random_field_point(&mut self) -> Vec2 {
        let radius = self.config.world.radius;
        random_point_on_donut(&mut self.rng, radius * SPAWN_INNER_RATIO, radius)
    }

    /// Remove dead objects and release their keys
    fn compact(&mut self) {
        let handles = &mut self.handles;
        self.objects.retain(|object| {
            if !object.alive {
                handles.remove(object.key);
            }
            object.alive
        });
    }
}
