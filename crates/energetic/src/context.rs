//! Simulation state shared with collision reactions
//!
//! Reactions run while the body slice is mutably borrowed by the collision
//! pass, so anything that would grow the object list is queued here and
//! appended by the level once the pass returns.

use energetic_engine::foundation::math::Vec2;

use crate::entities::GameObject;

/// Seconds an explosion effect stays visible
pub const EXPLOSION_DURATION: f32 = 1.0;

/// Circular playable area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    /// Center of the world circle
    pub center: Vec2,
    /// Radius of the world circle
    pub radius: f32,
}

impl WorldBounds {
    /// World circle of `radius` around the origin
    pub fn centered(radius: f32) -> Self {
        Self {
            center: Vec2::zeros(),
            radius,
        }
    }

    /// Whether `point` lies inside or on the world circle
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.center).magnitude() <= self.radius
    }
}

/// Sound effects requested by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Player fired a projectile
    Gunshot,
    /// Projectile hit an asteroid
    Impact,
}

/// Explosion effect requested at a world position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplosionRequest {
    /// Where the explosion happens
    pub position: Vec2,
    /// How long it lasts in seconds
    pub duration: f32,
}

/// Per-level state reachable from every reaction
#[derive(Debug)]
pub struct SimulationContext {
    world: WorldBounds,
    score: f32,
    sound_cues: Vec<SoundCue>,
    explosions: Vec<ExplosionRequest>,
    spawns: Vec<GameObject>,
}

impl SimulationContext {
    /// Create a context for the given world
    pub const fn new(world: WorldBounds) -> Self {
        Self {
            world,
            score: 0.0,
            sound_cues: Vec::new(),
            explosions: Vec::new(),
            spawns: Vec::new(),
        }
    }

    /// Playable area
    pub const fn world(&self) -> &WorldBounds {
        &self.world
    }

    /// Current score
    pub const fn score(&self) -> f32 {
        self.score
    }

    /// Add `amount` to the score
    pub fn add_score(&mut self, amount: f32) {
        self.score += amount;
    }

    /// Record a sound effect
    pub fn play_sound(&mut self, cue: SoundCue) {
        log::trace!("Sound cue {cue:?}");
        self.sound_cues.push(cue);
    }

    /// Request an explosion effect at `position`
    pub fn add_explosion(&mut self, position: Vec2) {
        self.explosions.push(ExplosionRequest {
            position,
            duration: EXPLOSION_DURATION,
        });
    }

    /// Queue an object to join the level after the current collision pass
    pub fn queue_spawn(&mut self, object: GameObject) {
        self.spawns.push(object);
    }

    /// Take all queued spawns in queue order
    pub fn drain_spawns(&mut self) -> Vec<GameObject> {
        std::mem::take(&mut self.spawns)
    }

    /// Take all sound cues recorded since the last call
    pub fn take_sound_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sound_cues)
    }

    /// Take all explosion requests recorded since the last call
    pub fn take_explosions(&mut self) -> Vec<ExplosionRequest> {
        std::mem::take(&mut self.explosions)
    }
}
