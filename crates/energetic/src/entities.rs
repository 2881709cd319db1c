//! Simulated objects of the energetic level
//!
//! Every object is a [`GameObject`] carrying shared kinematic state and a
//! circle mask, plus an [`EntityKind`] holding per-kind state. Objects move
//! themselves in [`GameObject::step`] and recenter their mask afterwards so
//! the collision pass always sees current positions.

use energetic_engine::foundation::math::{angle_degrees, normalize_or_zero, rotate, Vec2};
use energetic_engine::physics::{Body, CollisionShape};
use slotmap::new_key_type;

use crate::context::{SimulationContext, WorldBounds};
use crate::controls::{PlayerControls, Strafe, Thrust};
use crate::reactions;

new_key_type! {
    /// Stable handle of an object across compaction
    pub struct ObjectKey;
}

/// Asteroid mask radius
pub const ASTEROID_RADIUS: i32 = 50;
/// Asteroid mass
pub const ASTEROID_MASS: i32 = 75;
/// Pull toward the world center applied to asteroids outside the world circle
pub const ASTEROID_RETURN_ACCELERATION: f32 = 100.0;

/// Planet mask radius
pub const PLANET_RADIUS: i32 = 140;
/// Planet mass
pub const PLANET_MASS: i32 = 100_000;
/// Planet starting energy
pub const PLANET_ENERGY: f32 = 1020.0;
/// Planet energy drained per second
pub const PLANET_DRAIN: f32 = 5.0;

/// Player mask radius
pub const PLAYER_RADIUS: i32 = 30;
/// Player mass
pub const PLAYER_MASS: i32 = 5;
/// Player starting and refill energy
pub const PLAYER_MAX_ENERGY: f32 = 255.0;
/// Pickups the player can carry
pub const PLAYER_MAX_PICKUPS: u32 = 6;
/// Forward thrust acceleration
pub const FORWARD_ACCELERATION: f32 = 1000.0;
/// Backward thrust acceleration
pub const BACKWARD_ACCELERATION: f32 = -700.0;
/// Sideways thrust acceleration
pub const STRAFE_ACCELERATION: f32 = 700.0;
/// Player speed limit
pub const PLAYER_MAX_SPEED: f32 = 700.0;
/// Local speed below which damping snaps a velocity component to zero
pub const DAMPING_DEAD_BAND: f32 = 5.0;
/// Energy per second per unit of acceleration
pub const THRUST_POWER_FACTOR: f32 = 0.002;
/// Energy per second drained regardless of thrust
pub const IDLE_POWER: f32 = 0.3;

/// Projectile mask radius
pub const PROJECTILE_RADIUS: i32 = 10;
/// Projectile mass
pub const PROJECTILE_MASS: i32 = 5;
/// Projectile speed
pub const PROJECTILE_SPEED: f32 = 1000.0;
/// Seconds a projectile lives
pub const PROJECTILE_LIFETIME: f32 = 2.0;
/// Energy the player pays per shot
pub const SHOT_COST: f32 = 10.0;

/// Pickup mask radius
pub const PICKUP_RADIUS: i32 = 20;
/// Pickup mass
pub const PICKUP_MASS: i32 = 10;

/// Planet state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetState {
    /// Remaining energy
    pub energy: f32,
}

/// Player ship state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// Remaining energy
    pub energy: f32,
    /// Carried energy pickups
    pub pickups: u32,
    /// Inertial damping enabled
    pub damping: bool,
    /// Acceleration applied in the last step, in the aim frame
    pub acceleration: Vec2,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            energy: PLAYER_MAX_ENERGY,
            pickups: 0,
            damping: true,
            acceleration: Vec2::zeros(),
        }
    }
}

/// Projectile state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileState {
    /// Unit flight direction
    pub direction: Vec2,
    /// Flight speed
    pub speed: f32,
    /// Seconds left before the projectile expires
    pub lifetime: f32,
}

/// Per-kind state of a game object
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    /// Drifting rock
    Asteroid,
    /// Rock that leaves an energy pickup when shot
    GreenAsteroid,
    /// Static planet the player defends
    Planet(PlanetState),
    /// Player ship
    Player(PlayerState),
    /// Shot fired by the player
    Projectile(ProjectileState),
    /// Energy crystal left by a green asteroid
    Pickup,
}

/// Kind discriminant without state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityTag {
    /// [`EntityKind::Asteroid`]
    Asteroid,
    /// [`EntityKind::GreenAsteroid`]
    GreenAsteroid,
    /// [`EntityKind::Planet`]
    Planet,
    /// [`EntityKind::Player`]
    Player,
    /// [`EntityKind::Projectile`]
    Projectile,
    /// [`EntityKind::Pickup`]
    Pickup,
}

impl EntityKind {
    /// Stateless discriminant
    pub const fn tag(&self) -> EntityTag {
        match self {
            Self::Asteroid => EntityTag::Asteroid,
            Self::GreenAsteroid => EntityTag::GreenAsteroid,
            Self::Planet(_) => EntityTag::Planet,
            Self::Player(_) => EntityTag::Player,
            Self::Projectile(_) => EntityTag::Projectile,
            Self::Pickup => EntityTag::Pickup,
        }
    }

    /// Plain or green asteroid
    pub const fn is_asteroid(&self) -> bool {
        matches!(self, Self::Asteroid | Self::GreenAsteroid)
    }

    /// Mass used by the collision resolver
    pub const fn mass(&self) -> i32 {
        match self {
            Self::Asteroid | Self::GreenAsteroid => ASTEROID_MASS,
            Self::Planet(_) => PLANET_MASS,
            Self::Player(_) => PLAYER_MASS,
            Self::Projectile(_) => PROJECTILE_MASS,
            Self::Pickup => PICKUP_MASS,
        }
    }

    /// Restitution used by the collision resolver
    pub const fn restitution(&self) -> f32 {
        match self {
            Self::Asteroid | Self::GreenAsteroid | Self::Player(_) | Self::Projectile(_) => 0.8,
            Self::Planet(_) | Self::Pickup => 1.0,
        }
    }

    /// Mask radius
    pub const fn radius(&self) -> i32 {
        match self {
            Self::Asteroid | Self::GreenAsteroid => ASTEROID_RADIUS,
            Self::Planet(_) => PLANET_RADIUS,
            Self::Player(_) => PLAYER_RADIUS,
            Self::Projectile(_) => PROJECTILE_RADIUS,
            Self::Pickup => PICKUP_RADIUS,
        }
    }
}

/// Object taking part in the level simulation
#[derive(Debug, Clone)]
pub struct GameObject {
    pub(crate) key: ObjectKey,
    /// Per-kind state
    pub kind: EntityKind,
    /// World position
    pub position: Vec2,
    /// World velocity
    pub velocity: Vec2,
    /// Cleared when the object dies; dead objects are removed next tick
    pub alive: bool,
    shape: CollisionShape,
}

impl GameObject {
    /// Create an object of `kind` at `position`
    pub fn new(kind: EntityKind, position: Vec2, velocity: Vec2) -> Self {
        Self {
            key: ObjectKey::default(),
            kind,
            position,
            velocity,
            alive: true,
            shape: CollisionShape::circle(position, kind.radius()),
        }
    }

    /// Plain asteroid
    pub fn asteroid(position: Vec2, velocity: Vec2) -> Self {
        Self::new(EntityKind::Asteroid, position, velocity)
    }

    /// Green asteroid
    pub fn green_asteroid(position: Vec2, velocity: Vec2) -> Self {
        Self::new(EntityKind::GreenAsteroid, position, velocity)
    }

    /// Planet at `position` with full energy
    pub fn planet(position: Vec2) -> Self {
        Self::new(
            EntityKind::Planet(PlanetState { energy: PLANET_ENERGY }),
            position,
            Vec2::zeros(),
        )
    }

    /// Player ship at `position` with full energy
    pub fn player(position: Vec2) -> Self {
        Self::new(EntityKind::Player(PlayerState::default()), position, Vec2::zeros())
    }

    /// Projectile flying along `direction`
    pub fn projectile(position: Vec2, direction: Vec2) -> Self {
        let direction = normalize_or_zero(direction);
        Self::new(
            EntityKind::Projectile(ProjectileState {
                direction,
                speed: PROJECTILE_SPEED,
                lifetime: PROJECTILE_LIFETIME,
            }),
            position,
            direction * PROJECTILE_SPEED,
        )
    }

    /// Energy pickup
    pub fn pickup(position: Vec2) -> Self {
        Self::new(EntityKind::Pickup, position, Vec2::zeros())
    }

    /// Stable handle, null until the object joins a level
    pub const fn key(&self) -> ObjectKey {
        self.key
    }

    /// Stateless kind discriminant
    pub const fn tag(&self) -> EntityTag {
        self.kind.tag()
    }

    /// Energy of a planet or player
    pub const fn energy(&self) -> Option<f32> {
        match &self.kind {
            EntityKind::Planet(planet) => Some(planet.energy),
            EntityKind::Player(player) => Some(player.energy),
            _ => None,
        }
    }

    /// Advance the object by `dt` seconds and recenter its mask
    pub fn step(&mut self, dt: f32, world: &WorldBounds, controls: &PlayerControls) {
        match &mut self.kind {
            EntityKind::Asteroid | EntityKind::GreenAsteroid => {
                let to_center = world.center - self.position;
                let acceleration = if to_center.magnitude() > world.radius {
                    normalize_or_zero(to_center) * ASTEROID_RETURN_ACCELERATION
                } else {
                    Vec2::zeros()
                };
                self.velocity += acceleration * dt;
                self.position += self.velocity * dt;
            }
            EntityKind::Planet(planet) => {
                if planet.energy > 0.0 {
                    planet.energy -= PLANET_DRAIN * dt;
                } else {
                    self.alive = false;
                }
            }
            EntityKind::Player(player) => {
                let (velocity, alive) = step_player(player, self.position, self.velocity, dt, controls);
                self.velocity = velocity;
                self.alive &= alive;
                self.position += self.velocity * dt;
            }
            EntityKind::Projectile(projectile) => {
                self.velocity = projectile.direction * projectile.speed;
                self.position += self.velocity * dt;
                projectile.lifetime -= dt;
                if projectile.lifetime < 0.0 {
                    self.alive = false;
                }
            }
            EntityKind::Pickup => {}
        }

        self.shape.update_position(self.position);
    }
}

/// Integrate the ship's velocity in its aim frame and drain energy
///
/// Returns the new world velocity and whether the ship still has energy.
fn step_player(
    player: &mut PlayerState,
    position: Vec2,
    velocity: Vec2,
    dt: f32,
    controls: &PlayerControls,
) -> (Vec2, bool) {
    let facing = normalize_or_zero(controls.aim - position);
    let angle = angle_degrees(facing);
    let mut local = rotate(velocity, -angle);

    let forward = match controls.thrust {
        Thrust::Forward => FORWARD_ACCELERATION,
        Thrust::Backward => BACKWARD_ACCELERATION,
        Thrust::None if player.damping => damp(&mut local.x, FORWARD_ACCELERATION, BACKWARD_ACCELERATION),
        Thrust::None => 0.0,
    };
    let sideways = match controls.strafe {
        Strafe::Right => STRAFE_ACCELERATION,
        Strafe::Left => -STRAFE_ACCELERATION,
        Strafe::None if player.damping => damp(&mut local.y, STRAFE_ACCELERATION, -STRAFE_ACCELERATION),
        Strafe::None => 0.0,
    };

    player.acceleration = Vec2::new(forward, sideways);
    local += player.acceleration * dt;

    if local.magnitude() > PLAYER_MAX_SPEED {
        local = normalize_or_zero(local) * PLAYER_MAX_SPEED;
    }

    let alive = if player.energy > 0.0 {
        let power = player.acceleration.magnitude() * THRUST_POWER_FACTOR + IDLE_POWER;
        player.energy -= power * dt;
        true
    } else {
        false
    };

    (rotate(local, angle), alive)
}

/// Braking acceleration for one local velocity component
///
/// Components inside the dead band are snapped to zero.
fn damp(component: &mut f32, positive: f32, negative: f32) -> f32 {
    if *component > DAMPING_DEAD_BAND {
        negative
    } else if *component < -DAMPING_DEAD_BAND {
        positive
    } else {
        *component = 0.0;
        0.0
    }
}

impl Body for GameObject {
    type Context = SimulationContext;

    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn mass(&self) -> i32 {
        self.kind.mass()
    }

    fn restitution(&self) -> f32 {
        self.kind.restitution()
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn shape(&self) -> &CollisionShape {
        &self.shape
    }

    fn react_on_collision(&mut self, new_velocity: Vec2, other: &mut Self, ctx: &mut SimulationContext) {
        reactions::react(self, new_velocity, other, ctx);
    }
}
