#![cfg_attr(not(feature = "std"), no_std)]

/// A 2D vector used for position and velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn magnitude(&self) -> f32 {
        #[cfg(feature = "std")]
        {
            (self.x * self.x + self.y * self.y).sqrt()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrtf(self.x * self.x + self.y * self.y)
        }
    }

    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
            }
        } else {
            Self::zero()
        }
    }

    pub fn distance(&self, other: &Vector2D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        #[cfg(feature = "std")]
        {
            (dx * dx + dy * dy).sqrt()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrtf(dx * dx + dy * dy)
        }
    }

    /// Angle of this vector in radians, measured from the positive x axis
    pub fn heading(&self) -> f32 {
        #[cfg(feature = "std")]
        {
            self.y.atan2(self.x)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::atan2f(self.y, self.x)
        }
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl core::ops::Div<f32> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl core::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

/// Recoverable targeting/steering failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PursuitError {
    /// No candidate positions were supplied to a strategy that needs them
    EmptyCandidateSet,
    /// A zero-length direction vector was encountered outside the
    /// tolerance-guarded path
    DegenerateDirection,
}

impl core::fmt::Display for PursuitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PursuitError::EmptyCandidateSet => write!(f, "no candidate agents available to target"),
            PursuitError::DegenerateDirection => write!(f, "direction vector has zero length"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PursuitError {}

/// Targeting strategy for the pursuing agent, re-evaluated every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Aim at the pointer/input-device position
    SeekPointer,
    /// Aim at the center of mass of the candidate set
    SeekCentroid,
    /// Aim at the nearest candidate
    SeekNearest,
}

/// Resolve a single target point for this tick.
///
/// `candidates` is a snapshot of the OTHER agents' positions: the caller
/// must exclude the pursuer's own position. With that contract, centroid
/// and nearest targeting fail with [`PursuitError::EmptyCandidateSet`]
/// when no other agent is visible. `SeekPointer` ignores the candidate
/// set entirely and always succeeds.
pub fn select_target(
    strategy: Strategy,
    self_position: Vector2D,
    candidates: &[Vector2D],
    pointer_position: Vector2D,
) -> Result<Vector2D, PursuitError> {
    match strategy {
        Strategy::SeekPointer => Ok(pointer_position),
        Strategy::SeekCentroid => flock_center(candidates),
        Strategy::SeekNearest => nearest_candidate(self_position, candidates),
    }
}

fn flock_center(candidates: &[Vector2D]) -> Result<Vector2D, PursuitError> {
    if candidates.is_empty() {
        return Err(PursuitError::EmptyCandidateSet);
    }

    let mut sum = Vector2D::zero();
    for position in candidates {
        sum += *position;
    }

    Ok(sum / candidates.len() as f32)
}

fn nearest_candidate(
    self_position: Vector2D,
    candidates: &[Vector2D],
) -> Result<Vector2D, PursuitError> {
    // Initialize the running minimum from the first candidate; strict `<`
    // keeps the first of equally-near candidates.
    let (first, rest) = candidates
        .split_first()
        .ok_or(PursuitError::EmptyCandidateSet)?;

    let mut nearest = *first;
    let mut nearest_distance = self_position.distance(first);

    for position in rest {
        let distance = self_position.distance(position);
        if distance < nearest_distance {
            nearest = *position;
            nearest_distance = distance;
        }
    }

    Ok(nearest)
}

/// Advance one step toward the target.
///
/// Returns `(None, zero)` when `current_position` is already within
/// `arrival_tolerance` of the target; the caller keeps the prior position
/// and treats the agent as stationary. Otherwise returns the new position
/// and the velocity that produced it, with `|velocity| == desired_speed`.
pub fn steer(
    current_position: Vector2D,
    target_position: Vector2D,
    desired_speed: f32,
    arrival_tolerance: f32,
) -> Result<(Option<Vector2D>, Vector2D), PursuitError> {
    let distance = current_position.distance(&target_position);

    if distance <= arrival_tolerance {
        return Ok((None, Vector2D::zero()));
    }

    let offset = target_position - current_position;
    if offset.magnitude() <= 0.0 {
        // Only reachable with a negative tolerance; refuse to normalize
        // a zero-length vector.
        return Err(PursuitError::DegenerateDirection);
    }

    let velocity = offset.normalize() * desired_speed;
    let new_position = current_position + velocity;

    Ok((Some(new_position), velocity))
}

/// Configuration for the pursuit kinematics
#[derive(Debug, Clone, Copy)]
pub struct PursuitConfig {
    pub desired_speed: f32,
    pub arrival_tolerance: f32,
}

impl Default for PursuitConfig {
    fn default() -> Self {
        Self {
            desired_speed: 5.0,
            arrival_tolerance: 10.0,
        }
    }
}

/// The pursuing entity
#[derive(Debug, Clone)]
pub struct Predator {
    pub position: Vector2D,
    pub velocity: Vector2D,
    /// Heading in radians, updated only on ticks where the predator moved
    pub heading: f32,
    pub prev_position: Vector2D,
}

impl Predator {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        Self {
            position,
            velocity,
            heading: 0.0,
            prev_position: position,
        }
    }

    /// Advance one tick toward `target`. Returns whether the predator
    /// moved. On arrival the position and heading are held so a renderer
    /// does not snap the sprite back to angle 0.
    pub fn update(
        &mut self,
        target: Vector2D,
        config: &PursuitConfig,
    ) -> Result<bool, PursuitError> {
        self.prev_position = self.position;

        let (new_position, velocity) = steer(
            self.position,
            target,
            config.desired_speed,
            config.arrival_tolerance,
        )?;
        self.velocity = velocity;

        match new_position {
            Some(position) => {
                self.position = position;
                self.heading = self.velocity.heading();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Stop in place for this tick, keeping position and heading. Used by
    /// callers as the fallback when no target could be resolved.
    pub fn hold(&mut self) {
        self.prev_position = self.position;
        self.velocity = Vector2D::zero();
    }
}

/// A fixed-capacity candidate snapshot for no_std environments.
///
/// Refill it each tick before any agent's position is mutated so the
/// targeting pass never observes a half-advanced world.
pub struct Snapshot<const N: usize> {
    positions: heapless::Vec<Vector2D, N>,
}

impl<const N: usize> Snapshot<N> {
    pub fn new() -> Self {
        Self {
            positions: heapless::Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn push(&mut self, position: Vector2D) -> Result<(), Vector2D> {
        self.positions.push(position)
    }

    pub fn positions(&self) -> &[Vector2D] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl<const N: usize> Default for Snapshot<N> {
    fn default() -> Self {
        Self::new()
    }
}
