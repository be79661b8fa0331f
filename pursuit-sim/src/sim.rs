use pursuit_core::{select_target, Predator, PursuitConfig, Strategy, Vector2D};
use pursuit_shared::{PointerUpdate, PursuitSettings, StrategyKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Map the configuration-side strategy tag to the core strategy
pub fn strategy_from(kind: StrategyKind) -> Strategy {
    match kind {
        StrategyKind::SeekPointer => Strategy::SeekPointer,
        StrategyKind::SeekCentroid => Strategy::SeekCentroid,
        StrategyKind::SeekNearest => Strategy::SeekNearest,
    }
}

/// What happened to the predator on a given tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Advanced one step toward the resolved target
    Moved,
    /// Within arrival tolerance of the target; held position
    Arrived,
    /// No target could be resolved this tick; held position
    NoTarget,
}

/// A headless pursuit world: one predator, a field of drifting prey and an
/// externally supplied pointer position.
pub struct Simulation {
    pub predator: Predator,
    pub prey: Vec<Vector2D>,
    pub pointer: Option<Vector2D>,
    pub strategy: Strategy,
    pub config: PursuitConfig,
    /// Per-tick prey drift amplitude; set to 0.0 for a static field
    pub prey_jitter: f32,
    width: f32,
    height: f32,
    candidates: Vec<Vector2D>,
    rng: StdRng,
    tick: u64,
}

impl Simulation {
    pub fn new(
        settings: &PursuitSettings,
        width: f32,
        height: f32,
        prey_count: usize,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let prey = (0..prey_count)
            .map(|_| Vector2D::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)))
            .collect();

        Self {
            predator: Predator::new(Vector2D::new(width / 2.0, height / 2.0), Vector2D::zero()),
            prey,
            pointer: None,
            strategy: strategy_from(settings.strategy),
            config: PursuitConfig {
                desired_speed: settings.desired_speed,
                arrival_tolerance: settings.arrival_tolerance,
            },
            prey_jitter: 1.5,
            width,
            height,
            candidates: Vec::new(),
            rng,
            tick: 0,
        }
    }

    pub fn apply_pointer_update(&mut self, update: &PointerUpdate) {
        self.pointer = update
            .position
            .map(|position| Vector2D::new(position.x, position.y));
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Advance the world by one tick.
    ///
    /// Prey drift first, then candidate positions are snapshotted before
    /// the predator moves, so targeting never observes a half-advanced
    /// world. Targeting failures are recoverable: the predator holds
    /// position with zero velocity and the run continues.
    pub fn tick(&mut self) -> TickOutcome {
        self.tick += 1;
        self.drift_prey();

        self.candidates.clear();
        self.candidates.extend(self.prey.iter().copied());

        let pointer = match (self.strategy, self.pointer) {
            (Strategy::SeekPointer, None) => {
                log::debug!("tick {}: no pointer position, holding", self.tick);
                self.predator.hold();
                return TickOutcome::NoTarget;
            }
            (_, pointer) => pointer.unwrap_or_else(Vector2D::zero),
        };

        let target = match select_target(
            self.strategy,
            self.predator.position,
            &self.candidates,
            pointer,
        ) {
            Ok(target) => target,
            Err(err) => {
                log::warn!("tick {}: no target ({}), holding position", self.tick, err);
                self.predator.hold();
                return TickOutcome::NoTarget;
            }
        };

        match self.predator.update(target, &self.config) {
            Ok(true) => {
                log::debug!(
                    "tick {}: moved to ({:.1}, {:.1}) toward ({:.1}, {:.1})",
                    self.tick,
                    self.predator.position.x,
                    self.predator.position.y,
                    target.x,
                    target.y
                );
                TickOutcome::Moved
            }
            Ok(false) => {
                log::debug!("tick {}: within tolerance of target", self.tick);
                TickOutcome::Arrived
            }
            Err(err) => {
                log::warn!("tick {}: steering failed ({}), holding position", self.tick, err);
                self.predator.hold();
                TickOutcome::NoTarget
            }
        }
    }

    fn drift_prey(&mut self) {
        if self.prey_jitter <= 0.0 {
            return;
        }

        let jitter = self.prey_jitter;
        for position in self.prey.iter_mut() {
            position.x =
                (position.x + self.rng.gen_range(-jitter..jitter)).clamp(0.0, self.width);
            position.y =
                (position.y + self.rng.gen_range(-jitter..jitter)).clamp(0.0, self.height);
        }
    }
}
