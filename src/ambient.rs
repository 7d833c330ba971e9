//! Decorative background orbs. Randomised, purely cosmetic, and kept out of
//! the visual tree.

use rand::Rng;
use std::time::Duration;

pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 2.0;
pub const MIN_PERIOD_SECS: f32 = 10.0;
pub const MAX_PERIOD_SECS: f32 = 25.0;

/// One orb drifting back and forth between two positions. Positions are
/// fractions of the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct Orb {
    pub from: (f32, f32),
    pub to: (f32, f32),
    pub scale_from: f32,
    pub scale_to: f32,
    pub period: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbSample {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Orb {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut point = || -> (f32, f32) { (rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)) };
        let from = point();
        let to = point();
        Self {
            from,
            to,
            scale_from: rng.random_range(MIN_SCALE..MAX_SCALE),
            scale_to: rng.random_range(MIN_SCALE..MAX_SCALE),
            period: Duration::from_secs_f32(rng.random_range(MIN_PERIOD_SECS..MAX_PERIOD_SECS)),
        }
    }

    /// Position and scale after `elapsed`. The orb travels `from -> to` in one
    /// period, then back again.
    pub fn sample(&self, elapsed: Duration) -> OrbSample {
        let t = ping_pong(elapsed.as_secs_f32() / self.period.as_secs_f32().max(f32::EPSILON));
        let lerp = |a: f32, b: f32| a + (b - a) * t;
        OrbSample {
            x: lerp(self.from.0, self.to.0),
            y: lerp(self.from.1, self.to.1),
            scale: lerp(self.scale_from, self.scale_to),
        }
    }
}

// 0 -> 1 -> 0 over two units of `phase`.
fn ping_pong(phase: f32) -> f32 {
    let cycle = phase.rem_euclid(2.0);
    if cycle <= 1.0 {
        cycle
    } else {
        2.0 - cycle
    }
}

#[derive(Debug, Clone, Default)]
pub struct Ambient {
    pub orbs: Vec<Orb>,
}

impl Ambient {
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        let orbs = (0..count).map(|_| Orb::random(&mut *rng)).collect();
        Self { orbs }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.orbs.is_empty()
    }

    pub fn sample(&self, elapsed: Duration) -> Vec<OrbSample> {
        self.orbs.iter().map(|orb| orb.sample(elapsed)).collect()
    }
}
