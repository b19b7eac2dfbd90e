//! Lorenz attractor integration
//!
//! Explicit (forward) Euler integration of
//!
//! ```text
//! dx/dt = σ(y − x)
//! dy/dt = x(ρ − z) − y
//! dz/dt = xy − βz
//! ```
//!
//! Each step evaluates the derivative at the previous position and moves all
//! three coordinates at once. There is no step-size control; long runs with a
//! large `dt` drift, and that drift is part of the expected output.

use serde::{Deserialize, Serialize};

use cgx_math::{Bounds3, Vec3};

/// One of the three Lorenz parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Param {
    Sigma,
    Beta,
    Rho,
}

/// Lorenz system parameters (σ, β, ρ)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LorenzParams {
    pub sigma: f64,
    pub beta: f64,
    pub rho: f64,
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl LorenzParams {
    /// σ = 10, β = 8/3, ρ = 28
    pub const CLASSIC: Self = Self {
        sigma: 10.0,
        beta: 8.0 / 3.0,
        rho: 28.0,
    };

    pub const fn new(sigma: f64, beta: f64, rho: f64) -> Self {
        Self { sigma, beta, rho }
    }

    /// Time derivative at `p`
    #[inline]
    pub fn derivative(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.sigma * (p.y - p.x),
            p.x * (self.rho - p.z) - p.y,
            p.x * p.y - self.beta * p.z,
        )
    }

    /// One explicit Euler step of size `dt` from `p`
    #[inline]
    pub fn step(&self, p: Vec3, dt: f64) -> Vec3 {
        p + self.derivative(p) * dt
    }

    pub fn get(&self, param: Param) -> f64 {
        match param {
            Param::Sigma => self.sigma,
            Param::Beta => self.beta,
            Param::Rho => self.rho,
        }
    }

    /// Add `delta` to one parameter
    pub fn adjust(&mut self, param: Param, delta: f64) {
        match param {
            Param::Sigma => self.sigma += delta,
            Param::Beta => self.beta += delta,
            Param::Rho => self.rho += delta,
        }
    }

    /// Restore σ, β and ρ to [`LorenzParams::CLASSIC`]
    pub fn reset(&mut self) {
        *self = Self::CLASSIC;
    }
}

/// Invalid integrator settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LorenzError {
    /// Step size must be finite and strictly positive
    InvalidStepSize(f64),
    /// Start position has a NaN or infinite component
    InvalidStart(Vec3),
}

impl std::fmt::Display for LorenzError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LorenzError::InvalidStepSize(dt) => {
                write!(f, "step size must be finite and positive, got {}", dt)
            }
            LorenzError::InvalidStart(p) => {
                write!(f, "start position must be finite, got ({}, {}, {})", p.x, p.y, p.z)
            }
        }
    }
}

impl std::error::Error for LorenzError {}

/// Fixed-step Euler integrator for the Lorenz system
///
/// Defaults reproduce the classic run: start at (1, 1, 1), `dt = 0.001`,
/// 50 000 steps (50 time units).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Integrator {
    pub params: LorenzParams,
    pub dt: f64,
    pub steps: usize,
    pub start: Vec3,
}

impl Default for Integrator {
    fn default() -> Self {
        Self {
            params: LorenzParams::CLASSIC,
            dt: Self::DEFAULT_DT,
            steps: Self::DEFAULT_STEPS,
            start: Vec3::ONE,
        }
    }
}

impl Integrator {
    pub const DEFAULT_DT: f64 = 0.001;
    pub const DEFAULT_STEPS: usize = 50_000;

    /// Integrator with the default schedule and the given parameters
    pub fn new(params: LorenzParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_start(mut self, start: Vec3) -> Self {
        self.start = start;
        self
    }

    /// Check that the schedule can be integrated
    pub fn validate(&self) -> Result<(), LorenzError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(LorenzError::InvalidStepSize(self.dt));
        }
        if !self.start.is_finite() {
            return Err(LorenzError::InvalidStart(self.start));
        }
        Ok(())
    }

    /// Lazily yield the positions after each step
    ///
    /// The start position is not yielded; the iterator produces exactly
    /// `steps` items.
    pub fn iter(&self) -> Result<Steps, LorenzError> {
        self.validate()?;
        Ok(Steps {
            params: self.params,
            dt: self.dt,
            position: self.start,
            remaining: self.steps,
        })
    }

    /// The full ordered sequence of `steps` positions
    pub fn trajectory(&self) -> Result<Vec<Vec3>, LorenzError> {
        Ok(self.iter()?.collect())
    }

    /// Position after the last step, without storing the path
    pub fn final_position(&self) -> Result<Vec3, LorenzError> {
        Ok(self.iter()?.last().unwrap_or(self.start))
    }
}

/// Iterator over Euler steps, see [`Integrator::iter`]
#[derive(Clone, Debug)]
pub struct Steps {
    params: LorenzParams,
    dt: f64,
    position: Vec3,
    remaining: usize,
}

impl Iterator for Steps {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.position = self.params.step(self.position, self.dt);
        Some(self.position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Steps {}

/// Summary of a computed trajectory
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryStats {
    pub len: usize,
    pub last: Vec3,
    /// Bounds of the finite positions; `None` if there are none
    pub bounds: Option<Bounds3>,
    /// Index of the first non-finite position, if the run diverged
    pub diverged_at: Option<usize>,
}

impl TrajectoryStats {
    /// Summarize `points`; `None` when empty
    pub fn of(points: &[Vec3]) -> Option<Self> {
        let last = *points.last()?;
        let diverged_at = points.iter().position(|p| !p.is_finite());
        let finite = points.iter().copied().filter(|p| p.is_finite());
        let bounds = Bounds3::from_points(finite);
        Some(Self {
            len: points.len(),
            last,
            bounds,
            diverged_at,
        })
    }
}
