//! Lorenz attractor system
//!
//! Integrates the configured schedule and optionally writes the path out in
//! the trace file format so it can be replayed like a GPS recording.

use cgx_core::{Trace, TrajectoryStats, Vec3};

use super::RunError;
use crate::config::LorenzConfig;

/// Outcome of a Lorenz run
#[derive(Debug, Clone)]
pub struct LorenzReport {
    pub stats: Option<TrajectoryStats>,
    /// Where the trajectory was written, if anywhere
    pub written_to: Option<String>,
}

/// Runs the Lorenz integrator from configuration
pub struct LorenzSystem;

impl LorenzSystem {
    /// Integrate and summarize
    pub fn run(config: &LorenzConfig) -> Result<(Vec<Vec3>, LorenzReport), RunError> {
        let integrator = config.integrator();
        log::info!(
            "Integrating Lorenz system: sigma={} beta={} rho={} dt={} steps={}",
            config.sigma, config.beta, config.rho, config.dt, config.steps
        );

        let points = integrator.trajectory()?;
        let stats = TrajectoryStats::of(&points);

        if let Some(stats) = &stats {
            log::info!(
                "Final position ({:.3}, {:.3}, {:.3})",
                stats.last.x, stats.last.y, stats.last.z
            );
            match &stats.bounds {
                Some(bounds) => log::debug!("Trajectory bounds {:?} .. {:?}", bounds.min, bounds.max),
                None => log::warn!("Trajectory has no finite positions"),
            }
            if let Some(i) = stats.diverged_at {
                log::warn!("Trajectory diverged at step {} of {}", i + 1, stats.len);
            }
        }

        let written_to = match &config.output {
            Some(path) if !points.is_empty() => {
                Trace::from_points(points.clone())?.save(path)?;
                Some(path.clone())
            }
            Some(path) => {
                log::warn!("No steps integrated, not writing {}", path);
                None
            }
            None => None,
        };

        Ok((points, LorenzReport { stats, written_to }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_default_schedule() {
        let (points, report) = LorenzSystem::run(&LorenzConfig::default()).unwrap();
        assert_eq!(points.len(), 50_000);
        let stats = report.stats.unwrap();
        assert_eq!(stats.last, *points.last().unwrap());
        assert!(report.written_to.is_none());
    }

    #[test]
    fn test_run_rejects_bad_dt() {
        let config = LorenzConfig {
            dt: 0.0,
            ..LorenzConfig::default()
        };
        assert!(matches!(LorenzSystem::run(&config), Err(RunError::Lorenz(_))));
    }

    #[test]
    fn test_run_zero_steps_skips_output() {
        let path = std::env::temp_dir().join("cgx_lorenz_zero_steps.dat");
        let _ = std::fs::remove_file(&path);
        let config = LorenzConfig {
            steps: 0,
            output: Some(path.to_string_lossy().into_owned()),
            ..LorenzConfig::default()
        };
        let (points, report) = LorenzSystem::run(&config).unwrap();
        assert!(points.is_empty());
        assert!(report.stats.is_none());
        assert!(report.written_to.is_none());
        assert!(!path.exists());
    }
}
