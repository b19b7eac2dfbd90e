//! GPS trace system

use std::sync::Arc;

use cgx_core::{AssetCache, Trace, Vec3};

use super::RunError;
use crate::config::TraceConfig;

/// Summary of a loaded trace
#[derive(Debug, Clone)]
pub struct TraceReport {
    pub trace: Arc<Trace>,
    /// Marker index at the configured playback time
    pub marker_index: usize,
    /// Points translated so the trace is centered on the origin, as drawn
    pub centered: Vec<Vec3>,
    /// Edge lengths of the bounding box
    pub extent: Vec3,
    /// Marker position relative to the trace center
    pub marker_offset: Vec3,
}

pub struct TraceSystem;

impl TraceSystem {
    /// Load the configured trace, if any
    ///
    /// A configured path that cannot be read is an error; no path means the
    /// exercise is skipped.
    pub fn run(config: &TraceConfig, cache: &mut AssetCache) -> Result<Option<TraceReport>, RunError> {
        let Some(path) = &config.path else {
            log::debug!("No trace configured");
            return Ok(None);
        };

        let handle = cache.load::<Trace>(path)?;
        let Some(trace) = cache.get::<Trace>(&handle) else {
            log::warn!("{} is already cached as a different asset type, skipping trace", path);
            return Ok(None);
        };

        let center = trace.center();
        let centered: Vec<Vec3> = trace.centered_points().collect();
        let extent = trace.bounds().size();
        let marker_index = trace.playback_index(config.sample_ms);
        let marker_offset = trace.position_at(config.sample_ms) - center;
        log::info!(
            "Trace {}: {} points centered at ({:.3}, {:.3}, {:.3}), marker at {} after {} ms",
            path,
            trace.len(),
            center.x,
            center.y,
            center.z,
            marker_index,
            config.sample_ms
        );
        log::debug!("Trace extent {:.3} x {:.3} x {:.3}", extent.x, extent.y, extent.z);

        Ok(Some(TraceReport {
            trace,
            centered,
            extent,
            marker_index,
            marker_offset,
        }))
    }
}
