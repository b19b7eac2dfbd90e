//! GPS trace playback data
//!
//! A trace file is plain text holding whitespace-separated `x y z` triples.
//! Reading stops at the first triple that is incomplete or does not parse,
//! so trailing junk after the data is ignored.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use cgx_math::{Bounds3, Vec3};

use crate::asset_cache::Asset;
use crate::asset_error::AssetError;

/// Ordered 3D positions with their bounding box
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    points: Vec<Vec3>,
    bounds: Bounds3,
}

impl Trace {
    /// Build a trace from points; fails with [`AssetError::Empty`] if there are none
    pub fn from_points(points: Vec<Vec3>) -> Result<Self, AssetError> {
        let bounds = Bounds3::from_points(points.iter().copied()).ok_or(AssetError::Empty)?;
        Ok(Self { points, bounds })
    }

    /// Parse whitespace-separated triples from text
    ///
    /// Each number is the longest numeric prefix of its token. Trailing
    /// characters after a number end the data: the triple is kept only if
    /// the junk follows its last coordinate.
    pub fn parse(text: &str) -> Result<Self, AssetError> {
        let mut tokens = text.split_whitespace();
        let mut points = Vec::new();

        'triples: loop {
            let mut xyz = [0.0; 3];
            for i in 0..3 {
                let Some(token) = tokens.next() else {
                    if i > 0 {
                        log::debug!("Ignoring incomplete triple after {} points", points.len());
                    }
                    break 'triples;
                };
                let Some((value, whole)) = leading_number(token) else {
                    log::debug!("Stopped reading trace at '{}' after {} points", token, points.len());
                    break 'triples;
                };
                xyz[i] = value;
                if !whole {
                    // Junk after the last coordinate still completes the triple
                    if i == 2 {
                        points.push(Vec3::from_array(xyz));
                    }
                    log::debug!("Stopped reading trace at '{}' after {} points", token, points.len());
                    break 'triples;
                }
            }
            points.push(Vec3::from_array(xyz));
        }

        Self::from_points(points)
    }

    /// Read and parse a trace file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| AssetError::open(path, e))?;
        let trace = Self::parse(&text)?;
        log::info!("Read {} trace points from {}", trace.len(), path.display());
        Ok(trace)
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; an empty trace cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> Bounds3 {
        self.bounds
    }

    /// Midpoint of the bounding box
    pub fn center(&self) -> Vec3 {
        self.bounds.center()
    }

    /// Points translated so the bounding box is centered on the origin
    pub fn centered_points(&self) -> impl Iterator<Item = Vec3> + '_ {
        let center = self.center();
        self.points.iter().map(move |&p| p - center)
    }

    /// Index of the marker shown `elapsed_ms` after start; one point per millisecond, looping
    pub fn playback_index(&self, elapsed_ms: u64) -> usize {
        (elapsed_ms % self.points.len() as u64) as usize
    }

    /// Position of the playback marker at `elapsed_ms`
    pub fn position_at(&self, elapsed_ms: u64) -> Vec3 {
        self.points[self.playback_index(elapsed_ms)]
    }

    /// Write one `x y z` line per point, readable by [`Trace::parse`]
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), AssetError> {
        let mut writer = BufWriter::new(writer);
        for p in &self.points {
            writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the trace to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AssetError> {
        let path = path.as_ref();
        let file = fs::File::create(path).map_err(|e| AssetError::open(path, e))?;
        self.write_to(file)?;
        log::info!("Wrote {} trace points to {}", self.len(), path.display());
        Ok(())
    }
}

/// Longest prefix of `token` that reads as a number, and whether it spans the whole token
fn leading_number(token: &str) -> Option<(f64, bool)> {
    if let Ok(value) = token.parse() {
        return Some((value, true));
    }
    (1..token.len())
        .rev()
        .filter(|&end| token.is_char_boundary(end))
        .find_map(|end| token[..end].parse().ok())
        .map(|value| (value, false))
}

impl Asset for Trace {
    fn load_from_file(path: &Path) -> Result<Self, AssetError> {
        Self::load(path)
    }
}
