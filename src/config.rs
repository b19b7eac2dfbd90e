//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`CGX_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use cgx_core::{ColorEdit, Integrator, LorenzParams, Rgb, Vec3};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Lorenz attractor run
    #[serde(default)]
    pub lorenz: LorenzConfig,
    /// Color editor session
    #[serde(default)]
    pub color: ColorConfig,
    /// GPS trace playback
    #[serde(default)]
    pub trace: TraceConfig,
    /// Textures to load
    #[serde(default)]
    pub texture: TextureConfig,
    /// Viewer orientation
    #[serde(default)]
    pub view: ViewConfig,
    /// Sphere tessellation
    #[serde(default)]
    pub sphere: SphereConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`CGX_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // CGX_LORENZ__SIGMA=12 -> lorenz.sigma = 12
        figment = figment.merge(Env::prefixed("CGX_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Lorenz attractor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LorenzConfig {
    /// Prandtl number σ
    pub sigma: f64,
    /// Geometric factor β
    pub beta: f64,
    /// Rayleigh number ρ
    pub rho: f64,
    /// Euler step size
    pub dt: f64,
    /// Number of steps
    pub steps: usize,
    /// Start position [x, y, z]
    pub start: [f64; 3],
    /// Write the trajectory here as a trace file
    pub output: Option<String>,
}

impl Default for LorenzConfig {
    fn default() -> Self {
        let params = LorenzParams::CLASSIC;
        Self {
            sigma: params.sigma,
            beta: params.beta,
            rho: params.rho,
            dt: Integrator::DEFAULT_DT,
            steps: Integrator::DEFAULT_STEPS,
            start: [1.0, 1.0, 1.0],
            output: None,
        }
    }
}

impl LorenzConfig {
    pub fn params(&self) -> LorenzParams {
        LorenzParams::new(self.sigma, self.beta, self.rho)
    }

    pub fn integrator(&self) -> Integrator {
        Integrator::new(self.params())
            .with_dt(self.dt)
            .with_steps(self.steps)
            .with_start(Vec3::from_array(self.start))
    }
}

/// Color editor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Starting color [r, g, b]
    pub initial: [f64; 3],
    /// Edits applied in order
    pub edits: Vec<ColorEdit>,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            initial: [1.0, 1.0, 1.0],
            edits: Vec::new(),
        }
    }
}

impl ColorConfig {
    pub fn initial_rgb(&self) -> Rgb {
        Rgb::new(self.initial[0], self.initial[1], self.initial[2])
    }
}

/// GPS trace configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Trace file to load; skipped when unset
    pub path: Option<String>,
    /// Elapsed playback time to report the marker position for
    pub sample_ms: u64,
}

/// Texture configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    /// BMP files to load
    pub paths: Vec<String>,
    /// Treat non power-of-two textures as errors instead of warnings
    pub require_power_of_two: bool,
}

/// Viewer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Azimuth in degrees
    pub th: i32,
    /// Elevation in degrees
    pub ph: i32,
    /// Half-size of the scene
    pub dim: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            th: 0,
            ph: 0,
            dim: 5.0,
        }
    }
}

/// Sphere tessellation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Center [x, y, z]
    pub center: [f64; 3],
    pub radius: f64,
    /// Angular step in degrees (must divide 90)
    pub step: i32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0, 0.0],
            radius: 1.0,
            step: 5,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
