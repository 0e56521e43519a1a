// src/track/config.rs

use crate::math::{
    algorithms::{BezierSmoother, ChaikinSmoother, PathSmoother},
    error::{TrackError, TrackResult},
    point_distribution::{MIN_POINT_COUNT, PointSetBounds},
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Glättungsstrategie, wie sie in Konfigurationsdateien steht.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SmoothingConfig {
    Bezier { spacing: f32, resolution: f32 },
    Chaikin { iterations: usize },
    None,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self::Bezier {
            spacing: 3.0,
            resolution: 1.0,
        }
    }
}

impl SmoothingConfig {
    pub fn bezier(spacing: f32) -> Self {
        Self::Bezier {
            spacing,
            resolution: 1.0,
        }
    }

    pub fn smoother(&self) -> PathSmoother {
        match *self {
            SmoothingConfig::Bezier {
                spacing,
                resolution,
            } => PathSmoother::Bezier(BezierSmoother::new(spacing).with_resolution(resolution)),
            SmoothingConfig::Chaikin { iterations } => {
                PathSmoother::Chaikin(ChaikinSmoother::new(iterations))
            }
            SmoothingConfig::None => PathSmoother::None,
        }
    }

    fn validate(&self) -> TrackResult<()> {
        self.smoother().validate()
    }
}

impl From<PathSmoother> for SmoothingConfig {
    fn from(smoother: PathSmoother) -> Self {
        match smoother {
            PathSmoother::Bezier(s) => SmoothingConfig::Bezier {
                spacing: s.spacing,
                resolution: s.resolution,
            },
            PathSmoother::Chaikin(s) => SmoothingConfig::Chaikin {
                iterations: s.iterations,
            },
            PathSmoother::None => SmoothingConfig::None,
        }
    }
}

/// Wände links und rechts der Fahrbahn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallConfig {
    pub height: f32,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self { height: 1.0 }
    }
}

/// Alle Parameter einer Streckengenerierung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackGenerationConfig {
    /// Ankerpunkte liegen auf dem Gitter `[0, range_x) × [0, range_y)`.
    pub range_x: u32,
    pub range_y: u32,
    /// Anzahl gezogener Ankerpunkte vor dem Entfernen von Duplikaten.
    pub point_count: usize,
    /// Wahrscheinlichkeit pro Hüllenecke, zum Schwerpunkt gezogen zu werden.
    pub concavity_probability: f32,
    pub smoothing: SmoothingConfig,
    pub road_width: f32,
    /// `None` erzeugt eine Strecke ohne Wände.
    pub walls: Option<WallConfig>,
    pub max_attempts: usize,
    /// Optionales Zeitbudget für alle Versuche zusammen.
    pub time_budget_ms: Option<u64>,
}

impl Default for TrackGenerationConfig {
    fn default() -> Self {
        Self {
            range_x: 100,
            range_y: 100,
            point_count: 8,
            concavity_probability: 0.5,
            smoothing: SmoothingConfig::default(),
            road_width: 5.0,
            walls: Some(WallConfig::default()),
            max_attempts: 100,
            time_budget_ms: None,
        }
    }
}

impl TrackGenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, range_x: u32, range_y: u32) -> Self {
        self.range_x = range_x;
        self.range_y = range_y;
        self
    }

    pub fn with_point_count(mut self, point_count: usize) -> Self {
        self.point_count = point_count;
        self
    }

    pub fn with_concavity_probability(mut self, probability: f32) -> Self {
        self.concavity_probability = probability;
        self
    }

    pub fn with_smoothing(mut self, smoothing: impl Into<SmoothingConfig>) -> Self {
        self.smoothing = smoothing.into();
        self
    }

    pub fn with_road_width(mut self, width: f32) -> Self {
        self.road_width = width;
        self
    }

    pub fn with_walls(mut self, walls: Option<WallConfig>) -> Self {
        self.walls = walls;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_time_budget_ms(mut self, budget: Option<u64>) -> Self {
        self.time_budget_ms = budget;
        self
    }

    pub fn point_bounds(&self) -> TrackResult<PointSetBounds> {
        PointSetBounds::new(self.range_x, self.range_y)
    }

    /// Prüft alle Parameter, bevor ein Versuch gestartet wird.
    ///
    /// # Errors
    /// `InvalidArgument` bzw. `InsufficientPoints` für den ersten ungültigen Wert.
    pub fn validate(&self) -> TrackResult<()> {
        self.point_bounds()?;
        if self.point_count < MIN_POINT_COUNT {
            return Err(TrackError::InsufficientPoints {
                expected: MIN_POINT_COUNT,
                actual: self.point_count,
            });
        }
        if !(0.0..=1.0).contains(&self.concavity_probability) {
            return Err(TrackError::invalid_argument(format!(
                "concavity probability must lie in [0, 1], got {}",
                self.concavity_probability
            )));
        }
        self.smoothing.validate()?;
        if !(self.road_width > 0.0) || !self.road_width.is_finite() {
            return Err(TrackError::invalid_argument(format!(
                "road width must be positive, got {}",
                self.road_width
            )));
        }
        if let Some(walls) = self.walls {
            if !(walls.height > 0.0) || !walls.height.is_finite() {
                return Err(TrackError::invalid_argument(format!(
                    "wall height must be positive, got {}",
                    walls.height
                )));
            }
        }
        if self.max_attempts == 0 {
            return Err(TrackError::invalid_argument("max_attempts must be at least 1"));
        }
        Ok(())
    }

    /// Liest eine TOML-Konfiguration. Fehlende Felder erhalten ihre Standardwerte.
    pub fn from_toml_str(content: &str) -> TrackResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> TrackResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TrackGenerationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.range_x, 100);
        assert_eq!(config.road_width, 5.0);
        assert_eq!(config.max_attempts, 100);
        assert_eq!(config.walls, Some(WallConfig { height: 1.0 }));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let base = TrackGenerationConfig::default();
        for config in [
            base.clone().with_point_count(2),
            base.clone().with_concavity_probability(1.5),
            base.clone().with_road_width(0.0),
            base.clone().with_range(0, 10),
            base.clone().with_max_attempts(0),
            base.clone().with_smoothing(SmoothingConfig::bezier(0.0)),
            base.clone().with_smoothing(SmoothingConfig::Chaikin { iterations: 0 }),
            base.clone().with_smoothing(SmoothingConfig::Chaikin { iterations: 64 }),
            base.clone().with_smoothing(SmoothingConfig::Bezier {
                spacing: f32::INFINITY,
                resolution: 1.0,
            }),
            base.clone().with_smoothing(SmoothingConfig::Bezier {
                spacing: 3.0,
                resolution: 2e4,
            }),
            base.clone().with_walls(Some(WallConfig { height: -1.0 })),
        ] {
            let err = config.validate().unwrap_err();
            assert!(err.is_invalid_argument(), "{config:?} gave {err}");
        }
    }

    #[test]
    fn test_smoother_round_trip() {
        let config = SmoothingConfig::Chaikin { iterations: 3 };
        assert_eq!(SmoothingConfig::from(config.smoother()), config);
        assert!(matches!(SmoothingConfig::None.smoother(), PathSmoother::None));
    }

    #[test]
    fn test_toml_with_partial_fields() {
        let config = TrackGenerationConfig::from_toml_str(
            r#"
            point_count = 12
            road_width = 6.5

            [smoothing]
            kind = "chaikin"
            iterations = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.point_count, 12);
        assert_eq!(config.road_width, 6.5);
        assert_eq!(config.smoothing, SmoothingConfig::Chaikin { iterations: 4 });
        assert_eq!(config.range_y, 100);
    }

    #[test]
    fn test_toml_errors() {
        assert!(matches!(
            TrackGenerationConfig::from_toml_str("point_count = \"many\""),
            Err(TrackError::ConfigParse(_))
        ));
        assert!(
            TrackGenerationConfig::from_toml_str("concavity_probability = 2.0")
                .unwrap_err()
                .is_invalid_argument()
        );
        let infinite_spacing = TrackGenerationConfig::from_toml_str(
            r#"
            [smoothing]
            kind = "bezier"
            spacing = inf
            resolution = 1.0
            "#,
        );
        assert!(infinite_spacing.unwrap_err().is_invalid_argument());
        assert!(matches!(
            TrackGenerationConfig::load("does/not/exist.toml"),
            Err(TrackError::Io(_))
        ));
    }
}
