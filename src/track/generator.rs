// src/track/generator.rs

//! Wiederholt Generierung und Prüfung, bis eine Strecke ohne Selbstüberschneidung entsteht.

use super::{
    config::TrackGenerationConfig,
    parts::{RoadSurface, TrackPart, TrackWall, Validation},
    path::{SmoothedPath, TrackStart, get_start},
    state::GenerationState,
};
use crate::math::{
    algorithms::{PathSmoother, Smoothing, convex_hull},
    error::{TrackError, TrackResult},
    geometry::{
        mesh::{StripMesh, WallSide},
        polygon::ConcaveDistorter,
    },
    point_distribution::{MIN_POINT_COUNT, PointSetBounds, random_point_set},
    probability::TrackSeed,
    types::Point2D,
};
use bevy::log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use std::time::Instant;

/// Zwischenergebnisse des erfolgreichen Versuchs.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSkeleton {
    pub random_points: Vec<Point2D>,
    pub hull: Vec<Point2D>,
    /// Die verzerrte Hülle, Eingabe der Glättung.
    pub skeleton: Vec<Point2D>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommittedPart {
    pub label: String,
    pub mesh: StripMesh,
}

/// Eine gültige, fertig gebaute Strecke.
#[derive(Debug, Clone, PartialEq)]
pub struct CommittedTrack {
    pub path: SmoothedPath,
    pub parts: Vec<CommittedPart>,
    pub start: TrackStart,
    pub skeleton: TrackSkeleton,
    /// Anzahl benötigter Versuche, mindestens 1.
    pub attempts: usize,
}

impl CommittedTrack {
    pub fn part(&self, label: &str) -> Option<&StripMesh> {
        self.parts.iter().find(|p| p.label == label).map(|p| &p.mesh)
    }

    pub fn road(&self) -> Option<&StripMesh> {
        self.part(RoadSurface::LABEL)
    }
}

/// Ergebnis eines einzelnen Versuchs.
enum Attempt {
    Prepared {
        path: SmoothedPath,
        start: TrackStart,
        skeleton: TrackSkeleton,
    },
    /// Der Zufallszug war unbrauchbar (zu wenige Punkte, kollinear, ...).
    Degenerate(TrackError),
}

/// Steuert den Ablauf `generate → smooth → build → validate → retry → commit`.
#[derive(Debug)]
pub struct TrackGenerator {
    config: TrackGenerationConfig,
    bounds: PointSetBounds,
    distorter: ConcaveDistorter,
    smoother: PathSmoother,
    parts: Vec<Box<dyn TrackPart>>,
    rng: StdRng,
    state: GenerationState,
}

impl TrackGenerator {
    /// Erstellt einen Generator mit zufälligem Seed. Registriert die Fahrbahn und,
    /// falls konfiguriert, beide Wände.
    ///
    /// # Errors
    /// `InvalidArgument` bzw. `InsufficientPoints` für eine ungültige Konfiguration.
    pub fn new(config: TrackGenerationConfig) -> TrackResult<Self> {
        Self::with_track_seed(config, TrackSeed::default())
    }

    pub fn with_track_seed(config: TrackGenerationConfig, seed: TrackSeed) -> TrackResult<Self> {
        config.validate()?;

        let mut parts: Vec<Box<dyn TrackPart>> = vec![Box::new(RoadSurface::new(config.road_width))];
        if let Some(walls) = config.walls {
            for side in [WallSide::Left, WallSide::Right] {
                parts.push(Box::new(TrackWall::new(side, config.road_width, walls.height)));
            }
        }

        Ok(Self {
            bounds: config.point_bounds()?,
            distorter: ConcaveDistorter::new(config.concavity_probability)?,
            smoother: config.smoothing.smoother(),
            config,
            parts,
            rng: seed.rng(),
            state: GenerationState::Idle,
        })
    }

    /// Setzt den Zufallsgenerator auf `seed` zurück.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = TrackSeed::from_seed(seed).rng();
        self
    }

    /// Registriert ein weiteres Streckenteil.
    pub fn with_part(mut self, part: Box<dyn TrackPart>) -> Self {
        self.parts.push(part);
        self
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    pub fn config(&self) -> &TrackGenerationConfig {
        &self.config
    }

    pub fn part_labels(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.label()).collect()
    }

    fn transition(&mut self, next: GenerationState) {
        trace!("Track generation: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Erzeugt Strecken, bis alle Teile gültig sind.
    ///
    /// # Errors
    /// `Exhausted`, wenn `max_attempts` oder das Zeitbudget aufgebraucht sind.
    pub fn generate(&mut self) -> TrackResult<CommittedTrack> {
        let started = Instant::now();
        let budget_ms = self.config.time_budget_ms.map(u128::from);
        let mut attempts = 0;

        while attempts < self.config.max_attempts {
            if let Some(budget) = budget_ms {
                if started.elapsed().as_millis() >= budget {
                    debug!("Time budget of {budget} ms used up after {attempts} attempts");
                    break;
                }
            }
            attempts += 1;
            self.transition(GenerationState::Generating);

            let attempt = match self.prepare_attempt() {
                Ok(attempt) => attempt,
                Err(err) => {
                    self.transition(GenerationState::Idle);
                    warn!("Track generation aborted in attempt {attempts}: {err}");
                    return Err(err);
                }
            };
            let (path, start, skeleton) = match attempt {
                Attempt::Prepared {
                    path,
                    start,
                    skeleton,
                } => (path, start, skeleton),
                Attempt::Degenerate(reason) => {
                    debug!("Attempt {attempts} discarded: {reason}");
                    self.transition(GenerationState::Regenerating);
                    continue;
                }
            };

            self.transition(GenerationState::Validating);
            let mut overlap_count = 0;
            for part in &self.parts {
                if let Validation::Rejected { overlaps } = part.validate() {
                    debug!(
                        "Attempt {attempts}: part '{}' has {} overlapping triangle pairs",
                        part.label(),
                        overlaps.len()
                    );
                    overlap_count += overlaps.len();
                }
            }
            if overlap_count > 0 {
                self.transition(GenerationState::Regenerating);
                continue;
            }

            self.transition(GenerationState::Committed);
            let parts = self
                .parts
                .iter_mut()
                .filter_map(|part| {
                    let label = part.label().to_string();
                    part.commit().map(|mesh| CommittedPart { label, mesh })
                })
                .collect();

            info!(
                "Committed track after {attempts} attempt(s): {} path points, perimeter {:.1}",
                path.len(),
                path.perimeter()
            );
            return Ok(CommittedTrack {
                path,
                parts,
                start,
                skeleton,
                attempts,
            });
        }

        self.transition(GenerationState::Exhausted);
        let elapsed_ms = started.elapsed().as_millis();
        warn!("No valid track after {attempts} attempts ({elapsed_ms} ms)");
        Err(TrackError::Exhausted {
            attempts,
            elapsed_ms,
        })
    }

    /// Ein Zufallszug bis einschließlich `prepare` aller Teile.
    ///
    /// Fehler, die vom Zufallszug abhängen, ergeben `Attempt::Degenerate`.
    /// Alle übrigen Fehler stammen aus den Parametern und werden weitergereicht.
    fn prepare_attempt(&mut self) -> TrackResult<Attempt> {
        let random_points = random_point_set(&mut self.rng, self.bounds, self.config.point_count)?;
        let hull = match convex_hull(&random_points) {
            Ok(hull) => hull,
            // Nach dem Entfernen von Duplikaten oder bei kollinearen Punkten
            Err(err @ (TrackError::InsufficientPoints { .. } | TrackError::DegenerateHull { .. })) => {
                return Ok(Attempt::Degenerate(err));
            }
            Err(err) => return Err(err),
        };
        let skeleton = self.distorter.distort(&mut self.rng, &hull)?;
        let smoothed = self.smoother.smooth_closed(&skeleton)?;
        if smoothed.len() < MIN_POINT_COUNT {
            return Ok(Attempt::Degenerate(TrackError::InsufficientPoints {
                expected: MIN_POINT_COUNT,
                actual: smoothed.len(),
            }));
        }
        let path = SmoothedPath::new(smoothed)?;
        // Zusammenfallende erste Punkte, z.B. zwei zum Schwerpunkt gezogene Ecken ohne Glättung
        let start = match get_start(&path) {
            Ok(start) => start,
            Err(err) => return Ok(Attempt::Degenerate(err)),
        };

        for part in &mut self.parts {
            part.prepare(path.points())?;
        }

        Ok(Attempt::Prepared {
            path,
            start,
            skeleton: TrackSkeleton {
                random_points,
                hull,
                skeleton,
            },
        })
    }
}
