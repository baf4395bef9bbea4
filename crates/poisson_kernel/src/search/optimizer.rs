//! Trial loop that builds candidate point sets and keeps the best-separated one.
use glam::DVec3;
use rand::RngCore;
use tracing::{debug, info, warn};

use crate::domain::{DomainSpec, PointSet, Shape};
use crate::error::{Error, Result};
use crate::events::{EventSink, ProgressSink, SearchEvent};
use crate::replicate::replicate;
use crate::sampling::{Domain, DomainSampling};
use crate::search::candidate::find_next_point;
use crate::search::rotation::separation_score;

/// Parameters of a single search call.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of primary points to place.
    pub target_point_count: usize,
    /// Number of independent trials; the best-separated trial wins.
    pub trial_count: usize,
    /// Random candidates drawn per placed point. Higher => better separation at higher cost.
    pub candidates_per_step: usize,
    /// Discrete rotations to score against. Only used for 2D disks.
    pub rotation_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            target_point_count: 8,
            trial_count: 4,
            candidates_per_step: 128,
            rotation_count: 1,
        }
    }
}

impl SearchConfig {
    /// Creates a new [`SearchConfig`] placing `target_point_count` points.
    pub fn new(target_point_count: usize) -> Self {
        Self {
            target_point_count,
            ..Default::default()
        }
    }

    /// Sets the number of trials.
    pub fn with_trial_count(mut self, trial_count: usize) -> Self {
        self.trial_count = trial_count;
        self
    }

    /// Sets the number of candidates per placed point.
    pub fn with_candidates_per_step(mut self, candidates_per_step: usize) -> Self {
        self.candidates_per_step = candidates_per_step;
        self
    }

    /// Sets the number of rotations scored in 2D disk mode.
    pub fn with_rotation_count(mut self, rotation_count: usize) -> Self {
        self.rotation_count = rotation_count;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.target_point_count < 1 {
            return Err(Error::InvalidConfig(
                "target_point_count must be >= 1".into(),
            ));
        }
        if self.trial_count < 1 {
            return Err(Error::InvalidConfig("trial_count must be >= 1".into()));
        }
        if self.candidates_per_step < 1 {
            return Err(Error::InvalidConfig(
                "candidates_per_step must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

/// Result of a search with the best trial's full detail.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Primary points of the best trial, in placement order.
    pub points: PointSet,
    /// Best trial's working set: each primary followed by its periodic images.
    pub working_set: PointSet,
    /// Separation score of the best trial.
    pub separation: f64,
    /// Rotation count used for scoring.
    pub rotation_count: usize,
    /// Number of trials that were run.
    pub trial_count: usize,
}

/// Configured point-set generator.
///
/// Immutable once configured; every search call derives its per-call values
/// locally, so one generator can serve any number of sequential searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    spec: DomainSpec,
    first_point_fixed_at_origin: bool,
}

impl Generator {
    /// Validates the domain and creates a generator.
    ///
    /// Repeat mode is ignored for disks and spheres. With
    /// `first_point_fixed_at_origin` every trial starts at the domain's zero point.
    pub fn configure(
        num_dim: usize,
        shape: Shape,
        repeat: bool,
        first_point_fixed_at_origin: bool,
    ) -> Result<Self> {
        let spec = DomainSpec::new(num_dim, shape, repeat)?;
        Ok(Self::from_spec(spec, first_point_fixed_at_origin))
    }

    pub fn from_spec(spec: DomainSpec, first_point_fixed_at_origin: bool) -> Self {
        Self {
            spec,
            first_point_fixed_at_origin,
        }
    }

    pub fn spec(&self) -> &DomainSpec {
        &self.spec
    }

    pub fn first_point_fixed_at_origin(&self) -> bool {
        self.first_point_fixed_at_origin
    }

    /// Rotation count honored for this domain: `requested` (at least 1) for a 2D
    /// disk, 1 for everything else.
    pub fn effective_rotation_count(&self, requested: usize) -> usize {
        if self.spec.shape() == Shape::Disk && self.spec.num_dim() == 2 {
            requested.max(1)
        } else {
            1
        }
    }

    /// Whether every trial scores 0 under `rotation_count`: a point pinned at the
    /// disk center coincides with its own rotated copies.
    pub(crate) fn origin_collapses_rotations(&self, rotation_count: usize) -> bool {
        self.first_point_fixed_at_origin && rotation_count > 1
    }

    /// Runs the search and returns `target_point_count` primary points.
    ///
    /// `progress` receives `i / trial_count` at the start of every trial `i`.
    pub fn search(
        &self,
        config: &SearchConfig,
        rng: &mut impl RngCore,
        progress: Option<&mut dyn FnMut(f64)>,
    ) -> Result<PointSet> {
        let outcome = match progress {
            Some(callback) => {
                self.search_with_events(config, rng, &mut ProgressSink::new(callback))?
            }
            None => self.search_with_events(config, rng, &mut ())?,
        };
        Ok(outcome.points)
    }

    /// Runs the search, reporting every step to `sink`.
    pub fn search_with_events(
        &self,
        config: &SearchConfig,
        rng: &mut impl RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<SearchOutcome> {
        config.validate()?;
        let rng: &mut dyn RngCore = rng;

        let rotation_count = self.effective_rotation_count(config.rotation_count);
        if config.rotation_count > 1 && rotation_count == 1 {
            warn!(
                "Rotation count {} ignored for {:?} in {}D; rotations only apply to 2D disks.",
                config.rotation_count,
                self.spec.shape(),
                self.spec.num_dim()
            );
        }
        if self.origin_collapses_rotations(rotation_count) {
            warn!(
                "First point fixed at the disk center with {} rotations; every trial will score 0 \
                 and the first trial is kept.",
                rotation_count
            );
        }

        let num_perms = self.spec.num_perms();
        let domain = self.spec.domain();
        info!(
            "Searching {} points in {:?} ({}D, repeat: {}) with {} trials of {} candidates, {} rotation(s).",
            config.target_point_count,
            self.spec.shape(),
            self.spec.num_dim(),
            self.spec.repeat(),
            config.trial_count,
            config.candidates_per_step,
            rotation_count
        );
        sink.send(SearchEvent::SearchStarted {
            config: config.clone(),
            shape: self.spec.shape(),
            num_dim: self.spec.num_dim(),
            rotation_count,
        });

        let mut best_set: Vec<DVec3> = Vec::new();
        let mut best_score = f64::NEG_INFINITY;

        for index in 0..config.trial_count {
            sink.send(SearchEvent::TrialStarted {
                index,
                progress: index as f64 / config.trial_count as f64,
            });

            let working = self.build_trial(&domain, config, rng);
            let score = separation_score(&working, rotation_count);

            let improved = score > best_score;
            if improved {
                best_score = score;
                best_set = working;
            }
            debug!(
                "Trial {}/{}: separation {:.6}, best {:.6}{}.",
                index + 1,
                config.trial_count,
                score,
                best_score,
                if improved { " (new best)" } else { "" }
            );
            sink.send(SearchEvent::TrialFinished {
                index,
                score,
                best_score,
                improved,
            });
        }

        let working_set = PointSet::new(self.spec.num_dim(), best_set);
        let points = working_set.every_nth(num_perms);
        info!(
            "Search finished: {} points, best separation {:.6}.",
            points.len(),
            best_score
        );
        sink.send(SearchEvent::SearchFinished {
            best_score,
            point_count: points.len(),
        });

        Ok(SearchOutcome {
            points,
            working_set,
            separation: best_score,
            rotation_count,
            trial_count: config.trial_count,
        })
    }

    /// Builds one trial's working set, primaries interleaved with their images.
    fn build_trial(
        &self,
        domain: &Domain,
        config: &SearchConfig,
        rng: &mut dyn RngCore,
    ) -> Vec<DVec3> {
        let num_dim = self.spec.num_dim();
        let repeat = self.spec.repeat();
        let mut working = Vec::with_capacity(config.target_point_count * self.spec.num_perms());

        let first = if self.first_point_fixed_at_origin {
            domain.zero_point()
        } else {
            domain.sample_one(rng)
        };
        working.extend(replicate(first, num_dim, repeat));

        for _ in 1..config.target_point_count {
            let next = find_next_point(&working, domain, config.candidates_per_step, rng);
            working.extend(replicate(next, num_dim, repeat));
        }

        working
    }
}
