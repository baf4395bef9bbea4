//! Event types and sinks for observing point-set searches.
//!
//! This module defines [`SearchEvent`] and a set of sinks to emit, collect, or
//! forward events while running [`crate::search::Generator::search_with_events`].
//! Sinks are invoked synchronously on the searching thread.
use crate::domain::Shape;
use crate::search::SearchConfig;

/// Describes events emitted during a search.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Emitted once the configuration has been validated.
    SearchStarted {
        /// The search configuration used.
        config: SearchConfig,
        /// Domain shape being sampled.
        shape: Shape,
        /// Dimensionality of the points.
        num_dim: usize,
        /// Rotation count actually used for scoring.
        rotation_count: usize,
    },

    /// Emitted at the start of each trial.
    TrialStarted {
        /// Zero-based trial index.
        index: usize,
        /// Fraction of trials completed so far, `index / trial_count`.
        progress: f64,
    },

    /// Emitted after a trial has been scored.
    TrialFinished {
        /// Zero-based trial index.
        index: usize,
        /// Separation score of this trial.
        score: f64,
        /// Best score recorded after this trial.
        best_score: f64,
        /// Whether this trial replaced the best result.
        improved: bool,
    },

    /// Emitted when all trials are done.
    SearchFinished {
        /// Separation score of the returned set.
        best_score: f64,
        /// Number of primary points returned.
        point_count: usize,
    },
}

/// A generic event sink that accepts [`SearchEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SearchEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SearchEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SearchEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SearchEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SearchEvent),
{
    #[inline]
    fn send(&mut self, event: SearchEvent) {
        (self.f)(event);
    }
}

/// Forwards trial progress fractions to a `FnMut(f64)` callback and drops the rest.
pub struct ProgressSink<'a> {
    callback: &'a mut dyn FnMut(f64),
}

impl<'a> ProgressSink<'a> {
    pub fn new(callback: &'a mut dyn FnMut(f64)) -> Self {
        Self { callback }
    }
}

impl EventSink for ProgressSink<'_> {
    #[inline]
    fn send(&mut self, event: SearchEvent) {
        if let SearchEvent::TrialStarted { progress, .. } = event {
            (self.callback)(progress);
        }
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SearchEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
        }
    }

    pub fn into_inner(self) -> Vec<SearchEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SearchEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SearchEvent) {
        self.events.push(event);
    }
}
