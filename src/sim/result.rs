use std::fmt;

use crate::dynamics::state::TrajectoryState;
use super::event::{EventKind, FlightEvent};

/// One recorded point of the trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,     // s
    pub altitude: f64, // m
    pub velocity: f64, // m/s
}

impl From<&TrajectoryState> for Sample {
    fn from(s: &TrajectoryState) -> Self {
        Sample { time: s.time, altitude: s.altitude, velocity: s.velocity }
    }
}

/// How the integration loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Envelope ruptured; integration stopped on that step.
    Burst,
    /// The configured duration ran out with the envelope intact.
    DurationExhausted,
    /// The balloon sank below its release altitude: not enough free lift.
    NoFreeLift,
}

impl ExitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExitStatus::Burst => "burst",
            ExitStatus::DurationExhausted => "duration_exhausted",
            ExitStatus::NoFreeLift => "no_free_lift",
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-fatal conditions noticed during a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diagnostic {
    /// Speed left the validity range of the drag law.
    HighSpeedDrag { time: f64, velocity: f64 },
}

/// Outcome of one ascent run, truncated at the apex.
#[derive(Debug, Clone)]
pub struct AscentResult {
    samples: Vec<Sample>,
    pub apex_altitude: f64,
    pub time_to_apex: f64,
    pub burst_altitude: Option<f64>,
    pub burst_time: Option<f64>,
    pub exit_status: ExitStatus,
    pub events: Vec<FlightEvent>,
    pub diagnostics: Vec<Diagnostic>,
}

impl AscentResult {
    /// Build from the raw run, dropping everything after the highest sample.
    ///
    /// Ties resolve to the earliest sample. `raw` always holds at least the
    /// release sample.
    pub(crate) fn from_run(
        mut raw: Vec<Sample>,
        exit_status: ExitStatus,
        burst: Option<Sample>,
        mut events: Vec<FlightEvent>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        let apex_idx = apex_index(&raw);
        raw.truncate(apex_idx + 1);
        let apex = raw[apex_idx];

        events.retain(|e| e.time <= apex.time);
        events.push(FlightEvent { time: apex.time, altitude: apex.altitude, kind: EventKind::Apex });
        events.sort_by(|a, b| a.time.total_cmp(&b.time));

        AscentResult {
            samples: raw,
            apex_altitude: apex.altitude,
            time_to_apex: apex.time,
            burst_altitude: burst.map(|s| s.altitude),
            burst_time: burst.map(|s| s.time),
            exit_status,
            events,
            diagnostics,
        }
    }

    /// Samples from release up to and including the apex.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn peak_speed(&self) -> f64 {
        self.samples.iter().map(|s| s.velocity.abs()).fold(0.0_f64, f64::max)
    }

    pub fn burst(&self) -> bool {
        self.exit_status == ExitStatus::Burst
    }
}

/// Index of the first sample with the greatest altitude.
fn apex_index(samples: &[Sample]) -> usize {
    let mut best = 0;
    for (i, s) in samples.iter().enumerate().skip(1) {
        if s.altitude > samples[best].altitude {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(time: f64, altitude: f64, velocity: f64) -> Sample {
        Sample { time, altitude, velocity }
    }

    #[test]
    fn truncates_after_apex() {
        let raw = vec![s(0.0, 0.0, 0.0), s(1.0, 5.0, 4.0), s(2.0, 8.0, 1.0), s(3.0, 7.0, -3.0)];
        let r = AscentResult::from_run(raw, ExitStatus::DurationExhausted, None, vec![], vec![]);
        assert_eq!(r.samples().len(), 3);
        assert_eq!(r.apex_altitude, 8.0);
        assert_eq!(r.time_to_apex, 2.0);
        assert_eq!(r.burst_altitude, None);
        assert_eq!(r.samples().last().unwrap().time, 2.0);
    }

    #[test]
    fn ties_pick_the_earliest_sample() {
        let raw = vec![s(0.0, 0.0, 0.0), s(1.0, 8.0, 0.0), s(2.0, 8.0, 0.0), s(3.0, 2.0, -1.0)];
        let r = AscentResult::from_run(raw, ExitStatus::DurationExhausted, None, vec![], vec![]);
        assert_eq!(r.time_to_apex, 1.0);
        assert_eq!(r.samples().len(), 2);
    }

    #[test]
    fn single_sample_run_has_apex_at_release() {
        let r = AscentResult::from_run(vec![s(0.0, 0.0, 0.0)], ExitStatus::NoFreeLift, None, vec![], vec![]);
        assert_eq!(r.apex_altitude, 0.0);
        assert_eq!(r.time_to_apex, 0.0);
        assert_eq!(r.samples().len(), 1);
    }

    #[test]
    fn events_after_apex_are_dropped_and_apex_is_recorded() {
        let raw = vec![s(0.0, 0.0, 0.0), s(1.0, 5.0, 4.0), s(2.0, 3.0, -2.0)];
        let events = vec![
            FlightEvent { time: 0.0, altitude: 0.0, kind: EventKind::Release },
            FlightEvent {
                time: 2.0,
                altitude: 3.0,
                kind: EventKind::Altitude { threshold: 4.0, ascending: false },
            },
        ];
        let r = AscentResult::from_run(raw, ExitStatus::DurationExhausted, None, events, vec![]);
        let kinds: Vec<_> = r.events.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(kinds, vec![EventKind::Release, EventKind::Apex]);
    }

    #[test]
    fn burst_fields_follow_the_burst_sample() {
        let raw = vec![s(0.0, 0.0, 0.0), s(1.0, 5.0, 4.0)];
        let r = AscentResult::from_run(raw.clone(), ExitStatus::Burst, Some(raw[1]), vec![], vec![]);
        assert!(r.burst());
        assert_eq!(r.burst_altitude, Some(5.0));
        assert_eq!(r.burst_time, Some(1.0));
        assert_eq!(r.peak_speed(), 4.0);
    }

    #[test]
    fn exit_status_names() {
        assert_eq!(ExitStatus::Burst.to_string(), "burst");
        assert_eq!(ExitStatus::NoFreeLift.as_str(), "no_free_lift");
    }
}
