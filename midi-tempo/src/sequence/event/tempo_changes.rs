use std::cmp::Ordering;

use crate::{
    events::{MIDIDelta, TempoCarrier},
    io::TempoError,
    num::{MIDINum, MIDINumInto},
    tempo::tempo_to_bpm,
};

/// A tempo change at an absolute tick position within its track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempoChange<D: MIDINum = u64> {
    pub time: D,
    pub bpm: f64,
}

impl<D: MIDINum> TempoChange<D> {
    pub fn new(time: D, bpm: f64) -> Self {
        TempoChange { time, bpm }
    }

    /// The position of the change in quarter notes, given the file's ticks per quarter note.
    pub fn beat(&self, ppq: u16) -> f64 {
        let time: f64 = self.time.midi_num_into();
        time / ppq as f64
    }
}

/// Scan a single track for tempo events, tracking the absolute time of each one.
///
/// The time counter starts at zero and every event's delta is added to it before the
/// event is checked, so a tempo event's time includes its own delta.
///
/// ## Example
///```
///use midi_tempo::{
///    pipe,
///    sequence::{event::track_tempo_changes, to_vec_result, wrap_ok},
///    TempoChange, TempoError,
///};
///use midly::{MetaMessage, TrackEvent, TrackEventKind};
///
///let tempo = |delta: u32, tempo: u32| TrackEvent {
///    delta: delta.into(),
///    kind: TrackEventKind::Meta(MetaMessage::Tempo(tempo.into())),
///};
///
///let events = vec![
///    tempo(0, 500_000),
///    tempo(48, 400_000),
///    TrackEvent { delta: 96.into(), kind: TrackEventKind::Meta(MetaMessage::EndOfTrack) },
///];
///
///let changes: Result<Vec<TempoChange<u64>>, TempoError> = pipe! {
///    events.into_iter()
///    |>wrap_ok()
///    |>track_tempo_changes()
///    |>to_vec_result()
///};
///
///assert_eq!(
///    changes.unwrap(),
///    vec![TempoChange::new(0, 120.0), TempoChange::new(48, 150.0)]
///);
///```
pub fn track_tempo_changes<D, E, Err, I>(iter: I) -> impl Iterator<Item = Result<TempoChange<D>, Err>>
where
    D: MIDINum,
    E: MIDIDelta + TempoCarrier,
    Err: From<TempoError>,
    I: Iterator<Item = Result<E, Err>> + Sized,
{
    let mut time = D::zero();
    iter.filter_map(move |e| {
        let e = match e {
            Ok(e) => e,
            Err(err) => return Some(Err(err)),
        };
        time += D::midi_num_from(e.delta());
        let tempo = e.inner_tempo()?;
        Some(
            tempo_to_bpm(tempo)
                .map(|bpm| TempoChange::new(time, bpm))
                .map_err(Err::from),
        )
    })
}

/// Sort tempo changes by time. Changes at the same time keep their relative order.
pub fn sort_tempo_changes<D: MIDINum>(changes: &mut [TempoChange<D>]) {
    changes.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        pipe,
        sequence::{to_vec_result, wrap_ok},
        test_utils::{end_of_track, note_on, tempo},
    };

    #[test]
    fn accumulates_deltas_per_event() {
        let events = vec![
            note_on(10, 60),
            tempo(5, 500_000),
            note_on(20, 62),
            tempo(0, 600_000),
            end_of_track(),
        ];

        let changes: Result<Vec<TempoChange>, TempoError> = pipe! {
            events.into_iter()
            |>wrap_ok()
            |>track_tempo_changes()
            |>to_vec_result()
        };

        assert_eq!(
            changes.unwrap(),
            vec![TempoChange::new(15, 120.0), TempoChange::new(35, 100.0)]
        );
    }

    #[test]
    fn accumulates_into_floats() {
        let events = vec![tempo(240, 500_000)];

        let changes: Result<Vec<TempoChange<f64>>, TempoError> = pipe! {
            events.into_iter()
            |>wrap_ok()
            |>track_tempo_changes()
            |>to_vec_result()
        };

        let changes = changes.unwrap();
        assert_eq!(changes[0].time, 240.0);
        assert_eq!(changes[0].beat(480), 0.5);
    }

    #[test]
    fn zero_tempo_is_an_error() {
        let events = vec![tempo(0, 0)];

        let changes: Result<Vec<TempoChange>, TempoError> = pipe! {
            events.into_iter()
            |>wrap_ok()
            |>track_tempo_changes()
            |>to_vec_result()
        };

        assert!(matches!(changes, Err(TempoError::InvalidTempo(0))));
    }

    #[test]
    fn passes_errors_through() {
        let events: Vec<Result<_, TempoError>> = vec![
            Ok(tempo(0, 500_000)),
            Err(TempoError::InvalidBpm(0.0)),
            Ok(tempo(0, 500_000)),
        ];

        let changes: Vec<_> = track_tempo_changes::<u64, _, _, _>(events.into_iter()).collect();
        assert_eq!(changes.len(), 3);
        assert!(matches!(changes[1], Err(TempoError::InvalidBpm(_))));
    }

    #[test]
    fn sort_is_stable() {
        let mut changes = vec![
            TempoChange::<u64>::new(100, 90.0),
            TempoChange::new(50, 120.0),
            TempoChange::new(100, 80.0),
            TempoChange::new(0, 60.0),
        ];
        sort_tempo_changes(&mut changes);

        assert_eq!(
            changes,
            vec![
                TempoChange::new(0, 60.0),
                TempoChange::new(50, 120.0),
                TempoChange::new(100, 90.0),
                TempoChange::new(100, 80.0),
            ]
        );
    }
}
