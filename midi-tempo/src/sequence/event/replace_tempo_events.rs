use crate::events::TempoCarrier;

/// Replace the value of every tempo event in a sequence with `new_tempo`.
///
/// Unlike rescaling, no delta time is touched: every other event passes through unchanged,
/// so the sequence keeps its length and its timing in ticks.
///
/// ## Example
///```
///use midi_tempo::{
///    pipe,
///    sequence::{event::replace_tempo_events, to_vec_result, wrap_ok},
///};
///use midly::{MetaMessage, TrackEvent, TrackEventKind};
///
///let tempo = |delta: u32, tempo: u32| TrackEvent {
///    delta: delta.into(),
///    kind: TrackEventKind::Meta(MetaMessage::Tempo(tempo.into())),
///};
///
///let events = vec![tempo(0, 500_000), tempo(96, 400_000)];
///
///let changed: Result<Vec<_>, ()> = pipe! {
///    events.into_iter()
///    |>wrap_ok()
///    |>replace_tempo_events(1_000_000)
///    |>to_vec_result()
///};
///
///assert_eq!(changed.unwrap(), vec![tempo(0, 1_000_000), tempo(96, 1_000_000)]);
///```
pub fn replace_tempo_events<E, Err, I>(iter: I, new_tempo: u32) -> impl Iterator<Item = Result<E, Err>>
where
    E: TempoCarrier,
    I: Iterator<Item = Result<E, Err>> + Sized,
{
    iter.map(move |e| e.map(|e| e.with_tempo(new_tempo)))
}
