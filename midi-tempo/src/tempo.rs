//! Conversions between MIDI tempo (microseconds per quarter note) and BPM.

use crate::io::TempoError;

pub const MICROSECONDS_PER_MINUTE: f64 = 60_000_000.0;

/// Target BPM used when a caller does not pick one.
pub const DEFAULT_BPM: f64 = 120.0;

/// The tempo a MIDI file plays at before its first set-tempo event (120 BPM).
pub const DEFAULT_TEMPO: u32 = 500_000;

/// Set-tempo payloads are 24 bit.
pub const MAX_TEMPO: u32 = 0x00FF_FFFF;

/// Rounds a BPM value to 2 decimal places.
pub fn round_bpm(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Converts a tempo in microseconds per quarter note to BPM, rounded to 2 decimal places.
///
/// ## Example
/// ```
/// use midi_tempo::tempo::tempo_to_bpm;
///
/// assert_eq!(tempo_to_bpm(500_000).unwrap(), 120.0);
/// assert_eq!(tempo_to_bpm(700_000).unwrap(), 85.71);
/// assert!(tempo_to_bpm(0).is_err());
/// ```
pub fn tempo_to_bpm(tempo: u32) -> Result<f64, TempoError> {
    if tempo == 0 {
        return Err(TempoError::InvalidTempo(tempo));
    }
    Ok(round_bpm(MICROSECONDS_PER_MINUTE / tempo as f64))
}

/// Converts a BPM value to a tempo in microseconds per quarter note, rounded to the nearest
/// microsecond.
///
/// Fails for BPM values that are not positive and finite, or whose tempo does not fit in the
/// 24 bits of a set-tempo event.
///
/// ## Example
/// ```
/// use midi_tempo::tempo::bpm_to_tempo;
///
/// assert_eq!(bpm_to_tempo(120.0).unwrap(), 500_000);
/// assert_eq!(bpm_to_tempo(90.0).unwrap(), 666_667);
/// assert!(bpm_to_tempo(0.0).is_err());
/// ```
pub fn bpm_to_tempo(bpm: f64) -> Result<u32, TempoError> {
    if !bpm.is_finite() || bpm <= 0.0 {
        return Err(TempoError::InvalidBpm(bpm));
    }

    let tempo = (MICROSECONDS_PER_MINUTE / bpm).round();
    if tempo < 1.0 || tempo > MAX_TEMPO as f64 {
        return Err(TempoError::InvalidBpm(bpm));
    }
    Ok(tempo as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tempo_is_default_bpm() {
        assert_eq!(tempo_to_bpm(DEFAULT_TEMPO).unwrap(), DEFAULT_BPM);
        assert_eq!(bpm_to_tempo(DEFAULT_BPM).unwrap(), DEFAULT_TEMPO);
    }

    #[test]
    fn rounds_bpm_to_two_places() {
        assert_eq!(round_bpm(85.714285), 85.71);
        assert_eq!(round_bpm(99.999), 100.0);
        assert_eq!(tempo_to_bpm(333_333).unwrap(), 180.0);
    }

    #[test]
    fn rejects_zero_tempo() {
        assert!(matches!(tempo_to_bpm(0), Err(TempoError::InvalidTempo(0))));
    }

    #[test]
    fn rejects_unusable_bpm() {
        for bpm in [0.0, -120.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(bpm_to_tempo(bpm), Err(TempoError::InvalidBpm(_))));
        }

        // Slower than a 24 bit tempo can express.
        assert!(bpm_to_tempo(3.0).is_err());
        // Faster than one microsecond per beat.
        assert!(bpm_to_tempo(1.0e9).is_err());
    }

    #[test]
    fn sixty_bpm_is_one_second_per_beat() {
        assert_eq!(bpm_to_tempo(60.0).unwrap(), 1_000_000);
    }

    #[test]
    fn round_trips_within_rounding_drift() {
        let tempos = (1..200_000u32)
            .step_by(997)
            .chain([250_000, 500_000, 666_667, 1_000_000, 4_000_000, MAX_TEMPO]);
        for tempo in tempos {
            let back = bpm_to_tempo(tempo_to_bpm(tempo).unwrap()).unwrap();
            let drift = (back as f64 - tempo as f64).abs();
            let bound = 1.0 + (tempo as f64).powi(2) / 1.2e10;
            assert!(drift <= bound, "tempo {tempo} came back as {back}");
            if tempo <= 50_000 {
                assert!(drift <= 1.0, "tempo {tempo} came back as {back}");
            }
        }
    }
}
