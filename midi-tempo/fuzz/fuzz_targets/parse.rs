#![no_main]

use libfuzzer_sys::fuzz_target;

use midi_tempo::{
    io::MIDIFile,
    reader::{all_tempo_changes, first_tempo},
    rewriter::normalize_smf,
};

fuzz_target!(|data: &[u8]| {
    let file = MIDIFile::from_bytes(data.to_vec());
    if let Ok(smf) = file.parse() {
        let _ = first_tempo(&smf);
        let _ = all_tempo_changes::<u64>(&smf);
        if let Ok(normalized) = normalize_smf(&smf, 90.0) {
            assert_eq!(normalized.tracks.len(), smf.tracks.len());
        }
    }
});
