use midi_tempo::{
    io::{ppq, MIDIFile},
    reader::{all_tempo_changes, first_tempo},
};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./song.mid".to_string());

    let file = MIDIFile::open(&path).unwrap();
    let smf = file.parse().unwrap();
    let ppq = ppq(&smf.header);

    println!("{} tracks, {} bytes", smf.tracks.len(), file.len());
    match first_tempo(&smf).unwrap() {
        Some(bpm) => println!("Starts at {} BPM", bpm),
        None => println!("No tempo events, plays at 120 BPM"),
    }

    for change in all_tempo_changes::<u64>(&smf).unwrap() {
        match ppq {
            Some(ppq) => println!(
                "tick {:>8}  beat {:>8.2}  {:>7.2} BPM",
                change.time,
                change.beat(ppq),
                change.bpm
            ),
            None => println!("tick {:>8}  {:>7.2} BPM", change.time, change.bpm),
        }
    }
}
