mod replace_tempo_events;
mod tempo_changes;

pub use replace_tempo_events::*;
pub use tempo_changes::*;
