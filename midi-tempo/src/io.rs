mod errors;
mod midi_file;
mod midi_writer;

pub use errors::*;
pub use midi_file::*;
pub use midi_writer::*;
