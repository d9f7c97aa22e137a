//! Reading and rewriting the tempo metadata of Standard MIDI Files.
//!
//! Decoding and encoding of the MIDI container is done by [`midly`]; this crate
//! scans the decoded tracks for set-tempo events, replaces them, and can hand a
//! file over to an external tempo converter program.

pub mod change;
pub mod config;
pub mod converter;
pub mod events;
pub mod io;
pub mod num;
pub mod reader;
pub mod rewriter;
pub mod sequence;
pub mod tempo;

#[cfg(test)]
pub(crate) mod test_utils;

pub use change::{change_midi_bpm, BpmChange};
pub use converter::{get_tempo_from_midi, ConversionReport, Converter};
pub use io::TempoError;
pub use reader::{get_all_tempo_changes, get_midi_bpm};
pub use rewriter::normalize_tempo;
pub use sequence::event::TempoChange;

#[macro_export]
macro_rules! pipe {
    ($var:tt |> $function: ident($($params: expr),*) $($calls:tt)*) => {
        pipe!({$function($var, $($params),*)} $($calls)*)
    };
    ($var:tt |> $namespace1:ident :: $function: ident($($params: expr),*) $($calls:tt)*) => {
        pipe!({$namespace1::$function($var, $($params),*)} $($calls)*)
    };
    ($var:tt . $function: ident ( $($params: expr),* ) $($calls:tt)*) => {
        pipe!({$var.$function($($params),*)} $($calls)*)
    };
    ($var:tt . $field: ident $($calls:tt)* ) => {
        pipe!({ $var.$field } $($calls)*)
    };
    ($var:tt) => {
        $var
    };
}
