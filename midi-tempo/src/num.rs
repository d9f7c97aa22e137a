use std::{
    fmt::{Debug, Display},
    ops::AddAssign,
};

use num_traits::Num;

pub trait MIDINumInto<T> {
    /// Casts a tick count to another supported type.
    ///
    /// By default, supports: u64, i64, f64
    /// ## Example
    /// ```
    ///use midi_tempo::num::MIDINumInto;
    ///
    ///let ticks: u64 = 960;
    ///let ticks_f64: f64 = ticks.midi_num_into();
    ///
    ///assert_eq!(ticks_f64, 960f64);
    /// ```
    fn midi_num_into(&self) -> T;
}

pub trait MIDINumFrom<T> {
    /// Builds a tick count from another supported type.
    ///
    /// Delta times come out of the codec as `u32`, so every tick type can be built from one.
    fn midi_num_from(val: T) -> Self;
}

/// A numeric type that absolute tick positions can be accumulated in.
pub trait MIDINum:
    Num
    + PartialOrd
    + PartialEq
    + AddAssign
    + Copy
    + Sized
    + Debug
    + Display
    + Send
    + Sync
    + MIDINumFrom<u32>
    + MIDINumInto<f64>
{
}

macro_rules! impl_tick_from {
    ($from:ident, $to:ident) => {
        impl MIDINumFrom<$to> for $from {
            fn midi_num_from(val: $to) -> Self {
                val as $from
            }
        }
    };
}

macro_rules! impl_tick_into {
    ($from:ident, $to:ident) => {
        impl MIDINumInto<$to> for $from {
            fn midi_num_into(&self) -> $to {
                *self as $to
            }
        }
    };
}

// Absolute tick counters are at least 64 bit wide. A track's deltas can add up past u32::MAX.
macro_rules! impl_tick {
    ($from:ident) => {
        impl_tick_from!($from, u32);
        impl_tick_into!($from, f64);

        impl MIDINum for $from {}
    };
}

impl_tick!(u64);
impl_tick!(i64);
impl_tick!(f64);
