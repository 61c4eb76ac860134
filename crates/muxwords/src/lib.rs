//! muxwords: library surface for the muxwords binary.
//! The binary in main.rs is a thin shell over [`cli`] and [`run`].

pub mod cli;
pub mod run;
