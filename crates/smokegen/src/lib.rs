#![doc = include_str!("../README.md")]

pub mod extract;
pub mod package;
pub mod synth;

mod generator;
pub use generator::*;
