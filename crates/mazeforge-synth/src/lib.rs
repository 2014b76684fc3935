//! Maze synthesis: randomized growth generation, the line-oriented text
//! codec, and labeled-sample assembly for downstream learners.

pub mod codec;
pub mod mazegen;
pub mod sample;

pub use codec::{decode, encode, encode_node};
pub use mazegen::{MazeGen, generate};
pub use sample::{Sample, SampleGen};
