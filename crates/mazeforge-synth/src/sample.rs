//! Labeled-sample assembly: one maze plus one optimal path through it,
//! packaged for a downstream learner.

use mazeforge_core::{Error, Point};
use mazeforge_paths::shortest_path;
use rand::Rng;

use crate::codec::encode;
use crate::mazegen::MazeGen;

/// One labeled training example: an encoded maze and an optimal path
/// between two of its members, as a coordinate sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub maze: String,
    pub path: Vec<Point>,
}

/// Produces labeled examples by chaining generation, the default-endpoint
/// path query, and the text encoding.
pub struct SampleGen<R: Rng> {
    rng: R,
}

impl<R: Rng> SampleGen<R> {
    /// Create a sample generator with the given rng.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Manufacture one labeled example over a fresh `n`-member maze.
    pub fn sample(&mut self, n: usize) -> Result<Sample, Error> {
        let mut graph = MazeGen::new(&mut self.rng).generate(n);
        let ids = shortest_path(&mut graph, &mut self.rng)?;
        let path = graph.positions(&ids)?;
        let maze = encode(&graph)?;
        Ok(Sample { maze, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sample_is_internally_consistent() {
        let mut sg = SampleGen::new(StdRng::seed_from_u64(21));
        let sample = sg.sample(30).unwrap();

        let graph = decode(&sample.maze).unwrap();
        assert_eq!(graph.len(), 30);
        assert!(sample.path.len() >= 2);
        for p in &sample.path {
            assert!(graph.contains(*p), "path point {p} is not a member");
        }
        for pair in sample.path.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1);
        }
    }

    #[test]
    fn tiny_samples_use_the_member_passthrough() {
        let mut sg = SampleGen::new(StdRng::seed_from_u64(4));
        let sample = sg.sample(1).unwrap();
        assert_eq!(sample.path, vec![Point::ZERO]);
        assert_eq!(sample.maze, "S(0,0)|L_|R_|U_|D_\n");
    }
}
