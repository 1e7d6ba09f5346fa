use crate::domain::project::ProjectId;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Hands out ids for newly submitted projects
pub trait IdGenerator {
    fn next_id(&mut self) -> ProjectId;
}

/// How the form picks project ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Uniform in `[0, max_random_id)`. Collisions are possible and are not detected.
    #[default]
    Random,
    /// 1, 2, 3, ...
    Sequential,
}

impl IdStrategy {
    pub fn generator(self, max_random_id: u32) -> Box<dyn IdGenerator> {
        match self {
            Self::Random => Box::new(RandomIdGenerator::new(max_random_id)),
            Self::Sequential => Box::new(SequentialIdGenerator::default()),
        }
    }
}

/// Random ids below an upper bound
#[derive(Debug, Clone)]
pub struct RandomIdGenerator {
    upper_bound: u32,
}

impl RandomIdGenerator {
    pub const DEFAULT_UPPER_BOUND: u32 = 50_000;

    pub fn new(upper_bound: u32) -> Self {
        Self {
            upper_bound: upper_bound.max(1),
        }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_UPPER_BOUND)
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> ProjectId {
        ProjectId::new(rand::rng().random_range(0..self.upper_bound))
    }
}

/// Monotonic counter starting at 1
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next_number: u32,
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self { next_number: 1 }
    }
}

impl IdGenerator for SequentialIdGenerator {
    /// Wraps back to 0 after `u32::MAX`
    fn next_id(&mut self) -> ProjectId {
        let id = ProjectId::new(self.next_number);
        self.next_number = self.next_number.wrapping_add(1);
        id
    }
}
