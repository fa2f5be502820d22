//! Controllers choosing an action from the latest observation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    environment::{Action, Environment, Observation},
    Status,
};

pub trait Policy {
    fn act(&mut self, observation: &Observation) -> Action;
}

/// Picks one of the three actions uniformly at random, ignoring the observation.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _observation: &Observation) -> Action {
        Action::ALL[self.rng.random_range(0..Action::ALL.len())]
    }
}

impl<F> Policy for F
where
    F: FnMut(&Observation) -> Action,
{
    fn act(&mut self, observation: &Observation) -> Action {
        self(observation)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Episode {
    pub total_reward: f64,
    pub steps: u64,
    pub status: Status,
}

/// Reset `environment` and let `policy` drive it until the episode is done or `max_ticks` ticks
/// have passed.
pub fn run_episode(
    environment: &mut Environment,
    policy: &mut dyn Policy,
    max_ticks: u64,
) -> Episode {
    let mut observation = environment.reset();
    let mut total_reward = 0.0;

    for _ in 0..max_ticks {
        let result = environment.step(policy.act(&observation));
        total_reward += result.reward;
        observation = result.observation;
        if result.done {
            break;
        }
    }

    Episode {
        total_reward,
        steps: environment.steps(),
        status: environment.status(),
    }
}
