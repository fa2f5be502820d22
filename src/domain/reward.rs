//! Reward of a tick as a function of the robot's status.

use super::Status;
use crate::config::RewardConfig;

/// Reward for a tick that ended in `status` after `steps` ticks of the episode.
///
/// Uneventful ticks cost the elapsed episode time in seconds, so the penalty grows the longer
/// the robot takes to reach the goal.
pub fn reward(status: Status, steps: u64, fps: f64, rewards: &RewardConfig) -> f64 {
    match status {
        Status::Normal => -(steps as f64 / fps),
        Status::HitObstacle => rewards.obstacle_penalty,
        Status::HitWall => rewards.wall_penalty,
        Status::ReachedGoal => rewards.goal_reward,
        Status::Exited => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::normal(Status::Normal, 15, -0.5)]
    #[case::first_tick(Status::Normal, 1, -1.0 / 30.0)]
    #[case::obstacle(Status::HitObstacle, 15, -50.0)]
    #[case::wall(Status::HitWall, 15, -10.0)]
    #[case::goal(Status::ReachedGoal, 15, 10000.0)]
    #[case::exited(Status::Exited, 15, 0.0)]
    fn test_reward(#[case] status: Status, #[case] steps: u64, #[case] expected: f64) {
        assert_abs_diff_eq!(
            reward(status, steps, 30.0, &RewardConfig::default()),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_time_penalty_is_non_increasing() {
        let rewards = RewardConfig::default();
        let sequence = (1..=1000)
            .map(|steps| reward(Status::Normal, steps, 30.0, &rewards))
            .collect::<Vec<_>>();
        assert!(sequence.windows(2).all(|w| w[1] <= w[0]));
    }
}
