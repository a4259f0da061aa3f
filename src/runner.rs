//! Headless match loop
//!
//! Pits two policies against each other: observe, act, step, until one side
//! reaches the target score or the step cap elapses. Both policies receive
//! the same full observation, as in interactive play.

use serde::Serialize;

use crate::env::PongEnv;
use crate::policy::Policy;

/// Episode bounds for a match. The environment itself never terminates
/// episodes, so the runner enforces both limits.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_steps: u64,
    pub target_score: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_steps: 30_000,
            target_score: 5,
        }
    }
}

/// Final standing of a match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub player1: &'static str,
    pub player2: &'static str,
    pub player1_score: u32,
    pub player2_score: u32,
    pub steps: u64,
    pub total_time: f32,
}

/// Run one match between `p1` (left paddle) and `p2` (right paddle).
pub fn run_match(
    env: &mut PongEnv,
    p1: &mut dyn Policy,
    p2: &mut dyn Policy,
    config: &MatchConfig,
) -> MatchReport {
    let obs = env.reset();
    p1.observe(&obs);
    p2.observe(&obs);

    let mut steps = 0;
    while steps < config.max_steps {
        let action1 = p1.act();
        let action2 = p2.act();
        let step = env.step(action1, action2);
        p1.observe(&step.obs);
        p2.observe(&step.obs);
        steps += 1;

        let state = env.state();
        if state.player1_score >= config.target_score
            || state.player2_score >= config.target_score
        {
            break;
        }
    }

    let state = env.state();
    let report = MatchReport {
        player1: p1.name(),
        player2: p2.name(),
        player1_score: state.player1_score,
        player2_score: state.player2_score,
        steps,
        total_time: state.total_time,
    };
    log::info!(
        "match over after {} steps: {} {} | {} {}",
        report.steps,
        report.player1,
        report.player1_score,
        report.player2,
        report.player2_score
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PongConfig;
    use crate::policy::{FollowBallPolicy, RandomPolicy, Side, StillPolicy};

    #[test]
    fn test_match_respects_step_cap() {
        let mut env = PongEnv::new(PongConfig::default(), 1).unwrap();
        let config = MatchConfig {
            max_steps: 50,
            target_score: 100,
        };
        let report = run_match(&mut env, &mut StillPolicy, &mut StillPolicy, &config);
        assert_eq!(report.steps, 50);
        assert_eq!(report.player1, "still");
        assert_eq!(report.player2, "still");
    }

    #[test]
    fn test_match_ends_on_target_score() {
        let mut env = PongEnv::new(PongConfig::default(), 2).unwrap();
        let config = MatchConfig {
            max_steps: 200_000,
            target_score: 1,
        };
        let mut p1 = RandomPolicy::new(3);
        let report = run_match(&mut env, &mut p1, &mut StillPolicy, &config);

        assert!(report.steps < config.max_steps, "no goal within the cap");
        assert_eq!(report.player1_score + report.player2_score, 1);
        assert!(report.total_time > 0.0);
    }

    #[test]
    fn test_match_is_deterministic_per_seed() {
        let config = MatchConfig {
            max_steps: 20_000,
            target_score: 3,
        };

        let mut run = || {
            let mut env = PongEnv::new(PongConfig::default(), 11).unwrap();
            let mut p1 = FollowBallPolicy::new(Side::Left);
            let mut p2 = RandomPolicy::new(13);
            run_match(&mut env, &mut p1, &mut p2, &config)
        };

        let a = run();
        let b = run();
        assert_eq!(a.steps, b.steps);
        assert_eq!(a.player1_score, b.player1_score);
        assert_eq!(a.player2_score, b.player2_score);
    }

    #[test]
    fn test_report_serializes() {
        let report = MatchReport {
            player1: "follow_ball",
            player2: "random",
            player1_score: 5,
            player2_score: 2,
            steps: 1234,
            total_time: 41.1,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"player1_score\":5"));
    }
}
