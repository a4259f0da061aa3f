//! CyberPong entry point
//!
//! Runs a headless match between the follow-ball bot (left paddle) and a
//! random opponent (right paddle), printing the final report as JSON.

use std::process::ExitCode;

use cyberpong::policy::{FollowBallPolicy, RandomPolicy, Side};
use cyberpong::runner::{MatchConfig, run_match};
use cyberpong::{PongConfig, PongEnv};

const USAGE: &str =
    "usage: cyberpong [--seed N] [--max-steps N] [--target-score N] [--config FILE.json]";

fn main() -> ExitCode {
    env_logger::init();

    match run(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut args: impl Iterator<Item = String>) -> Result<(), String> {
    let mut seed: u64 = 0;
    let mut match_config = MatchConfig::default();
    let mut sim_config = PongConfig::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => seed = parse("--seed", &next_value(&mut args, "--seed")?)?,
            "--max-steps" => {
                match_config.max_steps = parse("--max-steps", &next_value(&mut args, "--max-steps")?)?;
            }
            "--target-score" => {
                match_config.target_score =
                    parse("--target-score", &next_value(&mut args, "--target-score")?)?;
            }
            "--config" => sim_config = load_config(&next_value(&mut args, "--config")?)?,
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    let mut env =
        PongEnv::new(sim_config, seed).map_err(|err| format!("invalid configuration: {err}"))?;
    let mut left = FollowBallPolicy::new(Side::Left);
    let mut right = RandomPolicy::new(seed ^ 0x9e37_79b9_7f4a_7c15);

    let report = run_match(&mut env, &mut left, &mut right, &match_config);

    let json = serde_json::to_string_pretty(&report).map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("{flag} needs a value"))
}

fn parse<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|err| format!("{flag}: {err}"))
}

fn load_config(path: &str) -> Result<PongConfig, String> {
    let json = std::fs::read_to_string(path).map_err(|err| format!("read {path}: {err}"))?;
    serde_json::from_str(&json).map_err(|err| format!("parse {path}: {err}"))
}
