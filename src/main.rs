//! Ball Field entry point
//!
//! Usage: `ball-field [COUNT] [SEED] [SETTINGS.json]`
//!
//! Spawns COUNT balls from a seeded PCG stream and prints the result as JSON.

use ball_field::consts::DEFAULT_BALL_COUNT;
use ball_field::sim::{BallManager, shared};
use ball_field::{SimError, WorldSettings};
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Parse an optional positional argument, rejecting anything unparseable
fn parse_arg<T: std::str::FromStr>(
    value: Option<String>,
    name: &str,
    default: T,
) -> Result<T, SimError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| {
            SimError::InvalidArgument(format!("{name} must be a non-negative integer, got {raw:?}"))
        }),
    }
}

fn run() -> Result<(), SimError> {
    let mut args = std::env::args().skip(1);
    let count: usize = parse_arg(args.next(), "COUNT", DEFAULT_BALL_COUNT)?;
    let seed: u64 = parse_arg(args.next(), "SEED", rand::random())?;
    let settings = match args.next() {
        Some(path) => WorldSettings::load_or_default(path),
        None => WorldSettings::default(),
    };

    let rng = shared(Pcg32::seed_from_u64(seed));
    let mut manager = BallManager::new(rng, settings)?;
    manager.replace_all_randomly(count)?;

    let total_mass: f32 = manager.balls().iter().map(|b| b.mass).sum();
    log::info!(
        "Spawned {} balls with seed {} (total mass {:.1})",
        manager.len(),
        seed,
        total_mass
    );

    println!("{}", serde_json::to_string_pretty(&manager.snapshot())?);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Ball Field starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_count_uses_default() {
        let count: usize = parse_arg(None, "COUNT", DEFAULT_BALL_COUNT).unwrap();
        assert_eq!(count, DEFAULT_BALL_COUNT);
    }

    #[test]
    fn test_count_parses() {
        let count: usize = parse_arg(Some("5".into()), "COUNT", DEFAULT_BALL_COUNT).unwrap();
        assert_eq!(count, 5);
    }

    #[test]
    fn test_negative_count_is_invalid_argument() {
        let result: Result<usize, _> = parse_arg(Some("-1".into()), "COUNT", DEFAULT_BALL_COUNT);
        assert!(matches!(result, Err(SimError::InvalidArgument(_))));
    }

    #[test]
    fn test_non_numeric_count_is_invalid_argument() {
        let result: Result<usize, _> = parse_arg(Some("abc".into()), "COUNT", DEFAULT_BALL_COUNT);
        assert!(matches!(result, Err(SimError::InvalidArgument(msg)) if msg.contains("COUNT")));
    }

    #[test]
    fn test_bad_seed_is_invalid_argument() {
        let result: Result<u64, _> = parse_arg(Some("0x2a".into()), "SEED", 0);
        assert!(matches!(result, Err(SimError::InvalidArgument(_))));
    }
}
