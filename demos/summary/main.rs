//! Web summary demo: builds seeded webs for a range of side counts and runs a
//! few evolution steps on each, printing efficiency and net length.
//!
//! Usage:
//! ```text
//! cargo run --example summary
//! RUST_LOG=webweave=debug cargo run --example summary
//! ```

use webweave::{WebConfig, WebError, WebModel};

const SEED: u64 = 2024;
const GENERATIONS: usize = 5;
const OFFSPRING: usize = 4;

fn main() -> Result<(), WebError> {
    // Default: WARN for everything, INFO for webweave.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("webweave=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    println!("sides  rings  length    efficiency  evolved");
    for sides in [3, 6, 10, 15, 20, 30] {
        let config = WebConfig::new(sides, 600, 600)?.with_random_seed(SEED);
        let mut model = WebModel::new(config)?;

        let rings = model.trapping_net().len();
        let length = model.trapping_net_length();
        let initial = model.efficiency();
        for _ in 0..GENERATIONS {
            model.reproduce(OFFSPRING)?;
        }

        println!(
            "{sides:>5}  {rings:>5}  {length:>8.1}  {initial:>10.3}  {:>7.3}",
            model.efficiency()
        );
    }
    Ok(())
}
