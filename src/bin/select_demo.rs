//! Runs the deterministic selector over a random input and reports its metrics.
use clap::{Parser, ValueEnum};
use deterministic_select::sort::{DescentPolicy, Metrics, PartitionScheme, Selector};
use env_logger::Env;
use log::{error, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    RecurseSmaller,
    Iterative,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Partition {
    Lomuto,
    ThreeWay,
}

/// Median-of-medians selection demo
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Config {
    #[clap(long, default_value = "20000", env = "SELECT_DEMO_SIZE", help = "Number of random elements")]
    size: usize,

    #[clap(long, default_value = "42", env = "SELECT_DEMO_SEED", help = "Seed of the input generator")]
    seed: u64,

    #[clap(
        long,
        value_delimiter = ',',
        help = "Ranks to select; defaults to 0, n/4, n/2, 3n/4 and n-1"
    )]
    ranks: Vec<usize>,

    #[clap(long, value_enum, default_value = "recurse-smaller")]
    policy: Policy,

    #[clap(long, value_enum, default_value = "lomuto")]
    partition: Partition,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let config = Config::parse();

    let n = config.size;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let input: Vec<i32> = (0..n).map(|_| rng.gen()).collect();
    let mut sorted = input.clone();
    sorted.sort_unstable();

    let ranks = if config.ranks.is_empty() {
        vec![0, n / 4, n / 2, 3 * n / 4, n.saturating_sub(1)]
    } else {
        config.ranks.clone()
    };

    let selector = Selector::new()
        .with_policy(match config.policy {
            Policy::RecurseSmaller => DescentPolicy::RecurseSmaller,
            Policy::Iterative => DescentPolicy::Iterative,
        })
        .with_partition(match config.partition {
            Partition::Lomuto => PartitionScheme::Lomuto,
            Partition::ThreeWay => PartitionScheme::ThreeWay,
        });

    let mut mismatches = 0;
    for k in ranks {
        let mut m = Metrics::new();
        let got = selector.select(&input, k, &mut m)?;
        let ok = got == sorted[k];
        if !ok {
            mismatches += 1;
            error!("k={} selected {} but expected {}", k, got, sorted[k]);
        }
        info!(
            "k={:<7} ok={}  time={:.3} ms  comps={}  swaps={}  depth={}",
            k,
            ok,
            m.elapsed.as_secs_f64() * 1e3,
            m.comparisons,
            m.swaps,
            m.max_recursion_depth
        );
    }

    if mismatches > 0 {
        return Err(format!("{} rank(s) disagreed with a full sort", mismatches).into());
    }
    Ok(())
}
