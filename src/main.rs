use anyhow::{ensure, Context, Result};
use dense_diameter::prelude::*;
use dsi_progress_logger::prelude::*;
use std::time::Instant;

const DEFAULT_SIZES: &str = "10,50,100,200,400";
const DEFAULT_EDGE_PROBABILITY: f64 = 0.8;

/// Times the diameter computation on random graphs of increasing size and
/// compares the running time with the *n*³ scaling law.
///
/// Usage: `dense-diameter [SIZES] [P] [SEED]`, where `SIZES` is a
/// comma-separated list of numbers of nodes.
fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let mut args = std::env::args().skip(1);
    let sizes = args
        .next()
        .unwrap_or_else(|| DEFAULT_SIZES.to_owned())
        .split(',')
        .map(|n| {
            n.trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid number of nodes {:?}", n))
        })
        .collect::<Result<Vec<_>>>()?;
    ensure!(
        sizes.iter().all(|&n| n > 0),
        "The number of nodes must be positive"
    );
    let p = match args.next() {
        Some(p) => p
            .parse::<f64>()
            .with_context(|| format!("Invalid arc probability {:?}", p))?,
        None => DEFAULT_EDGE_PROBABILITY,
    };
    ensure!((0.0..=1.0).contains(&p), "The arc probability must be in [0..1]");
    let seed = match args.next() {
        Some(seed) => seed
            .parse::<u64>()
            .with_context(|| format!("Invalid seed {:?}", seed))?,
        None => 0,
    };

    let mut main_pl = progress_logger![display_memory = true];
    main_pl.info(format_args!(
        "Timing diameter computation on {} graph sizes (p = {}, seed = {})",
        sizes.len(),
        p,
        seed
    ));

    let mut base_ratio = None;
    log::info!(
        "{:>8} {:>12} {:>14} {:>12}",
        "n",
        "seconds",
        "diameter",
        "time / n³"
    );
    for n in sizes {
        let matrix = RandomDistanceMatrix::new(n, p, seed).generate::<i64>();

        let start = Instant::now();
        let diameter = diameter::compute(&matrix, &mut main_pl)?;
        let elapsed = start.elapsed().as_secs_f64();

        // Normalized so that the first size has ratio 1; a cubic algorithm
        // keeps the ratio roughly constant.
        let ratio = elapsed / (n as f64).powi(3);
        let base = *base_ratio.get_or_insert(ratio);
        let diameter = match diameter.finite() {
            Some(d) => d.to_string(),
            None => "∞".to_owned(),
        };
        log::info!(
            "{:>8} {:>12.6} {:>14} {:>12.3}",
            n,
            elapsed,
            diameter,
            ratio / base
        );
    }

    Ok(())
}
