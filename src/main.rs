use std::{path::Path, time::Instant};

use anyhow::Result;

/// Input event log, resolved against the current working directory.
const INPUT_FILE: &str = "exhibitA-input.csv";

/// Date whose plays are counted.
const TARGET_DATE: &str = "10/08/2016";

/// Output histogram file, overwritten if present.
const OUTPUT_FILE: &str = "result.csv";

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();
    playstats::run(Path::new(INPUT_FILE), TARGET_DATE, Path::new(OUTPUT_FILE))?;
    println!(
        "Execution time {:.2} seconds.",
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
