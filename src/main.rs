use log::{error, info};
use mendel_rs::accumulator::Accumulator;
use mendel_rs::extra::analysis;
use mendel_rs::extra::visualisation::Draw;
use mendel_rs::pollination::{simulate_batch, AlleleSource, RandomSource};
use mendel_rs::settings::Settings;
use mendel_rs::{MendelError, Result};
use std::env;
use std::io;
use std::path::PathBuf;
use std::process;

const USAGE: &str = "commands: 1 | n | run <k> | reset | show | fit | chart [path] | settings | quit";

pub fn main() {
    env_logger::init();
    if let Err(e) = _main() {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn _main() -> Result<()> {
    let path = env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref())?;
    info!("settings: {:?}", settings);

    let mut source = RandomSource::new(settings.rng());
    let mut acc = Accumulator::new();
    println!("{}", USAGE);

    let mut lines = io::stdin().lines();
    while let Some(line) = lines.next() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["1"] => run(&mut acc, 1, &mut source)?,
            ["n"] => run(&mut acc, settings.large_batch, &mut source)?,
            ["run", k] => match k.parse::<i64>() {
                Ok(k) => run(&mut acc, k, &mut source)?,
                Err(_) => eprintln!("not a batch size: {}", k),
            },
            ["reset"] => {
                acc.reset();
                print!("{}", acc.snapshot());
            }
            ["show"] => print!("{}", acc.snapshot()),
            ["fit"] => {
                let s = acc.snapshot();
                match (analysis::chi_square(&s), analysis::fits_mendelian_ratio(&s)) {
                    (Some(chi), Some(fits)) => println!(
                        "chi-square against 9:3:3:1: {:.3} ({})",
                        chi,
                        if fits { "consistent" } else { "not consistent" }
                    ),
                    _ => println!("No pollination has been run yet."),
                }
            }
            ["chart"] => {
                let p = settings
                    .chart_path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("mendel.svg"));
                acc.snapshot().draw_to_file(&p)?;
                println!("chart written to {}", p.display());
            }
            ["chart", p] => {
                acc.snapshot().draw_to_file(p)?;
                println!("chart written to {}", p);
            }
            ["settings"] => print!("{}", settings.to_toml()?),
            ["quit"] | ["exit"] => break,
            _ => eprintln!("unknown command `{}`; {}", line.trim(), USAGE),
        }
    }
    Ok(())
}

/// Runs a batch and prints the listing. A rejected batch size is reported, not fatal.
fn run<S: AlleleSource>(acc: &mut Accumulator, n: i64, source: &mut S) -> Result<()> {
    match simulate_batch(acc, n, source) {
        Ok(()) => {
            print!("{}", acc.snapshot());
            Ok(())
        }
        Err(e @ MendelError::InvalidArgument(_)) => {
            eprintln!("{}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}
