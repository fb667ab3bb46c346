//! Record Playback Binary
//!
//! Reads record files back.
//!
//! - `summary <path>...` prints each summary; directories are expanded
//! - `replay <path> [--hand N]` steps through hands with the spot each seat faced
//! - `features <path> --ai-type 6 --output rows.bin` exports training rows
use byteorder::LE;
use byteorder::WriteBytesExt;
use clap::Parser;
use clap::Subcommand;
use colored::Colorize;
use deepshark::policy::AiType;
use deepshark::record::Summary;
use deepshark::record::TournamentRecord;
use deepshark::record::records;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect tournament records", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Print tournament summaries", alias = "sum")]
    Summary {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    #[command(about = "Replay hands through the rules engine", alias = "rep")]
    Replay {
        path: PathBuf,
        #[arg(long)]
        hand: Option<u32>,
    },
    #[command(about = "Export feature rows for one AI type", alias = "feat")]
    Features {
        path: PathBuf,
        #[arg(long, value_parser = |s: &str| AiType::try_from(s).map_err(|e| e.to_string()))]
        ai_type: AiType,
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn summary(paths: Vec<PathBuf>) -> anyhow::Result<()> {
    let mut files = Vec::new();
    for path in paths {
        match path.is_dir() {
            true => files.extend(records(&path)?),
            false => files.push(path),
        }
    }
    let mut wins = std::collections::BTreeMap::<AiType, usize>::new();
    for path in files.iter() {
        match Summary::read(path) {
            Ok(summary) => {
                if let Some(seat) = summary.winner() {
                    *wins.entry(summary.ai_types[seat]).or_default() += 1;
                }
                println!("{}", summary);
            }
            Err(e) => eprintln!("{} {}", "skipped".red(), e),
        }
    }
    for (tag, count) in wins {
        println!("{:<10} {} wins", tag.to_string().bold(), count);
    }
    Ok(())
}

fn replay(path: PathBuf, only: Option<u32>) -> anyhow::Result<()> {
    let record = TournamentRecord::read(&path)?;
    println!("{}", record.summary().to_string().bold());
    for hand in record
        .hands
        .iter()
        .filter(|h| only.is_none_or(|i| h.index == i))
    {
        println!("{}", format!("hand {} level {}", hand.index, hand.level).cyan());
        for decision in hand.replay(record.n(), record.chips())? {
            println!(
                "  seat {:>2} {:<10} {:<12} {}",
                decision.seat,
                record.ai_types[decision.seat],
                decision.action.to_string().green(),
                decision.spot
            );
        }
        for (seat, delta) in hand.deltas.iter().enumerate().filter(|(_, d)| **d != 0) {
            let net = format!("{:+}", delta);
            let net = match *delta > 0 {
                true => net.green(),
                false => net.red(),
            };
            println!("  seat {:>2} {}", seat, net);
        }
    }
    Ok(())
}

fn features(path: PathBuf, tag: AiType, output: PathBuf) -> anyhow::Result<()> {
    let record = TournamentRecord::read(&path)?;
    let rows = record.samples(tag)?;
    let mut file = std::io::BufWriter::new(std::fs::File::create(&output)?);
    for x in rows.iter().flatten() {
        file.write_f32::<LE>(*x)?;
    }
    file.flush()?;
    println!(
        "{} {} rows of width {} to {}",
        "wrote".green(),
        rows.len(),
        rows.first().map(|r| r.len()).unwrap_or(0),
        output.display()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    match Args::parse().command {
        Command::Summary { paths } => summary(paths),
        Command::Replay { path, hand } => replay(path, hand),
        Command::Features {
            path,
            ai_type,
            output,
        } => features(path, ai_type, output),
    }
}
