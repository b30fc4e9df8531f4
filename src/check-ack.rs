use std::{env, io::{self, BufWriter, Write}, process::exit};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

pub mod bitmap;
pub mod logging;
pub mod usage;

/// Expand ack bitmaps into one hit/miss line per sequence number
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Sequence number of the first bit
    #[arg(allow_negative_numbers = true)]
    ack_no: i64,

    /// Hex bitmap, split over any number of arguments, `[` and `]` are ignored
    #[arg(required = true)]
    bitmap: Vec<String>,
}

/**
 * Fewer than two raw arguments prints the short usage line, before clap looks
 * at the values
 */
fn parse_args() -> Args{
    let raw : Vec<String> = env::args_os().skip(1).map(|arg| arg.to_string_lossy().into_owned()).collect();
    if !usage::is_info_request(&raw) && raw.len() < 2{
        println!("args: ackNo bitmap...");
        exit(1);
    }
    Args::parse()
}

fn main() -> Result<()>{
    logging::init();
    let args = parse_args();
    debug!("{:?}", args);

    let stream = bitmap::clean(&args.bitmap[..]);
    let mut out = BufWriter::new(io::stdout().lock());
    // echo goes out even if decoding fails
    writeln!(out, "{}", stream)?;
    out.flush()?;

    let windows = bitmap::decode(&stream, args.ack_no).context("cannot decode ack bitmap")?;
    for window in &windows{
        debug!("window at {}: {}/{} acked", window.get_first_seq(), window.get_hits(), bitmap::WINDOW_BITS);
        for (seq, mark) in window.marks(){
            writeln!(out, "{} {}", seq, mark)?;
        }
    }
    out.flush()?;
    Ok(())
}
