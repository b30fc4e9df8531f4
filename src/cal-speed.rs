use std::{env, process::exit};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

pub mod logging;
pub mod speed;
pub mod usage;
use speed::Estimate;

/// Theoretical throughput of a window based transport
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Round trip time in milliseconds
    #[arg(allow_negative_numbers = true)]
    latency: i64,

    /// Window size in segments
    #[arg(allow_negative_numbers = true)]
    win: i64,

    /// Payload bytes carried by one segment
    #[arg(long, default_value_t = speed::SEGMENT_BYTES, value_parser = clap::value_parser!(u32).range(1..))]
    mss: u32,
}

/**
 * Count the positional values, `--mss` and its value are not part of the count
 */
fn positional_count(args : &[String]) -> usize{
    let mut count = 0;
    let mut iter = args.iter();
    while let Some(arg) = iter.next(){
        if arg == "--mss"{
            iter.next();
        }else if usage::is_value(arg){
            count += 1;
        }
    }
    count
}

/**
 * Parse the command line. The argument count is checked on the raw strings
 * first, a wrong count prints the short usage line whatever the values are
 */
fn parse_args() -> Args{
    let mut raw = env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let program = raw.next().unwrap_or_else(|| "cal-speed".to_string());
    let raw : Vec<String> = raw.collect();
    if !usage::is_info_request(&raw) && positional_count(&raw) != 2{
        println!("{} [latency] [win]", program);
        exit(1);
    }
    Args::parse()
}

fn main() -> Result<()>{
    logging::init();
    let args = parse_args();
    debug!("{:?}", args);

    let estimate = Estimate::new(args.latency, args.win)
        .and_then(|estimate| estimate.with_segment_bytes(args.mss))
        .with_context(|| format!("cannot estimate speed for latency {} and window {}", args.latency, args.win))?;
    debug!("latency={}ms window={} segment={}B",
        estimate.get_latency(), estimate.get_window(), estimate.get_segment_bytes());

    println!("{}", speed::report(estimate.speed()));
    Ok(())
}
