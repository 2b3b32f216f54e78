//! Skein Hash CLI
//!
//! A command-line tool for hashing files or stdin with Skein-256,
//! Skein-512, or Skein-1024, and for benchmarking throughput.
//!
//! # Commands
//!
//! - `hash` - Hash a file or stdin, hex-encoded output
//! - `bench` - Measure hashing throughput

use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};

use skein::algorithm::{hash1024, hash256, hash512, SkeinError};

#[derive(Parser)]
#[command(name = "skein")]
#[command(author = "Cyberia")]
#[command(version = "0.1.0")]
#[command(about = "Skein (Threefish + UBI) file hashing and benchmarking")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Eq, PartialEq, ValueEnum)]
enum StateSize {
    #[value(name = "256")]
    Bits256,
    #[value(name = "512")]
    Bits512,
    #[value(name = "1024")]
    Bits1024,
}

impl StateSize {
    fn native_bits(self) -> u64 {
        match self {
            StateSize::Bits256 => 256,
            StateSize::Bits512 => 512,
            StateSize::Bits1024 => 1024,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a file (or stdin with `-`) and print the hex digest
    Hash {
        /// Threefish/UBI state size
        #[arg(long, value_enum, default_value = "512")]
        bits: StateSize,

        /// Requested output length in bits (defaults to the state size)
        #[arg(long)]
        len: Option<u64>,

        /// Path to the file to hash, or `-` for stdin
        path: PathBuf,
    },

    /// Measure hashing throughput over synthetic input
    Bench {
        /// Threefish/UBI state size
        #[arg(long, value_enum, default_value = "512")]
        bits: StateSize,

        /// Size of the synthetic input buffer, in bytes
        #[arg(long, default_value_t = 16 * 1024 * 1024)]
        size: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("skein=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Hash { bits, len, path } => cmd_hash(bits, len, &path),
        Commands::Bench { bits, size } => cmd_bench(bits, size),
    }
}

fn read_input(path: &PathBuf) -> anyhow::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read(path)?)
    }
}

fn compute(bits: StateSize, hash_bit_len: u64, data: &[u8]) -> Result<Vec<u8>, SkeinError> {
    let out_bytes = ((hash_bit_len + 7) / 8) as usize;
    let mut out = vec![0u8; out_bytes];
    match bits {
        StateSize::Bits256 => hash256(hash_bit_len, data, &mut out)?,
        StateSize::Bits512 => hash512(hash_bit_len, data, &mut out)?,
        StateSize::Bits1024 => hash1024(hash_bit_len, data, &mut out)?,
    }
    Ok(out)
}

fn cmd_hash(bits: StateSize, len: Option<u64>, path: &PathBuf) -> anyhow::Result<()> {
    let hash_bit_len = len.unwrap_or_else(|| bits.native_bits());
    let data = read_input(path)?;
    tracing::debug!(bytes = data.len(), hash_bit_len, "hashing input");
    let digest = compute(bits, hash_bit_len, &data)?;
    println!("{}", hex::encode(digest));
    Ok(())
}

fn cmd_bench(bits: StateSize, size: usize) -> anyhow::Result<()> {
    let data = vec![0xA5u8; size];
    let hash_bit_len = bits.native_bits();

    tracing::info!(bits = hash_bit_len, size, "starting benchmark");

    // warm up
    let _ = compute(bits, hash_bit_len, &data)?;

    let start = Instant::now();
    let iterations = 10;
    for _ in 0..iterations {
        let _ = compute(bits, hash_bit_len, &data)?;
    }
    let elapsed = start.elapsed();

    let total_bytes = size as u64 * iterations as u64;
    let seconds = elapsed.as_secs_f64();
    let mb_per_sec = (total_bytes as f64 / (1024.0 * 1024.0)) / seconds;

    println!("Skein-{}", hash_bit_len);
    println!("  Input size:  {} bytes", size);
    println!("  Iterations:  {}", iterations);
    println!("  Elapsed:     {:.3}s", seconds);
    println!("  Throughput:  {:.2} MB/s", mb_per_sec);

    Ok(())
}
