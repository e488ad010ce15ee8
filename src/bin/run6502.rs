//! run6502 - load a raw program image, run it for a cycle budget and dump
//! the machine state.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cpu6502::{Cpu, CpuConfig, Endianness, Memory, MemoryError};
use tracing::{info, warn};

/// 6502 CPU demo runner
#[derive(Parser, Debug)]
#[command(name = "run6502")]
#[command(version, about = "Run a raw 6502 program image", long_about = None)]
struct Args {
    /// Raw, headerless program image
    #[arg(short, long, default_value = "data.bin")]
    image: PathBuf,

    /// Load address (decimal or 0x-prefixed hex)
    #[arg(short, long, default_value = "0x0600", value_parser = parse_address)]
    base: u16,

    /// Cycle budget to execute
    #[arg(short, long, default_value_t = 1000)]
    cycles: u64,

    /// Memory size in bytes (1..=65536)
    #[arg(short, long, default_value_t = 65536)]
    memory_size: usize,

    /// Decode words high byte first
    #[arg(long)]
    big_endian: bool,
}

impl Args {
    /// Execution starts where the image was loaded.
    fn cpu_config(&self) -> CpuConfig {
        let endianness = if self.big_endian {
            Endianness::Big
        } else {
            Endianness::Little
        };
        CpuConfig::default()
            .with_reset_address(self.base)
            .with_endianness(endianness)
    }
}

fn parse_address(value: &str) -> Result<u16, String> {
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .or_else(|| value.strip_prefix('$'))
    {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => value.parse::<u16>(),
    };
    parsed.map_err(|e| format!("invalid address '{value}': {e}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    info!("run6502 v{}", env!("CARGO_PKG_VERSION"));

    let mut memory = Memory::with_capacity(args.memory_size)
        .with_context(|| format!("cannot set up {} bytes of memory", args.memory_size))?;

    match memory.load_image_file(args.base, &args.image) {
        Ok(loaded) => info!(path = %args.image.display(), loaded, "image ready"),
        Err(err @ MemoryError::ImageUnreadable { .. }) => {
            warn!("{err}; running on zeroed memory");
        }
        Err(err) => return Err(err.into()),
    }

    let mut cpu = Cpu::with_config(&mut memory, args.cpu_config());

    println!("Initial state:");
    println!("  {}", cpu.snapshot());

    let consumed = cpu.step(args.cycles);
    println!("\nExecuted {} cycles (budget {})", consumed, args.cycles);

    println!("\nStack:");
    print!("{}", cpu.stack_dump());

    let snapshot = cpu.snapshot();
    println!("\nFinal state:");
    println!("  {}", snapshot);

    println!("\nFlags:");
    for (flag, set) in snapshot.flags() {
        println!("  {:?} ({}): {}", flag, flag.symbol(), u8::from(set));
    }

    Ok(())
}
