//! Hash messages, check reference files and time the SHA3-256 sponge

use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keccak_digest::reference::{hex_upper, verify_decimal_sequence};
use keccak_digest::sha3_256;
use log::info;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
	#[clap(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the digest of TEXT, of a file, or of stdin
	Hash {
		text: Option<String>,

		#[clap(long, conflicts_with = "text")]
		file: Option<PathBuf>,
	},

	/// Check line i of a reference file against the digest of the decimal string i
	Verify {
		path: PathBuf,

		#[clap(long, default_value = "1000")]
		count: usize,
	},

	/// Hash the same message repeatedly and report throughput
	Bench {
		#[clap(long, default_value = "120000")]
		iterations: u32,

		#[clap(long, default_value = "32")]
		size: usize,

		/// Byte the message is filled with, decimal or 0x-prefixed hex
		#[clap(long, default_value = "0xAB", parse(try_from_str = parse_byte))]
		fill: u8,
	},
}

fn parse_byte(text: &str) -> Result<u8, std::num::ParseIntError> {
	match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
		Some(hex) => u8::from_str_radix(hex, 16),
		None => text.parse(),
	}
}

fn hash(text: Option<String>, file: Option<PathBuf>) -> Result<()> {
	let message = match (text, file) {
		(Some(text), _) => text.into_bytes(),
		(None, Some(path)) => {
			fs::read(&path).with_context(|| format!("cannot read {}", path.display()))?
		}
		(None, None) => {
			let mut buf = Vec::new();
			io::stdin().read_to_end(&mut buf).context("cannot read stdin")?;
			buf
		}
	};

	println!("{}", hex_upper(&sha3_256(&message)));

	Ok(())
}

fn verify(path: PathBuf, count: usize) -> Result<()> {
	let file = File::open(&path).with_context(|| format!("cannot open {}", path.display()))?;

	verify_decimal_sequence(BufReader::new(file), count)
		.with_context(|| format!("verifying {}", path.display()))?;

	println!("All hashes match.");

	Ok(())
}

fn bench(iterations: u32, size: usize, fill: u8) {
	let message = vec![fill; size];
	info!("hashing {} bytes of {:#04x}, {} times", size, fill, iterations);

	let start = Instant::now();

	for _ in 0 .. iterations {
		std::hint::black_box(sha3_256(std::hint::black_box(&message)));
	}

	let elapsed = start.elapsed().as_secs_f64();
	let ns_per_iter = elapsed * 1e9 / f64::from(iterations.max(1));
	let throughput = (size as f64 * f64::from(iterations)) / elapsed / (1024.0 * 1024.0);

	println!("Total time: {:.4} seconds", elapsed);
	println!("Time per iteration: {:.2} ns", ns_per_iter);
	println!("Throughput: {:.2} MB/s", throughput);
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args = Args::parse();

	match args.command {
		Command::Hash {text, file} => hash(text, file)?,
		Command::Verify {path, count} => verify(path, count)?,
		Command::Bench {iterations, size, fill} => bench(iterations, size, fill),
	}

	Ok(())
}
