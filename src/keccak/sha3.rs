//! An implementation of [SHA3-256](https://en.wikipedia.org/wiki/SHA-3).
//!
//! The sponge runs with a rate of 1088 bits and a capacity of 512 bits. Every
//! message is padded with the SHA-3 domain suffix `0x06` and a closing `0x80`,
//! including messages that already fill a whole number of blocks, which get an
//! extra block made only of padding.

use log::debug;

use super::{keccak_f, State};
use crate::Error;

/// Bytes absorbed per permutation.
pub const RATE_BYTES: usize = 136;

/// Bytes of state never touched by absorbing or squeezing.
pub const CAPACITY_BYTES: usize = 64;

/// Length of a SHA3-256 digest.
pub const DIGEST_BYTES: usize = 32;

const LANE_BYTES: usize = 8;
const RATE_LANES: usize = RATE_BYTES / LANE_BYTES;
const DIGEST_LANES: usize = DIGEST_BYTES / LANE_BYTES;

const _: () = assert!(RATE_BYTES + CAPACITY_BYTES == 200);

struct Padding<'a> {
	bytes: &'a [u8],
	done: bool,
}

impl<'a> Padding<'a> {
	fn new(bytes: &'a [u8]) -> Self {
		Self {bytes, done: false}
	}
}

impl<'a> Iterator for Padding<'a> {
	type Item = [u64; RATE_LANES];

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		let mut buf = [0; RATE_BYTES];

		if self.bytes.len() >= RATE_BYTES {
			let (block, rest) = self.bytes.split_at(RATE_BYTES);
			buf.copy_from_slice(block);
			self.bytes = rest;
		} else {
			buf[.. self.bytes.len()].copy_from_slice(self.bytes);
			buf[self.bytes.len()] |= 0x06;
			buf[RATE_BYTES - 1] |= 0x80;
			self.done = true;
		}

		let mut out = [0; RATE_LANES];

		for (word, chunk) in out.iter_mut().zip(buf.chunks_exact(LANE_BYTES)) {
			let mut lane = [0; LANE_BYTES];
			lane.copy_from_slice(chunk);
			*word = u64::from_le_bytes(lane);
		}

		Some(out)
	}
}

fn absorb(state: &mut State, block: [u64; RATE_LANES]) {
	// word k goes to lane (k mod 5, k div 5), the capacity lanes k >= 17 are left alone
	for (k, val) in block.into_iter().enumerate() {
		state[k % 5][k / 5] ^= val;
	}

	keccak_f(state);
}

fn squeeze(state: &State) -> [u8; DIGEST_BYTES] {
	let mut out = [0; DIGEST_BYTES];

	for k in 0 .. DIGEST_LANES {
		let val = state[k % 5][k / 5];
		out[LANE_BYTES * k ..][.. LANE_BYTES].copy_from_slice(&val.to_le_bytes());
	}

	out
}

/// Returns the SHA3-256 digest of the byte slice passed to it.
pub fn sha3_256(bytes: &[u8]) -> [u8; DIGEST_BYTES] {
	let mut state = [[0; 5]; 5];
	let mut blocks = 0;

	for block in Padding::new(bytes) {
		absorb(&mut state, block);
		blocks += 1;
	}

	debug!("absorbed {} bytes in {} blocks", bytes.len(), blocks);

	squeeze(&state)
}

/// Returns the SHA3-256 digest of the first `length` bytes of `message`.
///
/// Fails with [`Error::LengthOutOfBounds`] instead of reading past the end of
/// `message`; a digest is either complete or not returned at all.
pub fn digest(message: &[u8], length: usize) -> Result<[u8; DIGEST_BYTES], Error> {
	let bytes = message.get(.. length).ok_or(Error::LengthOutOfBounds {
		length,
		available: message.len(),
	})?;

	Ok(sha3_256(bytes))
}

#[cfg(test)]
fn format_hash(hash: [u8; DIGEST_BYTES]) -> String {
	use std::fmt::Write;

	let mut out = String::new();

	for byte in hash {
		write!(out, "{:>02x}", byte).unwrap();
	}

	out
}

#[test]
fn test_empty_input_is_one_padding_block() {
	let blocks: Vec<_> = Padding::new(b"").collect();

	assert_eq!(blocks.len(), 1);
	assert_eq!(blocks[0][0], 0x06);
	assert_eq!(blocks[0][RATE_LANES - 1], 0x80 << 56);
	assert!(blocks[0][1 .. RATE_LANES - 1].iter().all(|&word| word == 0));
}

#[test]
fn test_padding_shares_last_byte() {
	let message = [0u8; RATE_BYTES - 1];
	let blocks: Vec<_> = Padding::new(&message).collect();

	assert_eq!(blocks.len(), 1);
	assert_eq!(blocks[0][RATE_LANES - 1], 0x86 << 56);
}

#[test]
fn test_aligned_input_gets_extra_block() {
	let message = [0xffu8; 2 * RATE_BYTES];
	let blocks: Vec<_> = Padding::new(&message).collect();

	assert_eq!(blocks.len(), 3);
	assert!(blocks[0].iter().chain(&blocks[1]).all(|&word| word == u64::MAX));
	assert_eq!(blocks[2][0], 0x06);
	assert_eq!(blocks[2][RATE_LANES - 1], 0x80 << 56);
}

#[test]
fn test_words_are_little_endian() {
	let blocks: Vec<_> = Padding::new(b"abc").collect();

	assert_eq!(blocks[0][0], 0x0000_0000_0663_6261);
}

#[test]
fn test_empty_input() {
	assert_eq!(
		format_hash(sha3_256(b"")),
		"a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
	);
}

#[test]
fn test_short_input() {
	assert_eq!(
		format_hash(sha3_256(b"abc")),
		"3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
	);
}

#[test]
fn test_digest_checks_length() {
	assert_eq!(digest(b"abcdef", 3).unwrap(), sha3_256(b"abc"));
	assert_eq!(digest(b"abc", 0).unwrap(), sha3_256(b""));

	match digest(b"abc", 4) {
		Err(Error::LengthOutOfBounds {length: 4, available: 3}) => {}
		other => panic!("unexpected result: {:?}", other),
	}
}
