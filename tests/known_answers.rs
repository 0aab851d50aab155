use std::fs::File;
use std::io::BufReader;

use keccak_digest::reference::{hex_upper, verify_decimal_sequence};
use keccak_digest::{digest, sha3_256};
use pretty_assertions::assert_eq;
use sha3::{Digest, Sha3_256};

fn hex_hash(message: &[u8]) -> String {
	hex::encode(sha3_256(message))
}

#[test]
fn test_debug_message() {
	assert_eq!(
		hex_upper(&sha3_256(b"debug test")),
		"7492E21E786B7E82DB14DDF7B609F358777CBC5272449C95D1E75E614933788C",
	);
}

#[test]
fn test_known_vectors() {
	let vectors: [(&[u8], &str); 3] = [
		(b"", "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"),
		(b"abc", "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"),
		(
			b"The quick brown fox jumps over the lazy dog",
			"69070dda01975c8c120c3aada1b282394e7f032fa9cf32f4cb2259a0897dfc04",
		),
	];

	for (message, expected) in vectors {
		assert_eq!(hex_hash(message), expected, "message {:?}", message);
	}
}

#[test]
fn test_rate_boundaries() {
	// one byte short of a block, exactly one block, one byte over, exactly two blocks
	let vectors = [
		(135, "7d080d7ba978a75c8a7d1f9be566c859084509c9c2b4928435c225d5777d98e3"),
		(136, "e772c9cf9eb9c991cdfcf125001b454fdbc0a95f188d1b4c844aa032ad6e075e"),
		(137, "9ed57188470a83b758cd71c00c6cc3beb984b36a6c35864b4e53017b24cf5699"),
		(272, "5d86a8cc4aa8f0d98146a747281865a625a19f9580eef32e38905920bc532c5c"),
	];

	for (len, expected) in vectors {
		assert_eq!(hex_hash(&vec![0; len]), expected, "{} zero bytes", len);
	}
}

#[test]
fn test_repeated_byte_message() {
	// the 1600-bit NIST sample message, 0xa3 repeated 200 times
	assert_eq!(
		hex_hash(&[0xa3; 200]),
		"79f38adec5c20307a98ef76e8324afbfd46cfd81b22e3973c65fa1bd9de31787",
	);
}

#[test]
fn test_matches_rustcrypto() {
	let message: Vec<u8> = (0 .. 1000u32).map(|i| (i * 31 + 7) as u8).collect();

	for len in 0 ..= message.len() {
		let expected = Sha3_256::digest(&message[.. len]);
		assert_eq!(&sha3_256(&message[.. len])[..], expected.as_slice(), "length {}", len);
	}
}

#[test]
fn test_digest_entry_point() {
	let message = b"debug test, with a tail that is not hashed";

	assert_eq!(digest(message, 10).unwrap(), sha3_256(b"debug test"));
	assert!(digest(message, message.len() + 1).is_err());
}

#[test]
fn test_reference_file() {
	let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/hashes");
	let file = File::open(path).unwrap();

	verify_decimal_sequence(BufReader::new(file), 1000).unwrap();
}
