//! Checking digests against a file of known answers.
//!
//! A reference file has one hex digest per line, where line `i` (counting from
//! one) is the SHA3-256 digest of the decimal ASCII string for `i`.

use std::io::BufRead;

use log::{debug, info};

use crate::{sha3_256, Error, DIGEST_BYTES};

/// Renders a digest most significant byte first, in uppercase hex.
pub fn hex_upper(hash: &[u8; DIGEST_BYTES]) -> String {
	hex::encode_upper(hash)
}

/// Parses one line of a reference file into a digest.
pub fn parse_line(line: usize, text: &str) -> Result<[u8; DIGEST_BYTES], Error> {
	let text = text.trim_end_matches(['\r', '\n']);

	if text.is_empty() {
		return Err(Error::MalformedReference {line, reason: "empty hash"});
	}

	let mut out = [0; DIGEST_BYTES];

	hex::decode_to_slice(text, &mut out).map_err(|_| Error::MalformedReference {
		line,
		reason: "not a 64 digit hex string",
	})?;

	Ok(out)
}

/// Checks the digests of `"1"` through `count` against the first `count` lines of `reader`.
pub fn verify_decimal_sequence(reader: impl BufRead, count: usize) -> Result<(), Error> {
	let mut lines = reader.lines();

	for i in 1 ..= count {
		let text = match lines.next() {
			Some(text) => text?,
			None => return Err(Error::MalformedReference {line: i, reason: "missing line"}),
		};

		let expected = parse_line(i, &text)?;
		let computed = sha3_256(i.to_string().as_bytes());

		if computed != expected {
			return Err(Error::ReferenceMismatch {
				line: i,
				expected: hex_upper(&expected),
				computed: hex_upper(&computed),
			});
		}

		debug!("line {} matches", i);
	}

	info!("all {} reference hashes match", count);

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;

	const ONE: &str = "67B176705B46206614219F47A05AEE7AE6A3EDBE850BBBE214C536B989AEA4D2";
	const TWO: &str = "b1b1bd1ed240b1496c81ccf19ceccf2af6fd24fac10ae42023628abbe2687310";

	#[test]
	fn test_hex_upper() {
		assert_eq!(hex_upper(&sha3_256(b"1")), ONE);
	}

	#[test]
	fn test_accepts_either_case_and_crlf() {
		let file = format!("{}\r\n{}\n", ONE, TWO);
		verify_decimal_sequence(Cursor::new(file), 2).unwrap();
	}

	#[test]
	fn test_reports_mismatch_line() {
		let file = format!("{}\n{}\n", ONE, ONE);

		match verify_decimal_sequence(Cursor::new(file), 2) {
			Err(Error::ReferenceMismatch {line: 2, expected, computed}) => {
				assert_eq!(expected, ONE);
				assert_eq!(computed, TWO.to_uppercase());
			}
			other => panic!("unexpected result: {:?}", other),
		}
	}

	#[test]
	fn test_rejects_empty_and_missing_lines() {
		let file = format!("{}\n\n", ONE);

		assert!(matches!(
			verify_decimal_sequence(Cursor::new(file), 2),
			Err(Error::MalformedReference {line: 2, ..}),
		));

		assert!(matches!(
			verify_decimal_sequence(Cursor::new(ONE), 2),
			Err(Error::MalformedReference {line: 2, reason: "missing line"}),
		));
	}

	#[test]
	fn test_rejects_short_hash() {
		assert!(matches!(
			parse_line(7, "ABCD"),
			Err(Error::MalformedReference {line: 7, ..}),
		));
	}
}
