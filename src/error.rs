use thiserror::Error;

/// Everything that can go wrong when asking for a digest.
#[derive(Debug, Error)]
pub enum Error {
	#[error("requested {length} bytes but the message only holds {available}")]
	LengthOutOfBounds {
		length: usize,
		available: usize,
	},

	#[cfg(feature = "std")]
	#[error("reference line {line} is malformed: {reason}")]
	MalformedReference {
		line: usize,
		reason: &'static str,
	},

	#[cfg(feature = "std")]
	#[error("hash mismatch at line {line} (expected {expected}, computed {computed})")]
	ReferenceMismatch {
		line: usize,
		expected: String,
		computed: String,
	},

	#[cfg(feature = "std")]
	#[error("cannot read reference hashes")]
	Io(#[from] std::io::Error),
}
