/// The iota constants for rounds 0 through 23 of Keccak-f[1600].
pub const ROUND_CONSTANTS: [u64; 24] = [
	0x0000000000000001, 0x0000000000008082, 0x800000000000808a, 0x8000000080008000,
	0x000000000000808b, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
	0x000000000000008a, 0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
	0x000000008000808b, 0x800000000000008b, 0x8000000000008089, 0x8000000000008003,
	0x8000000000008002, 0x8000000000000080, 0x000000000000800a, 0x800000008000000a,
	0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

// the low bit is the output, the bit shifted out of the top feeds back as 0x71
const fn step_lfsr(state: u8) -> (u8, bool) {
	let lfsr_output = state & 0x01 != 0;
	let mut new_state = state << 1;

	if state & 0x80 != 0 {
		new_state ^= 0x71;
	}

	(new_state, lfsr_output)
}

/// Derives the round constants from the degree-8 LFSR in the Keccak reference.
pub const fn compute_round_constants() -> [u64; 24] {
	let mut lfsr = 0x01;
	let mut out = [0; 24];

	let mut i = 0;

	while i < 24 {
		let mut j = 0;

		while j < 7 {
			let place = (1 << j) - 1;

			let (new_lfsr, lfsr_out) = step_lfsr(lfsr);
			lfsr = new_lfsr;

			if lfsr_out {
				out[i] |= 1 << place;
			}

			j += 1;
		}

		i += 1;
	}

	out
}

#[test]
fn test_lfsr_matches_table() {
	let generated = compute_round_constants();

	for round in 0 .. 24 {
		assert_eq!(generated[round], ROUND_CONSTANTS[round], "round {}", round);
	}
}

#[test]
fn test_constants_only_use_lfsr_positions() {
	let mask = (0 .. 7).fold(0u64, |mask, j| mask | 1 << ((1 << j) - 1));

	for constant in ROUND_CONSTANTS {
		assert_eq!(constant & !mask, 0);
	}
}
