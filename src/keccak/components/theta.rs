use super::super::State;

pub fn theta(state: &mut State) {
	let mut parities = [0u64; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			parities[x] ^= state[x][y];
		}
	}

	for x in 0 .. 5 {
		let xm1 = (x + 4) % 5;
		let xp1 = (x + 1) % 5;

		let crossed_parities = parities[xm1] ^ parities[xp1].rotate_left(1);

		for y in 0 .. 5 {
			state[x][y] ^= crossed_parities;
		}
	}
}

#[test]
fn test_single_bit_spreads_to_neighbour_columns() {
	let mut state = [[0; 5]; 5];
	state[2][3] = 1;

	theta(&mut state);

	for y in 0 .. 5 {
		// column 3 sees C[2] directly, column 1 sees it rotated by one
		assert_eq!(state[1][y], 2);
		assert_eq!(state[3][y], 1);
		assert_eq!(state[0][y], 0);
		assert_eq!(state[4][y], 0);
	}

	// the source lane is left as it was, since column 2's own parity doesn't feed D[2]
	assert_eq!(state[2][3], 1);
	assert_eq!(state[2][0], 0);
}

#[test]
fn test_even_columns_are_fixed() {
	let mut state = [[0; 5]; 5];

	for x in 0 .. 5 {
		state[x][0] = 0xdead_beef_0000_0000 >> x;
		state[x][4] = 0xdead_beef_0000_0000 >> x;
	}

	let before = state;
	theta(&mut state);

	assert_eq!(state, before);
}
