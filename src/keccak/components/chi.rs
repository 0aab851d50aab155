use super::super::State;

pub fn chi(state: &mut State) {
	for y in 0 .. 5 {
		let mut new_row = [0; 5];

		for x in 0 .. 5 {
			let xp1 = (x + 1) % 5;
			let xp2 = (x + 2) % 5;

			new_row[x] = !state[xp1][y] & state[xp2][y];
		}

		for x in 0 .. 5 {
			state[x][y] ^= new_row[x];
		}
	}
}

#[test]
fn test_rows_are_independent() {
	let mut state = [[0; 5]; 5];
	state[2][1] = u64::MAX;

	chi(&mut state);

	// in row 1, lane 0 picks up !B[1] & B[2], everything else stays put
	for x in 0 .. 5 {
		for y in 0 .. 5 {
			let expected = match (x, y) {
				(0, 1) | (2, 1) => u64::MAX,
				_ => 0,
			};

			assert_eq!(state[x][y], expected, "lane ({}, {})", x, y);
		}
	}
}

#[test]
fn test_reads_row_before_writing() {
	let mut state = [[0; 5]; 5];

	for x in 0 .. 5 {
		state[x][4] = 0x0f0f_0f0f_0f0f_0f0f << x;
	}

	let row: [u64; 5] = core::array::from_fn(|x| state[x][4]);

	chi(&mut state);

	for x in 0 .. 5 {
		let expected = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
		assert_eq!(state[x][4], expected);
	}
}
