use super::super::State;

/// Left-rotation applied to each lane, indexed `[x][y]`.
pub const ROTATION_OFFSETS: [[u32; 5]; 5] = [
	[0, 36, 3, 41, 18],
	[1, 44, 10, 45, 2],
	[62, 6, 43, 15, 61],
	[28, 55, 25, 21, 56],
	[27, 20, 39, 8, 14],
];

// walks (x, y) -> (y, 2x + 3y) from (1, 0), rotating the t-th lane visited by (t + 1)(t + 2) / 2
#[cfg(test)]
const fn compute_rotation_offsets() -> [[u32; 5]; 5] {
	let mut out = [[0; 5]; 5];
	let mut rotation_amount = 0;

	let mut x = 1;
	let mut y = 0;

	let mut t = 0;

	while t < 24 {
		rotation_amount += t + 1;
		out[x][y] = (rotation_amount % 64) as u32;

		let new_x = y;
		let new_y = (2 * x + 3 * y) % 5;

		x = new_x;
		y = new_y;

		t += 1;
	}

	out
}

pub fn rho(state: &mut State) {
	for x in 0 .. 5 {
		for y in 0 .. 5 {
			state[x][y] = state[x][y].rotate_left(ROTATION_OFFSETS[x][y]);
		}
	}
}

#[test]
fn test_offsets_match_triangular_numbers() {
	assert_eq!(compute_rotation_offsets(), ROTATION_OFFSETS);
}

#[test]
fn test_rotates_by_offset() {
	let mut state = [[1; 5]; 5];
	rho(&mut state);

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			assert_eq!(state[x][y], 1 << ROTATION_OFFSETS[x][y]);
		}
	}

	// the origin lane is never rotated
	assert_eq!(state[0][0], 1);
}
