use super::super::State;

pub fn pi(state: &mut State) {
	let mut new_state = [[0; 5]; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			let new_x = y;
			let new_y = (2 * x + 3 * y) % 5;

			new_state[new_x][new_y] = state[x][y];
		}
	}

	*state = new_state;
}

#[test]
fn test_relocates_every_lane_once() {
	let mut state = [[0; 5]; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			state[x][y] = (x + 5 * y) as u64;
		}
	}

	pi(&mut state);

	let mut seen = [false; 25];

	for column in state {
		for lane in column {
			assert!(!seen[lane as usize]);
			seen[lane as usize] = true;
		}
	}

	// (1, 0) lands on (0, 2) and (0, 1) lands on (1, 3)
	assert_eq!(state[0][0], 0);
	assert_eq!(state[0][2], 1);
	assert_eq!(state[1][3], 5);
}

#[test]
fn test_period_is_twenty_four() {
	let mut state = [[0; 5]; 5];
	state[1][0] = 1;

	let start = state;

	for step in 1 ..= 24 {
		pi(&mut state);
		assert_eq!(state == start, step == 24, "step {}", step);
	}
}
