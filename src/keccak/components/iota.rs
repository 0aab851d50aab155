use super::super::State;

pub fn iota(state: &mut State, round_constant: u64) {
	state[0][0] ^= round_constant;
}

#[test]
fn test_only_touches_origin_lane() {
	let mut state = [[u64::MAX; 5]; 5];
	iota(&mut state, 0x8000_0000_0000_808a);

	assert_eq!(state[0][0], !0x8000_0000_0000_808a);

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			if (x, y) != (0, 0) {
				assert_eq!(state[x][y], u64::MAX);
			}
		}
	}
}
