//! The Keccak-f[1600] permutation and the SHA3-256 sponge built on it.

use core::fmt;

use log::{log_enabled, trace, Level};

mod round_constants;

pub use round_constants::{compute_round_constants, ROUND_CONSTANTS};

mod components {
	pub mod chi;
	pub mod iota;
	pub mod pi;
	pub mod rho;
	pub mod theta;
}

use components::chi::chi;
use components::iota::iota;
use components::pi::pi;
use components::rho::rho;
use components::theta::theta;

pub mod sha3;

/// The 1600-bit permutation state as 25 lanes, indexed `state[x][y]`.
pub type State = [[u64; 5]; 5];

/// Rounds in one application of Keccak-f[1600] (12 + 2 * log2(64)).
pub const NUM_ROUNDS: usize = 24;

/// Applies a single theta, rho, pi, chi, iota round to `state`.
pub fn round(state: &mut State, round_constant: u64) {
	theta(state);
	trace_step("theta", state);

	rho(state);
	trace_step("rho", state);

	pi(state);
	trace_step("pi", state);

	chi(state);
	trace_step("chi", state);

	iota(state, round_constant);
	trace_step("iota", state);
}

/// Applies all 24 rounds of Keccak-f[1600] to `state`, in order.
pub fn keccak_f(state: &mut State) {
	for (round_number, &round_constant) in ROUND_CONSTANTS.iter().enumerate() {
		trace!("round {}", round_number);
		round(state, round_constant);
	}
}

fn trace_step(step: &str, state: &State) {
	if log_enabled!(Level::Trace) {
		trace!("after {}:\n{}", step, Lanes(state));
	}
}

// prints the state one x-column per line, like `A[x][0] .. A[x][4]`
struct Lanes<'a>(&'a State);

impl fmt::Display for Lanes<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (x, column) in self.0.iter().enumerate() {
			for (y, lane) in column.iter().enumerate() {
				write!(f, "A[{}][{}] = {:016x} ", x, y, lane)?;
			}

			if x != 4 {
				writeln!(f)?;
			}
		}

		Ok(())
	}
}
