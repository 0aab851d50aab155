#![cfg_attr(not(feature = "std"), no_std)]

//! SHA3-256 computed with a straightforward Keccak-f[1600] sponge.
//!
//! ```
//! let hash = keccak_digest::sha3_256(b"abc");
//! assert_eq!(hash[0], 0x3a);
//! ```

// to prevent broken links when building documentation in #![no_std] mode
#[cfg(all(not(feature = "std"), doc))]
extern crate std;

pub mod keccak;

#[cfg(feature = "std")]
pub mod reference;

mod error;

pub use error::Error;

#[doc(inline)]
pub use keccak::sha3::{digest, sha3_256, DIGEST_BYTES};
