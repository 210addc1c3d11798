//! One-time password generation and the short-lived code store
//!
//! Codes live in the store only until their deadline; the store treats an
//! expired entry as absent whether or not it has been swept yet.

mod store;

pub use store::{CodeStore, MemoryCodeStore};

use rand::Rng;

pub const OTP_MIN: u32 = 1000;
pub const OTP_MAX: u32 = 9999;

/// Draws a 4-digit code uniformly from `[1000, 9999]`.
pub fn generate_otp() -> u32 {
    rand::thread_rng().gen_range(OTP_MIN..=OTP_MAX)
}
