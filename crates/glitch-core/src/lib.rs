#![deny(missing_docs)]

//! Zalgo-style glitch text: stacks combining marks above, through and below
//! every character of the input.
//!
//! ```
//! use glitch_core::{encode_text, with_max_height, with_randomization};
//!
//! let options = [with_max_height(1).unwrap(), with_randomization(0).unwrap()];
//! let glitched = encode_text("ab", options);
//! assert_eq!(glitched.chars().count(), 8);
//! ```

pub mod config;
pub mod encoder;
pub mod errors;
pub mod marks;
pub mod rng;

pub use config::{
    with_bottom, with_max_height, with_middle, with_randomization, with_top, GlitchConfig,
    GlitchOption, DEFAULT_MAX_HEIGHT, DEFAULT_RANDOMIZATION_PERCENT,
};
pub use encoder::Encoder;
pub use errors::{ErrorInfo, GlitchError};
pub use marks::{marks, MarkTables, Placement};
pub use rng::{derive_substream_seed, RngHandle};

use rand::Rng;

/// Glitches UTF-8 bytes with the thread-local rng.
///
/// Defaults are top, middle and bottom marks, a max height of 15 and 100%
/// randomization, unless modified by `options`.
pub fn encode<I>(input: &[u8], options: I) -> Result<Vec<u8>, GlitchError>
where
    I: IntoIterator<Item = GlitchOption>,
{
    encode_with_rng(input, options, &mut rand::thread_rng())
}

/// Glitches text with the thread-local rng. See [`encode`] for the defaults.
pub fn encode_text<I>(input: &str, options: I) -> String
where
    I: IntoIterator<Item = GlitchOption>,
{
    encode_text_with_rng(input, options, &mut rand::thread_rng())
}

/// Same as [`encode`], drawing from `rng`.
pub fn encode_with_rng<I, R>(
    input: &[u8],
    options: I,
    rng: &mut R,
) -> Result<Vec<u8>, GlitchError>
where
    I: IntoIterator<Item = GlitchOption>,
    R: Rng + ?Sized,
{
    Encoder::new(GlitchConfig::from_options(options)).encode_bytes(input, rng)
}

/// Same as [`encode_text`], drawing from `rng`.
pub fn encode_text_with_rng<I, R>(input: &str, options: I, rng: &mut R) -> String
where
    I: IntoIterator<Item = GlitchOption>,
    R: Rng + ?Sized,
{
    Encoder::new(GlitchConfig::from_options(options)).encode_text(input, rng)
}
