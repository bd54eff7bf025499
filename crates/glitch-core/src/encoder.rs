//! The glitch transform: every base character is followed by random marks.
//!
//! Per character the encoder emits the base, then (when enabled) one middle
//! mark, then a run of top marks, then a run of bottom marks. Random draws
//! happen in exactly that order, so a seeded rng replays the same output.

use std::fmt;

use rand::Rng;

use crate::config::GlitchConfig;
use crate::errors::GlitchError;
use crate::marks::{marks, MarkTables, Placement};

/// Applies a [`GlitchConfig`] to text using a set of [`MarkTables`].
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'t> {
    config: GlitchConfig,
    tables: &'t MarkTables,
}

impl Encoder<'static> {
    /// Creates an encoder over the process-wide tables.
    pub fn new(config: GlitchConfig) -> Self {
        Self::with_tables(config, marks())
    }
}

impl<'t> Encoder<'t> {
    /// Creates an encoder over caller-provided tables.
    pub fn with_tables(config: GlitchConfig, tables: &'t MarkTables) -> Self {
        Self { config, tables }
    }

    /// Configuration this encoder applies.
    pub fn config(&self) -> &GlitchConfig {
        &self.config
    }

    /// Transforms a sequence of code points.
    pub fn encode_chars<I, R>(&self, input: I, rng: &mut R) -> Vec<char>
    where
        I: IntoIterator<Item = char>,
        R: Rng + ?Sized,
    {
        let mut out = Vec::new();
        for base in input {
            self.decorate(base, rng, &mut out);
        }
        out
    }

    /// Transforms a decoded string.
    pub fn encode_text<R>(&self, input: &str, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        let mut out = String::with_capacity(input.len());
        for base in input.chars() {
            self.decorate(base, rng, &mut out);
        }
        tracing::trace!(
            input_bytes = input.len(),
            output_bytes = out.len(),
            "encoded text"
        );
        out
    }

    /// Transforms UTF-8 bytes.
    ///
    /// Invalid UTF-8 anywhere in `input` fails the whole call before any
    /// output is produced.
    pub fn encode_bytes<R>(&self, input: &[u8], rng: &mut R) -> Result<Vec<u8>, GlitchError>
    where
        R: Rng + ?Sized,
    {
        let text = std::str::from_utf8(input).map_err(|err| {
            tracing::debug!(
                valid_up_to = err.valid_up_to(),
                input_len = input.len(),
                "rejected non UTF-8 input"
            );
            GlitchError::invalid_utf8(err, input.len())
        })?;
        Ok(self.encode_text(text, rng).into_bytes())
    }

    /// Streams the transform of `input` into any [`fmt::Write`] sink.
    ///
    /// Stops at the first write error; the sink may then hold a prefix.
    pub fn encode_into<R, W>(&self, input: &str, rng: &mut R, out: &mut W) -> fmt::Result
    where
        R: Rng + ?Sized,
        W: fmt::Write + ?Sized,
    {
        // Heights may reach u32::MAX, so the reservation is only a hint.
        let hint = (self.config.max_height() as usize).saturating_mul(2).saturating_add(2);
        let mut glyph = Vec::with_capacity(hint.min(64));
        for base in input.chars() {
            glyph.clear();
            self.decorate(base, rng, &mut glyph);
            for ch in glyph.iter().copied() {
                out.write_char(ch)?;
            }
        }
        Ok(())
    }

    /// Draws how many marks go on one side of a character.
    ///
    /// Returns `max_height - floor(r * fraction * max_height)` for a fresh
    /// uniform `r` in `[0, 1)`.
    pub fn marks_per_side<R>(&self, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        let r: f64 = rng.gen();
        let shaved = (r * self.config.randomization_span()).floor() as u32;
        self.config.max_height().saturating_sub(shaved) as usize
    }

    fn decorate<R, E>(&self, base: char, rng: &mut R, out: &mut E)
    where
        R: Rng + ?Sized,
        E: Extend<char>,
    {
        out.extend(Some(base));
        // More than one overlay mark renders as a smear.
        if self.config.include_middle() {
            out.extend(Some(self.pick(Placement::Middle, rng)));
        }
        if self.config.include_top() {
            self.push_run(Placement::Top, rng, out);
        }
        if self.config.include_bottom() {
            self.push_run(Placement::Bottom, rng, out);
        }
    }

    fn push_run<R, E>(&self, placement: Placement, rng: &mut R, out: &mut E)
    where
        R: Rng + ?Sized,
        E: Extend<char>,
    {
        let count = self.marks_per_side(rng);
        out.extend((0..count).map(|_| self.pick(placement, rng)));
    }

    fn pick<R>(&self, placement: Placement, rng: &mut R) -> char
    where
        R: Rng + ?Sized,
    {
        let table = self.tables.for_placement(placement);
        table[rng.gen_range(0..table.len())]
    }
}
