use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Args;
use glitch_core::{
    with_bottom, with_max_height, with_middle, with_randomization, with_top, Encoder,
    GlitchConfig, GlitchError, GlitchOption, RngHandle,
};

use crate::profile::EncodeProfile;

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Text to glitch. Reads `--input` or stdin when absent.
    #[arg(long, conflicts_with = "input")]
    pub text: Option<String>,
    /// File to glitch.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Write the result here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// JSON profile applied before the flags below.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Skip marks above the characters.
    #[arg(long)]
    pub no_top: bool,
    /// Skip the overlay mark through the characters.
    #[arg(long)]
    pub no_middle: bool,
    /// Skip marks below the characters.
    #[arg(long)]
    pub no_bottom: bool,
    /// Marks per side, per character (default 15).
    #[arg(long, allow_negative_numbers = true)]
    pub max_height: Option<i64>,
    /// Percentage of the max height that may be randomly dropped (default 100).
    #[arg(long, allow_negative_numbers = true)]
    pub randomization: Option<i64>,
    /// Seed for reproducible output; every line draws from its own substream.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl EncodeArgs {
    /// Defaults, then the profile, then explicit flags.
    fn options(&self) -> Result<Vec<GlitchOption>, Box<dyn Error>> {
        let mut options = match &self.config {
            Some(path) => EncodeProfile::load(path)?.to_options()?,
            None => Vec::new(),
        };
        if self.no_top {
            options.push(with_top(false));
        }
        if self.no_middle {
            options.push(with_middle(false));
        }
        if self.no_bottom {
            options.push(with_bottom(false));
        }
        if let Some(height) = self.max_height {
            options.push(with_max_height(height)?);
        }
        if let Some(percent) = self.randomization {
            options.push(with_randomization(percent)?);
        }
        Ok(options)
    }
}

pub fn run(args: &EncodeArgs) -> Result<(), Box<dyn Error>> {
    let config = GlitchConfig::from_options(args.options()?);
    let encoder = Encoder::new(config);
    let input = read_input(args)?;

    let output = match args.seed {
        Some(seed) => encode_seeded(&encoder, &input, seed)?,
        None => encoder.encode_bytes(&input, &mut rand::thread_rng())?,
    };
    tracing::info!(
        input_bytes = input.len(),
        output_bytes = output.len(),
        seeded = args.seed.is_some(),
        "encoded input"
    );

    match &args.output {
        Some(path) => fs::write(path, &output)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&output)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn read_input(args: &EncodeArgs) -> Result<Vec<u8>, Box<dyn Error>> {
    if let Some(text) = &args.text {
        return Ok(text.as_bytes().to_vec());
    }
    if let Some(path) = &args.input {
        return fs::read(path)
            .map_err(|err| format!("failed to read {}: {err}", path.display()).into());
    }
    let mut buf = Vec::new();
    io::stdin().lock().read_to_end(&mut buf)?;
    Ok(buf)
}

/// Encodes line by line so each line's marks depend only on `(seed, line index)`.
///
/// Nothing is returned unless every line decodes.
fn encode_seeded(encoder: &Encoder<'_>, input: &[u8], seed: u64) -> Result<Vec<u8>, GlitchError> {
    let mut out = Vec::with_capacity(input.len());
    for (idx, line) in input.split_inclusive(|b| *b == b'\n').enumerate() {
        let mut rng = RngHandle::for_substream(seed, idx as u64);
        let encoded = encoder.encode_bytes(line, &mut rng).map_err(|err| match err {
            GlitchError::Decode(info) => GlitchError::Decode(info.with_context("line", idx + 1)),
            other => other,
        })?;
        out.extend_from_slice(&encoded);
    }
    Ok(out)
}
