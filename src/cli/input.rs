//! Reads conversion input files.
//!
//! ```text
//! EUR;550;JPY
//! 6
//! AUD;CHF;0.9661
//! JPY;KRW;13.1151
//! ...
//! ```
//!
//! The first line is the request, the second the number of rate lines that
//! follow. Anything after the declared rate lines is ignored.

use crate::core::{ConversionError, ConversionRequest, RateDeclaration};
use anyhow::{Context, Result, anyhow, bail};
use std::fs;
use std::path::Path;
use tracing::debug;

const SEPARATOR: char = ';';

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionInput {
    pub request: ConversionRequest,
    pub rates: Vec<RateDeclaration>,
    /// Rate line count declared on line 2.
    pub declared_rates: usize,
}

pub fn load_input<P: AsRef<Path>>(path: P) -> Result<ConversionInput> {
    let text = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read input file: {}", path.as_ref().display()))?;
    parse_input(&text)
        .with_context(|| format!("Failed to parse input file: {}", path.as_ref().display()))
}

pub fn parse_input(text: &str) -> Result<ConversionInput> {
    let mut lines = text.lines().map(str::trim);

    let request_line = lines.next().ok_or_else(|| anyhow!("Input is empty"))?;
    let request = parse_request(request_line).context("Invalid request on line 1")?;

    let count_line = lines
        .next()
        .ok_or_else(|| anyhow!("Missing rate count on line 2"))?;
    let declared_rates: usize = count_line
        .parse()
        .with_context(|| format!("Invalid rate count on line 2: {count_line:?}"))?;

    let rates = lines
        .take(declared_rates)
        .enumerate()
        .map(|(index, line)| parse_rate(index + 1, line))
        .collect::<Result<Vec<_>, _>>()?;

    if rates.len() < declared_rates {
        debug!(
            declared = declared_rates,
            found = rates.len(),
            "Fewer rate lines than declared"
        );
    }

    Ok(ConversionInput {
        request,
        rates,
        declared_rates,
    })
}

fn parse_request(line: &str) -> Result<ConversionRequest> {
    let fields: Vec<&str> = line.split(SEPARATOR).map(str::trim).collect();
    let [source, amount, destination] = fields.as_slice() else {
        bail!("Expected FROM;AMOUNT;TO, got {line:?}");
    };
    if source.is_empty() || destination.is_empty() {
        bail!("Missing currency in {line:?}");
    }
    let amount: f64 = amount
        .parse()
        .with_context(|| format!("Amount {amount:?} is not a number"))?;
    Ok(ConversionRequest::new(*source, amount, *destination)?)
}

fn parse_rate(position: usize, line: &str) -> Result<RateDeclaration, ConversionError> {
    let mut fields = line.split(SEPARATOR).map(str::trim);
    let from = fields.next().unwrap_or_default();
    let to = fields.next().unwrap_or_default();
    let raw_rate = fields.next().unwrap_or_default();

    if from.is_empty() {
        debug!(position, "Blank rate line");
        return Ok(RateDeclaration::new("", to, 0.0));
    }

    let rate = raw_rate.parse::<f64>().map_err(|_| {
        ConversionError::malformed(position, format!("rate {raw_rate:?} is not a number"))
    })?;
    Ok(RateDeclaration::new(from, to, rate))
}
