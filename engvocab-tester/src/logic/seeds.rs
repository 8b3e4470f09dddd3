use anyhow::{Context, Result, bail};

/// Seed used when the command line names none.
pub const DEFAULT_SEED: u64 = 1337;

/// Widest `a..b` range accepted on the command line.
const MAX_RANGE_LEN: u64 = 10_000;

/// Resolve CLI seed tokens into concrete seeds.
///
/// Accepts decimal integers (negative values use their magnitude), `0x`
/// hexadecimal and half-open `a..b` ranges. Duplicates are dropped, keeping
/// the first occurrence.
///
/// # Errors
///
/// Returns an error for tokens that are none of the above, or for ranges
/// that are empty or too wide.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<u64>> {
    let mut seeds: Vec<u64> = Vec::new();

    for token in tokens {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        if let Some((start, end)) = token.split_once("..") {
            let start = parse_seed(start)?;
            let end = parse_seed(end)?;
            if end <= start {
                bail!("Empty seed range: {token}");
            }
            if end - start > MAX_RANGE_LEN {
                bail!("Seed range {token} exceeds {MAX_RANGE_LEN} seeds");
            }
            push_unique(&mut seeds, start..end);
            continue;
        }

        push_unique(&mut seeds, [parse_seed(token)?]);
    }

    if seeds.is_empty() {
        seeds.push(DEFAULT_SEED);
    }

    Ok(seeds)
}

fn parse_seed(token: &str) -> Result<u64> {
    let token = token.trim();
    if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        return u64::from_str_radix(hex, 16)
            .with_context(|| format!("Unrecognized seed token: {token}"));
    }

    if let Ok(value) = token.parse::<i64>() {
        return Ok(value.unsigned_abs());
    }

    token
        .parse::<u64>()
        .with_context(|| format!("Unrecognized seed token: {token}"))
}

fn push_unique(seeds: &mut Vec<u64>, values: impl IntoIterator<Item = u64>) {
    for value in values {
        if !seeds.contains(&value) {
            seeds.push(value);
        }
    }
}
