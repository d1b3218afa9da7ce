//! Parser for JSON structural descriptions

mod description;

pub use description::{InsulationEntry, LayerDescription, MarkedInsulation, ARMOURING_DEFAULT_THICKNESS};

use tracing::debug;

use crate::error::ParseError;
use crate::layout::{Process, StructuralConfig};

/// Parse a JSON structural description into the layout input
pub fn parse(source: &str) -> Result<StructuralConfig, ParseError> {
    let description: LayerDescription = serde_json::from_str(source)?;
    let process = parse_process_name(description.process_name.as_deref())?;
    debug!(process = %process, drawtype = ?description.drawtype, "parsed description");
    Ok(description.into_structure(process))
}

/// Validate a `processName` value
pub fn parse_process_name(name: Option<&str>) -> Result<Process, ParseError> {
    let name = name.ok_or(ParseError::MissingProcessName)?;
    Process::from_name(name).ok_or_else(|| {
        let expected: Vec<String> = Process::ALL.iter().map(|p| p.name().to_string()).collect();
        ParseError::InvalidProcessName {
            name: name.to_string(),
            suggestion: find_similar(&expected, name, 2),
            expected,
        }
    })
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut dp = vec![vec![0usize; n + 1]; m + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        dp[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    dp[m][n]
}

/// Closest candidate within a maximum edit distance, ignoring case
fn find_similar(candidates: &[String], target: &str, max_distance: usize) -> Option<String> {
    let target = target.to_ascii_lowercase();
    candidates
        .iter()
        .map(|name| (name, levenshtein_distance(&name.to_ascii_lowercase(), &target)))
        .filter(|(_, dist)| *dist <= max_distance)
        .min_by_key(|(_, dist)| *dist)
        .map(|(name, _)| name.clone())
}
