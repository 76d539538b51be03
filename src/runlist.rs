// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Runlist notation: comma separated runs such as `1-3,5,7-9`.
//!
//! A run is either a single integer or an inclusive `lower-upper` pair. Negative bounds keep
//! their sign, so `-5--2` is the run from -5 to -2. The empty set is written `-`.
//!
//! Parsing is strict: whitespace around numbers and separators is ignored, but whitespace
//! between two digits, empty tokens, dangling hyphens, tokens with more than two numbers and
//! pairs in decreasing order are all rejected.

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

use crate::error::IntSpanError;
use crate::span::IntSpan;

/// Error parsing a runlist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunlistError {
    /// A part of a token is not a decimal `i32`.
    #[error("cannot parse '{part}' in '{token}' as an integer: {reason}")]
    ParseInt {
        /// Token being parsed.
        token: String,
        /// The numeric part where parsing failed.
        part: String,
        /// What went wrong.
        reason: String,
    },

    /// Two commas in a row, or a leading or trailing comma.
    #[error("empty run in '{runlist}'")]
    EmptyToken {
        /// Whitespace-free runlist.
        runlist: String,
    },

    /// Whitespace between two digits, as in `1 2`.
    #[error("whitespace inside a number in '{runlist}'")]
    SplitNumber {
        /// Runlist as given.
        runlist: String,
    },

    /// A token such as `1-2-3`.
    #[error("'{token}' has more than two numbers")]
    TooManyParts {
        /// Token being parsed.
        token: String,
    },

    /// A pair whose lower bound exceeds its upper bound.
    #[error("bad order in '{token}': {lower} is greater than {upper}")]
    BadOrder {
        /// Token being parsed.
        token: String,
        /// Parsed lower bound.
        lower: i32,
        /// Parsed upper bound.
        upper: i32,
    },
}

/// Parses a runlist into inclusive `(lower, upper)` pairs, in the order they are written.
///
/// Bounds are not checked against the infinity sentinels here; that happens when the pairs are
/// added to a set.
pub fn parse(runlist: &str) -> Result<Vec<(i32, i32)>, RunlistError> {
    if splits_number(runlist) {
        log::debug!("rejected runlist {runlist:?}: whitespace inside a number");
        return Err(RunlistError::SplitNumber {
            runlist: runlist.to_string(),
        });
    }
    let compact: String = runlist.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() || compact == IntSpan::EMPTY_RUNLIST {
        return Ok(Vec::new());
    }

    let ranges = compact
        .split(',')
        .map(|token| parse_token(token, &compact))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| {
            log::debug!("rejected runlist {runlist:?}: {err}");
            err
        })?;
    log::trace!("parsed {} runs from runlist", ranges.len());
    Ok(ranges)
}

/// Whether some whitespace sits between two digits.
fn splits_number(runlist: &str) -> bool {
    let mut after_digit = false;
    let mut gap = false;
    for c in runlist.chars() {
        if c.is_whitespace() {
            gap = after_digit;
            continue;
        }
        let digit = c.is_ascii_digit();
        if digit && gap {
            return true;
        }
        after_digit = digit;
        gap = false;
    }
    false
}

fn parse_token(token: &str, runlist: &str) -> Result<(i32, i32), RunlistError> {
    if token.is_empty() {
        return Err(RunlistError::EmptyToken {
            runlist: runlist.to_string(),
        });
    }

    // The separator is the first hyphen that is not the sign of the lower bound.
    let sign = usize::from(token.starts_with('-'));
    let Some(split) = token[sign..].find('-').map(|i| sign + i) else {
        let value = parse_part(token, token)?;
        return Ok((value, value));
    };

    let (lower, upper) = (&token[..split], &token[split + 1..]);
    let upper_sign = usize::from(upper.starts_with('-'));
    if upper[upper_sign..].contains('-') {
        return Err(RunlistError::TooManyParts {
            token: token.to_string(),
        });
    }

    let lower = parse_part(token, lower)?;
    let upper = parse_part(token, upper)?;
    if lower > upper {
        return Err(RunlistError::BadOrder {
            token: token.to_string(),
            lower,
            upper,
        });
    }
    Ok((lower, upper))
}

fn parse_part(token: &str, part: &str) -> Result<i32, RunlistError> {
    let err = |reason: String| RunlistError::ParseInt {
        token: token.to_string(),
        part: part.to_string(),
        reason,
    };
    let digits = part.strip_prefix('-').unwrap_or(part);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err("expected digits with an optional leading '-'".to_string()));
    }
    part.parse::<i32>().map_err(|e| err(e.to_string()))
}

// REPORT ######################################################################

impl Display for IntSpan {
    /// Writes the canonical runlist: ascending runs, singletons as one number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(IntSpan::EMPTY_RUNLIST);
        }
        for (idx, (lower, upper)) in self.runs().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            if lower == upper {
                write!(f, "{lower}")?;
            } else {
                write!(f, "{lower}-{upper}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for IntSpan {
    type Err = IntSpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = IntSpan::new();
        set.add_runlist(s)?;
        Ok(set)
    }
}

// SERIALIZATION ###############################################################

#[cfg(feature = "serde")]
impl serde::Serialize for IntSpan {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntSpan {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}
