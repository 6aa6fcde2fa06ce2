use serde::{Deserialize, Serialize};

use crate::utils::error::{AugmentError, Result};

/// Byte offset where the numeric payload of a `\tarrival` line begins
/// (tab + `arrival` + space).
const ARRIVAL_VALUE_OFFSET: usize = 9;

/// Tunables for the departure computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartureRules {
    /// Fraction of the arrival distance used as the departure distance.
    pub multiplier: f64,
    /// Lower bound on the computed departure distance.
    pub minimal_departure: f64,
    /// Inert. Carried over from the original map tooling's config block,
    /// where it was defined but never applied to the formula. Changing it
    /// has no effect on output.
    pub offset: f64,
}

impl Default for DepartureRules {
    fn default() -> Self {
        Self {
            multiplier: 0.75,
            minimal_departure: 100.0,
            offset: 150.0,
        }
    }
}

impl DepartureRules {
    /// `max(arrival * multiplier, minimal_departure)`. The `offset` field
    /// does not participate.
    pub fn departure_for(&self, arrival: f64) -> f64 {
        (arrival * self.multiplier).max(self.minimal_departure)
    }
}

/// Prefix classification of one input line. Case-sensitive; the tab is part
/// of the prefix for the indented shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    System,
    Arrival,
    Departure,
    Object,
    Other,
}

pub fn classify(line: &str) -> LineKind {
    if line.starts_with("system") {
        LineKind::System
    } else if line.starts_with("\tarrival") {
        LineKind::Arrival
    } else if line.starts_with("\tdeparture") {
        LineKind::Departure
    } else if line.starts_with("\tobject") {
        LineKind::Object
    } else {
        LineKind::Other
    }
}

/// Per-record scan state, reset at every `system` line.
#[derive(Debug, Clone, Copy, Default)]
struct ScanState {
    arrival: f64,
    departure_written: bool,
}

/// Result of one augmentation pass over the full line sequence.
#[derive(Debug, Clone)]
pub struct AugmentResult {
    pub lines: Vec<String>,
    pub departures_written: usize,
}

/// Splits file content into lines that keep their own terminators, so the
/// output can be rebuilt by plain concatenation. A final line without a
/// trailing newline stays without one.
pub fn split_retaining_newlines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_owned).collect()
}

fn departure_line(value: f64) -> String {
    format!("\tdeparture {:.2}\n", value)
}

/// Single forward pass over the input lines, append-only.
///
/// For every record (a run of lines from one `system` line to the next) exactly
/// one departure line is inserted: right after the record's first `arrival`
/// line, or right before its first `object` line when no arrival came first.
/// Pre-existing `departure` lines are dropped. Everything else is copied
/// through in order.
pub fn augment(lines: &[String], rules: &DepartureRules) -> Result<AugmentResult> {
    let mut out = Vec::with_capacity(lines.len());
    let mut state = ScanState::default();
    let mut departures_written = 0;

    for (idx, line) in lines.iter().enumerate() {
        match classify(line) {
            LineKind::System => {
                state = ScanState::default();
                out.push(line.clone());
            }
            LineKind::Arrival => {
                let payload = line.get(ARRIVAL_VALUE_OFFSET..).unwrap_or("");
                let arrival = payload.trim().parse::<f64>().map_err(|source| {
                    AugmentError::MalformedNumberError {
                        line: idx + 1,
                        content: line.trim_end().to_string(),
                        source,
                    }
                })?;
                state.arrival = arrival;
                out.push(line.clone());
                if !state.departure_written {
                    out.push(departure_line(rules.departure_for(arrival)));
                    state.departure_written = true;
                    departures_written += 1;
                }
            }
            LineKind::Departure => {
                // Stale precomputed value; a fresh one is inserted elsewhere.
            }
            LineKind::Object => {
                if !state.departure_written {
                    // No arrival line seen in this record yet, so arrival is
                    // still 0.0 and the floor value wins.
                    out.push(departure_line(rules.departure_for(state.arrival)));
                    state.departure_written = true;
                    departures_written += 1;
                }
                out.push(line.clone());
            }
            LineKind::Other => {
                out.push(line.clone());
            }
        }
    }

    Ok(AugmentResult {
        lines: out,
        departures_written,
    })
}
