//! Line-oriented reconstruction of the requirements table.
//!
//! A single [`ScanState`] walks every page of extracted text in order.
//! Capture opens at the region marker, rows open on identifier+version
//! lines, continuation lines join onto the open row's name, and a
//! boundary heading ends capture for the rest of the page.

pub mod config;

pub use config::ScanConfig;

use serde::{Deserialize, Serialize};

use crate::events::ScanEvent;
use crate::extraction::PageText;
use crate::model::{RequirementRecord, RequirementsTable};

/// Result of scanning one document.
///
/// `table` is `None` when no rows matched anywhere — an explicit
/// "nothing found" signal, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub table: Option<RequirementsTable>,
    pub events: Vec<ScanEvent>,
}

/// Named view of the scanner's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    /// Before the region marker; lines are discarded.
    Seeking,
    /// Inside the table region with no open row.
    Capturing,
    /// Inside the table region with a row awaiting continuation lines.
    RowOpen,
}

/// What the caller should do after feeding a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFlow {
    Continue,
    /// A boundary line ended capture; skip the rest of the page.
    EndOfRegion,
}

/// Parsing state for one extraction call.
///
/// Created fresh per call, mutated line by line, converted into the
/// returned [`ScanOutcome`] by [`ScanState::finish`].
#[derive(Debug, Default)]
pub struct ScanState {
    capturing: bool,
    pending: Option<RequirementRecord>,
    rows: Vec<RequirementRecord>,
    events: Vec<ScanEvent>,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ScanPhase {
        match (self.capturing, &self.pending) {
            (false, _) => ScanPhase::Seeking,
            (true, None) => ScanPhase::Capturing,
            (true, Some(_)) => ScanPhase::RowOpen,
        }
    }

    /// Committed rows so far, in first-seen order.
    pub fn records(&self) -> &[RequirementRecord] {
        &self.rows
    }

    /// Feed one line of page text through the state machine.
    pub fn push_line(&mut self, config: &ScanConfig, page: usize, line: &str) -> LineFlow {
        let line = line.trim();
        if line.is_empty() {
            return LineFlow::Continue;
        }

        if !self.capturing {
            if config.region_marker.is_match(line) {
                self.capturing = true;
                self.events.push(ScanEvent::RegionEntered { page });
            }
            // The marker line itself is consumed; earlier lines are discarded.
            return LineFlow::Continue;
        }

        if config.section_boundary.is_match(line) {
            // Capture stops, the rest of the page is not examined. The
            // open row stays pending; a later row start, page flush or
            // the final flush commits it.
            self.capturing = false;
            self.events.push(ScanEvent::RegionExited { page });
            return LineFlow::EndOfRegion;
        }

        if config.row_start.is_match(line) {
            match config.row_capture.captures(line) {
                Some(caps) => {
                    self.commit_pending();
                    self.pending = Some(RequirementRecord {
                        identifier: format!("{} v{}", &caps[1], &caps[2]),
                        name: caps[3].trim().to_string(),
                    });
                }
                None => {
                    // Irregular formatting: keep the text on the open row
                    // rather than dropping it.
                    self.events.push(ScanEvent::RowPatternMismatch {
                        page,
                        line: line.to_string(),
                    });
                    self.append_continuation(line);
                }
            }
            return LineFlow::Continue;
        }

        self.append_continuation(line);
        LineFlow::Continue
    }

    /// Record that a page yielded no text.
    pub fn note_missing_page(&mut self, page: usize) {
        self.events.push(ScanEvent::PageTextMissing { page });
    }

    /// Flush the open row at a page boundary.
    ///
    /// The open row is committed at every page end while capturing, so
    /// a row whose continuation crosses the page break is split into
    /// two records. Known limitation, kept as documented behavior: it
    /// guarantees no row is lost when capture later ends before another
    /// row start appears.
    pub fn end_page(&mut self, _page: usize) {
        if self.capturing {
            self.commit_pending();
        }
    }

    /// Commit any remaining row and convert into the outcome.
    pub fn finish(mut self) -> ScanOutcome {
        self.commit_pending();
        let table = if self.rows.is_empty() {
            None
        } else {
            Some(RequirementsTable { rows: self.rows })
        };
        ScanOutcome {
            table,
            events: self.events,
        }
    }

    fn commit_pending(&mut self) {
        if let Some(row) = self.pending.take() {
            self.rows.push(row);
        }
    }

    fn append_continuation(&mut self, line: &str) {
        if let Some(pending) = self.pending.as_mut() {
            if pending.name.is_empty() {
                pending.name = line.to_string();
            } else {
                pending.name.push(' ');
                pending.name.push_str(line);
            }
        }
        // With no open row the line belongs to nothing and is discarded.
    }
}

/// Scan every page of a document, in order, with one state machine.
pub fn scan_pages(pages: &[PageText], config: &ScanConfig) -> ScanOutcome {
    let mut state = ScanState::new();

    for page in pages {
        let text = match page.text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => {
                state.note_missing_page(page.page_number);
                continue;
            }
        };

        for line in text.lines() {
            if state.push_line(config, page.page_number, line) == LineFlow::EndOfRegion {
                break;
            }
        }

        state.end_page(page.page_number);
    }

    state.finish()
}
