//! Scan loop: feeds decoder output, line by line, through a session.

use crate::core::gatekeeper::Clock;
use crate::core::session::{ScanOutcome, ScanSession, ScanTally};
use crate::errors::AppResult;
use crate::models::scan_event::ScanEvent;
use crate::ui::messages::{error, warning};
use crate::utils::colors::{GREEN, GREY, RED, RESET, YELLOW, colorize_payload};
use std::io::BufRead;

pub struct ScanLogic;

impl ScanLogic {
    /// Process events in arrival order until the reader is exhausted.
    ///
    /// Malformed lines (including bytes that are not UTF-8) are reported and
    /// skipped; storage failures are reported and the loop carries on with
    /// the next event. Only a failing reader ends the run early.
    pub fn run<C: Clock, R: BufRead>(
        session: &mut ScanSession<C>,
        mut reader: R,
        verbose: bool,
    ) -> AppResult<ScanTally> {
        let mut tally = ScanTally::default();
        let mut buf = Vec::new();
        let mut lineno = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            lineno += 1;

            let line = match std::str::from_utf8(&buf) {
                Ok(l) => l,
                Err(e) => {
                    warning(format!("line {}: not valid UTF-8 ({})", lineno, e));
                    continue;
                }
            };

            let event = match ScanEvent::parse_line(line) {
                Ok(Some(ev)) => ev,
                Ok(None) => continue,
                Err(e) => {
                    warning(format!("line {}: {}", lineno, e));
                    continue;
                }
            };

            let outcome = session.handle(&event);
            tally.record(&outcome);
            print_outcome(&event, &outcome, verbose);
        }

        session.shutdown();
        Ok(tally)
    }
}

fn print_outcome(event: &ScanEvent, outcome: &ScanOutcome, verbose: bool) {
    match outcome {
        ScanOutcome::Stored { code, duplicate } => {
            let tag = if *duplicate {
                format!("{YELLOW}dup   {RESET}")
            } else {
                format!("{GREEN}stored{RESET}")
            };
            println!(
                "{} {:<10} {} {GREY}{}{RESET}",
                tag,
                code.kind,
                colorize_payload(&code.data),
                code.id
            );
        }
        ScanOutcome::Suppressed(reason) => {
            if verbose {
                println!(
                    "{GREY}skip   {:<10} {} ({}){RESET}",
                    event.symbology,
                    event.payload,
                    reason.as_str()
                );
            }
        }
        ScanOutcome::Failed(e) => {
            error(format!("{RED}failed{RESET} {}: {}", event.payload, e));
        }
    }
}
