//! Scan session: the store, the gate and the notifier behind one owner.

use crate::core::gatekeeper::{Clock, Decision, Gatekeeper, GatekeeperConfig, SuppressReason};
use crate::core::notifier::Notifier;
use crate::db::log::audit;
use crate::db::store::CodeStore;
use crate::errors::AppError;
use crate::models::scan_event::ScanEvent;
use crate::models::scanned_code::ScannedCode;
use crate::ui::messages::warning;

#[derive(Debug)]
pub enum ScanOutcome {
    /// Accepted and written. `duplicate` is set when the payload was already
    /// in the store before this insert.
    Stored { code: ScannedCode, duplicate: bool },
    Suppressed(SuppressReason),
    /// Accepted, but the store failed. The gate still unlocks on schedule.
    Failed(AppError),
}

impl ScanOutcome {
    pub fn is_stored(&self) -> bool {
        matches!(self, ScanOutcome::Stored { .. })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanTally {
    pub stored: usize,
    pub duplicates: usize,
    pub suppressed: usize,
    pub failed: usize,
}

impl ScanTally {
    pub fn record(&mut self, outcome: &ScanOutcome) {
        match outcome {
            ScanOutcome::Stored { duplicate, .. } => {
                self.stored += 1;
                if *duplicate {
                    self.duplicates += 1;
                }
            }
            ScanOutcome::Suppressed(_) => self.suppressed += 1,
            ScanOutcome::Failed(_) => self.failed += 1,
        }
    }
}

pub struct ScanSession<C: Clock> {
    store: CodeStore,
    gate: Gatekeeper<C>,
    notifier: Box<dyn Notifier>,
    notify_on_scan: bool,
}

impl<C: Clock> ScanSession<C> {
    pub fn new(
        store: CodeStore,
        config: GatekeeperConfig,
        clock: C,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            gate: Gatekeeper::new(config, clock),
            notifier,
            notify_on_scan: false,
        }
    }

    pub fn notify_on_scan(mut self, enabled: bool) -> Self {
        self.notify_on_scan = enabled;
        self
    }

    pub fn store(&self) -> &CodeStore {
        &self.store
    }

    pub fn gatekeeper(&self) -> &Gatekeeper<C> {
        &self.gate
    }

    pub fn handle(&mut self, event: &ScanEvent) -> ScanOutcome {
        if let Decision::Suppressed(reason) = self.gate.evaluate(event) {
            return ScanOutcome::Suppressed(reason);
        }

        let result = self.persist(event);
        self.gate.schedule_unlock();

        match result {
            Ok((code, duplicate)) => {
                if let Err(e) = audit(
                    self.store.conn(),
                    "scan",
                    &code.id,
                    &format!("{} [{}]", code.data, code.kind),
                ) {
                    warning(format!("Failed to write internal log: {e}"));
                }

                if duplicate {
                    self.present("Already scanned", &code.data);
                } else if self.notify_on_scan {
                    self.present("Code scanned", &code.data);
                }

                ScanOutcome::Stored { code, duplicate }
            }
            Err(e) => {
                self.present("Scan not saved", &e.to_string());
                ScanOutcome::Failed(e)
            }
        }
    }

    fn persist(&self, event: &ScanEvent) -> Result<(ScannedCode, bool), AppError> {
        let duplicate = self.store.exists_by_data(&event.payload)?;
        let code = self
            .store
            .insert(&event.payload, event.symbology.as_str())?;
        Ok((code, duplicate))
    }

    fn present(&self, title: &str, body: &str) {
        // Presenters are best-effort; a failure here must not affect the scan.
        let _ = self.notifier.notify(title, body);
    }

    /// Cancel the pending unlock. Called on drop as well.
    pub fn shutdown(&mut self) {
        self.gate.cancel_pending();
    }
}

impl<C: Clock> Drop for ScanSession<C> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
