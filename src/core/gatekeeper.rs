//! Scan Gatekeeper: turns the raw stream of decoded frames into accept
//! decisions.
//!
//! A camera-backed decoder reports the same code on every frame it can read,
//! so the gate holds a lock while an accepted scan is being stored and for
//! `processing_timeout_ms` afterwards. Two policies are available:
//!
//! - [`DebouncePolicy::LockWindow`]: every event is suppressed while the gate
//!   is locked, whatever its payload.
//! - [`DebouncePolicy::SameValueCooldown`]: only a repeat of the last accepted
//!   payload within `cooldown_window_ms` is suppressed; a different code is
//!   accepted even while locked.
//!
//! The unlock is a deadline owned by the gate. It fires cooperatively on the
//! next [`Gatekeeper::evaluate`] or [`Gatekeeper::tick`] and can be cancelled
//! on teardown, so nothing runs after the owner is gone.

use crate::errors::{AppError, AppResult};
use crate::models::scan_event::ScanEvent;
use crate::utils::time::now_millis;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

/// Source of "now" in milliseconds since the epoch.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        now_millis()
    }
}

/// Clock advanced by hand; used by tests and replayed scan logs.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: i64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DebouncePolicy {
    #[default]
    LockWindow,
    SameValueCooldown,
}

impl DebouncePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebouncePolicy::LockWindow => "lock_window",
            DebouncePolicy::SameValueCooldown => "same_value_cooldown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatekeeperConfig {
    pub policy: DebouncePolicy,
    pub cooldown_window_ms: u64,
    pub processing_timeout_ms: u64,
}

impl GatekeeperConfig {
    /// Under `SameValueCooldown` a repeat of the same code is only held back
    /// by the cooldown, so it must cover the processing window.
    pub fn validate(&self) -> AppResult<()> {
        if self.policy == DebouncePolicy::SameValueCooldown
            && self.cooldown_window_ms < self.processing_timeout_ms
        {
            return Err(AppError::Config(format!(
                "cooldown_window_ms ({}) must not be shorter than processing_timeout_ms ({}) \
                 with the same_value_cooldown policy",
                self.cooldown_window_ms, self.processing_timeout_ms
            )));
        }
        Ok(())
    }
}

/// Durations above `i64::MAX` ms are clamped; they behave as "forever".
fn duration_ms(ms: u64) -> i64 {
    i64::try_from(ms).unwrap_or(i64::MAX)
}

impl Default for GatekeeperConfig {
    fn default() -> Self {
        Self {
            policy: DebouncePolicy::LockWindow,
            cooldown_window_ms: 2000,
            processing_timeout_ms: 800,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    /// A scan is still being processed or the post-processing window is open.
    Locked,
    /// Same payload as the last accepted scan, inside the cooldown window.
    Cooldown,
}

impl SuppressReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuppressReason::Locked => "locked",
            SuppressReason::Cooldown => "cooldown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Suppressed(SuppressReason),
}

impl Decision {
    pub fn is_accept(&self) -> bool {
        matches!(self, Decision::Accept)
    }
}

/// Handle to the scheduled unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockTimer {
    due_at_ms: i64,
}

impl UnlockTimer {
    pub fn due_at_ms(&self) -> i64 {
        self.due_at_ms
    }

    fn is_due(&self, now: i64) -> bool {
        now >= self.due_at_ms
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatekeeperState {
    pub last_scanned_value: Option<String>,
    pub last_scanned_at: Option<i64>,
    pub is_locked: bool,
    pub pending_unlock: Option<UnlockTimer>,
}

pub struct Gatekeeper<C: Clock> {
    config: GatekeeperConfig,
    clock: C,
    state: GatekeeperState,
}

impl<C: Clock> Gatekeeper<C> {
    pub fn new(config: GatekeeperConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            state: GatekeeperState::default(),
        }
    }

    pub fn config(&self) -> &GatekeeperConfig {
        &self.config
    }

    pub fn state(&self) -> &GatekeeperState {
        &self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked
    }

    /// Fire the unlock timer if its deadline has passed.
    /// Returns true when this call released the lock.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now_ms();
        match self.state.pending_unlock {
            Some(timer) if timer.is_due(now) => {
                self.state.pending_unlock = None;
                let was_locked = self.state.is_locked;
                self.state.is_locked = false;
                was_locked
            }
            _ => false,
        }
    }

    pub fn evaluate(&mut self, event: &ScanEvent) -> Decision {
        self.tick();
        let now = self.clock.now_ms();

        let suppressed = match self.config.policy {
            DebouncePolicy::LockWindow => self.state.is_locked.then_some(SuppressReason::Locked),
            DebouncePolicy::SameValueCooldown => {
                let same = self.state.last_scanned_value.as_deref() == Some(event.payload.as_str());
                let within = self
                    .state
                    .last_scanned_at
                    .is_some_and(|at| {
                        now.saturating_sub(at) < duration_ms(self.config.cooldown_window_ms)
                    });
                (same && within).then_some(SuppressReason::Cooldown)
            }
        };

        if let Some(reason) = suppressed {
            return Decision::Suppressed(reason);
        }

        self.state.is_locked = true;
        self.state.last_scanned_value = Some(event.payload.clone());
        self.state.last_scanned_at = Some(now);
        Decision::Accept
    }

    /// Arm the unlock `processing_timeout_ms` from now. A previously armed
    /// timer is replaced, so at most one is ever outstanding.
    pub fn schedule_unlock(&mut self) -> UnlockTimer {
        let timer = UnlockTimer {
            due_at_ms: self
                .clock
                .now_ms()
                .saturating_add(duration_ms(self.config.processing_timeout_ms)),
        };
        self.state.pending_unlock = Some(timer);
        timer
    }

    /// Drop the outstanding unlock timer without firing it.
    pub fn cancel_pending(&mut self) -> bool {
        self.state.pending_unlock.take().is_some()
    }
}
