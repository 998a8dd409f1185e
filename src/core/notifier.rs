//! Notification presenter, chosen once at startup.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::alert;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::process::{Command, Stdio};

pub trait Notifier {
    fn name(&self) -> &'static str;
    fn notify(&self, title: &str, body: &str) -> AppResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NotifierKind {
    /// Desktop notification daemon (notify-send / osascript)
    Native,
    /// OSC 9 notification understood by modern terminal emulators
    Terminal,
    /// Plain in-app alert line
    #[default]
    Alert,
}

/// Desktop notification through the platform's scheduler.
pub struct NativeNotifier;

impl Notifier for NativeNotifier {
    fn name(&self) -> &'static str {
        "native"
    }

    fn notify(&self, title: &str, body: &str) -> AppResult<()> {
        let mut cmd = if cfg!(target_os = "macos") {
            let script = format!(
                "display notification {} with title {}",
                applescript_quote(body),
                applescript_quote(title)
            );
            let mut c = Command::new("osascript");
            c.arg("-e").arg(script);
            c
        } else if cfg!(target_os = "linux") {
            let mut c = Command::new("notify-send");
            c.arg("--app-name=scanqr").arg(title).arg(body);
            c
        } else {
            return Err(AppError::Notification(
                "no native notifier on this platform".into(),
            ));
        };

        let status = cmd
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| AppError::Notification(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(AppError::Notification(format!(
                "native notifier exited with {status}"
            )))
        }
    }
}

fn applescript_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Terminal notification via the OSC 9 escape sequence.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn notify(&self, title: &str, body: &str) -> AppResult<()> {
        // BEL/ESC inside the text would end the sequence early.
        let text: String = format!("{title}: {body}")
            .chars()
            .filter(|c| !c.is_control())
            .collect();

        let mut out = io::stdout().lock();
        write!(out, "\x1b]9;{text}\x07")
            .and_then(|_| out.flush())
            .map_err(|e| AppError::Notification(e.to_string()))
    }
}

/// In-app alert; never fails.
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn name(&self) -> &'static str {
        "alert"
    }

    fn notify(&self, title: &str, body: &str) -> AppResult<()> {
        alert(title, body);
        Ok(())
    }
}

/// Best-effort wrapper: a failing presenter is replaced by an in-app alert
/// and the error is swallowed.
pub struct FallbackNotifier {
    primary: Box<dyn Notifier>,
}

impl FallbackNotifier {
    pub fn new(primary: Box<dyn Notifier>) -> Self {
        Self { primary }
    }
}

impl Notifier for FallbackNotifier {
    fn name(&self) -> &'static str {
        self.primary.name()
    }

    fn notify(&self, title: &str, body: &str) -> AppResult<()> {
        if self.primary.notify(title, body).is_err() {
            alert(title, body);
        }
        Ok(())
    }
}

/// Build the presenter for `kind`.
pub fn select(kind: NotifierKind) -> Box<dyn Notifier> {
    match kind {
        NotifierKind::Native => Box::new(FallbackNotifier::new(Box::new(NativeNotifier))),
        NotifierKind::Terminal => Box::new(FallbackNotifier::new(Box::new(TerminalNotifier))),
        NotifierKind::Alert => Box::new(AlertNotifier),
    }
}
