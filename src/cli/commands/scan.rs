use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::gatekeeper::SystemClock;
use crate::core::notifier;
use crate::core::scan::ScanLogic;
use crate::core::session::ScanSession;
use crate::db::store::CodeStore;
use crate::errors::{AppError, AppResult};
use crate::models::location::Coordinate;
use crate::ui::messages::{header, info, success};
use crate::utils::path::expand_tilde;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

fn open_input(path: Option<&str>) -> AppResult<Box<dyn BufRead>> {
    match path {
        None | Some("-") => Ok(Box::new(io::stdin().lock())),
        Some(p) => {
            let file = File::open(expand_tilde(p)).map_err(|e| match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    AppError::PermissionDenied(format!("cannot read scan input {p}"))
                }
                _ => AppError::Io(e),
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan {
        input,
        policy,
        cooldown_ms,
        timeout_ms,
        notify,
        verbose,
        at,
    } = cmd
    {
        let mut gate_cfg = cfg.gatekeeper();
        if let Some(p) = policy {
            gate_cfg.policy = *p;
        }
        if let Some(ms) = cooldown_ms {
            gate_cfg.cooldown_window_ms = *ms;
        }
        if let Some(ms) = timeout_ms {
            gate_cfg.processing_timeout_ms = *ms;
        }
        gate_cfg.validate()?;

        let location = at.as_deref().map(Coordinate::parse).transpose()?;
        let reader = open_input(input.as_deref())?;

        let store = CodeStore::open(&cfg.database)?;
        let presenter = notifier::select(cfg.notifier);
        let presenter_name = presenter.name();
        let mut session = ScanSession::new(store, gate_cfg, SystemClock, presenter)
            .notify_on_scan(*notify || cfg.notify_on_scan);

        let active = session.gatekeeper().config();
        header("scanqr scan");
        info(format!(
            "policy={} cooldown={}ms timeout={}ms notifier={}",
            active.policy.as_str(),
            active.cooldown_window_ms,
            active.processing_timeout_ms,
            presenter_name
        ));
        match location {
            Some(c) => info(format!("GPS: {c}")),
            None => info("GPS: unavailable"),
        }

        let tally = ScanLogic::run(&mut session, reader, *verbose)?;

        success(format!(
            "{} stored ({} already seen), {} suppressed, {} failed",
            tally.stored, tally.duplicates, tally.suppressed, tally.failed
        ));
    }

    Ok(())
}
