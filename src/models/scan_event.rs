use super::symbology::Symbology;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;

/// One decoded frame reported by the scanner source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEvent {
    pub payload: String,
    pub symbology: Symbology,
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(alias = "data", default)]
    payload: String,
    #[serde(alias = "type", default)]
    symbology: Option<String>,
}

impl ScanEvent {
    pub fn new(payload: impl Into<String>, symbology: Symbology) -> Self {
        Self {
            payload: payload.into(),
            symbology,
        }
    }

    pub fn qr(payload: impl Into<String>) -> Self {
        Self::new(payload, Symbology::Qr)
    }

    /// Parse one line of scanner output.
    ///
    /// Accepted shapes:
    /// - `{"payload": "...", "symbology": "..."}` (aliases `data` / `type`)
    /// - `SYMBOLOGY:payload` as printed by zbar (`QR-Code:hello`)
    /// - anything else is taken verbatim as a QR payload
    ///
    /// Blank lines yield `Ok(None)`.
    pub fn parse_line(line: &str) -> AppResult<Option<Self>> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Ok(None);
        }

        let trimmed = line.trim_start();
        if trimmed.starts_with('{') {
            let raw: RawEvent = serde_json::from_str(trimmed)
                .map_err(|e| AppError::InvalidScan(format!("{e}: {trimmed}")))?;
            let symbology = raw
                .symbology
                .as_deref()
                .map(Symbology::parse)
                .unwrap_or_default();
            return Ok(Some(Self::new(raw.payload, symbology)));
        }

        if let Some((prefix, payload)) = line.split_once(':')
            && let Some(sym) = Symbology::from_known(prefix)
        {
            return Ok(Some(Self::new(payload, sym)));
        }

        Ok(Some(Self::qr(line)))
    }
}
