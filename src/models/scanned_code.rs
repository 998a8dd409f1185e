use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// A persisted row of the `codigos` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedCode {
    pub id: String,   // ⇔ codigos.id (TEXT, generated by the store)
    pub data: String, // ⇔ codigos.data (TEXT, default '')
    #[serde(rename = "type")]
    pub kind: String, // ⇔ codigos.type (TEXT, default 'qr')
    pub timestamp: i64, // ⇔ codigos.timestamp (INTEGER, ms since epoch)
}

impl ScannedCode {
    /// Local time of the scan, if the stored value is a representable instant.
    pub fn scanned_at(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.timestamp).single()
    }

    pub fn scanned_at_str(&self) -> String {
        self.scanned_at()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "--".to_string())
    }
}
