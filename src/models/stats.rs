use serde::Serialize;
use std::collections::BTreeMap;

/// Derived view over `codigos`, recomputed on every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodeStats {
    pub total: i64,
    pub by_type: BTreeMap<String, i64>,
    pub last_scan_timestamp: Option<i64>,
}
