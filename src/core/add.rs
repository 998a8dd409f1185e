use crate::db::log::audit;
use crate::db::store::CodeStore;
use crate::errors::AppResult;
use crate::models::scanned_code::ScannedCode;
use crate::models::symbology::Symbology;
use crate::ui::messages::warning;

/// Manual entry: stores a code directly, without going through the gate.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(store: &CodeStore, data: &str, symbology: &Symbology) -> AppResult<ScannedCode> {
        let code = store.insert(data, symbology.as_str())?;

        if let Err(e) = audit(
            store.conn(),
            "add",
            &code.id,
            &format!("{} [{}]", code.data, code.kind),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(code)
    }
}
