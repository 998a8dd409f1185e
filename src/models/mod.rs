pub mod location;
pub mod scan_event;
pub mod scanned_code;
pub mod stats;
pub mod symbology;
