use serde::{Deserialize, Serialize};

/// Barcode/QR encoding standard of a scanned code.
///
/// Decoders spell these in many ways (`QR-Code`, `CODE-128`, `ean_13`, ...);
/// `parse` folds them onto the identifier stored in `codigos.type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "String", from = "String")]
pub enum Symbology {
    #[default]
    Qr,
    Code128,
    Code39,
    Code93,
    DataMatrix,
    Aztec,
    Pdf417,
    Ean13,
    Ean8,
    UpcA,
    UpcE,
    Itf14,
    Codabar,
    Other(String),
}

impl Symbology {
    /// Resolve a decoder-supplied name. Unknown names are kept, lowercased.
    pub fn parse(s: &str) -> Self {
        Self::from_known(s).unwrap_or_else(|| Symbology::Other(s.trim().to_lowercase()))
    }

    /// Resolve only names we recognise (used to tell `QR-Code:...` prefixes
    /// apart from payloads that merely contain a colon).
    pub fn from_known(s: &str) -> Option<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "qr" | "qrcode" => Some(Symbology::Qr),
            "code128" => Some(Symbology::Code128),
            "code39" => Some(Symbology::Code39),
            "code93" => Some(Symbology::Code93),
            "datamatrix" => Some(Symbology::DataMatrix),
            "aztec" => Some(Symbology::Aztec),
            "pdf417" => Some(Symbology::Pdf417),
            "ean13" => Some(Symbology::Ean13),
            "ean8" => Some(Symbology::Ean8),
            "upca" => Some(Symbology::UpcA),
            "upce" => Some(Symbology::UpcE),
            "itf14" | "i25" | "itf" => Some(Symbology::Itf14),
            "codabar" => Some(Symbology::Codabar),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Symbology::Qr => "qr",
            Symbology::Code128 => "code128",
            Symbology::Code39 => "code39",
            Symbology::Code93 => "code93",
            Symbology::DataMatrix => "datamatrix",
            Symbology::Aztec => "aztec",
            Symbology::Pdf417 => "pdf417",
            Symbology::Ean13 => "ean13",
            Symbology::Ean8 => "ean8",
            Symbology::UpcA => "upc_a",
            Symbology::UpcE => "upc_e",
            Symbology::Itf14 => "itf14",
            Symbology::Codabar => "codabar",
            Symbology::Other(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Symbology {
    fn from(s: String) -> Self {
        Symbology::parse(&s)
    }
}

impl From<Symbology> for String {
    fn from(s: Symbology) -> Self {
        s.as_str().to_string()
    }
}
