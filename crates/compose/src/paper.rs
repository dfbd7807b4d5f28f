//! The paper preset table: named page formats for retail printing.

/// Physical properties of a named paper format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaperPreset {
    /// CSS width of the printable page, e.g. `"210mm"`.
    pub width: &'static str,
    /// Body style class applied to the composed document.
    pub body_class: &'static str,
}

const A4: PaperPreset = PaperPreset { width: "210mm", body_class: "paper-a4" };
const A5: PaperPreset = PaperPreset { width: "148mm", body_class: "paper-a5" };
const K80: PaperPreset = PaperPreset { width: "80mm", body_class: "paper-k80" };
const K57: PaperPreset = PaperPreset { width: "57mm", body_class: "paper-k57" };

/// Looks up a preset by key (case-insensitive).
///
/// Unknown keys fall back to A4 so a template with a stale or misspelled
/// paper size still produces a printable document.
pub fn preset(key: &str) -> &'static PaperPreset {
    match key.to_lowercase().as_str() {
        "a4" => &A4,
        "a5" => &A5,
        "k80" => &K80,
        "k57" => &K57,
        _ => &A4,
    }
}
