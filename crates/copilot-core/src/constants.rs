/// Copilot system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of solutions a synthesis result may carry.
pub const MAX_SOLUTIONS: usize = 3;

/// Maximum number of retrieved document titles used as fallback references.
pub const MAX_FALLBACK_REFERENCES: usize = 3;

/// Score at or above which a search hit is labelled `High`.
pub const RELEVANCE_HIGH_THRESHOLD: f64 = 0.8;

/// Score at or above which a search hit is labelled `Medium`.
pub const RELEVANCE_MEDIUM_THRESHOLD: f64 = 0.6;

/// Modulus applied to the content hash before it is projected into a fallback vector.
pub const FALLBACK_HASH_MODULUS: u64 = 1_000_000;

/// Amplitude of every component of a fallback vector.
pub const FALLBACK_AMPLITUDE: f64 = 0.1;

/// Paragraph separator used when splitting and re-joining document text.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Vocabulary scanned for document tags.
pub const TAG_VOCABULARY: &[&str] = &[
    "network",
    "hardware",
    "software",
    "security",
    "performance",
    "database",
    "server",
    "email",
    "printer",
    "wifi",
    "vpn",
    "windows",
    "linux",
    "troubleshooting",
    "installation",
];

/// Confidence reported by keyword triage.
pub const KEYWORD_TRIAGE_CONFIDENCE: f64 = 0.75;
