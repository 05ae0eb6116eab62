// Single source of truth for all default values.

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_EMBEDDING_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3_600; // 1 hour

// --- Generation ---
pub const DEFAULT_GENERATION_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_LOCAL_GENERATION_MODEL: &str = "local-model";
pub const DEFAULT_SOLUTION_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TRIAGE_TEMPERATURE: f64 = 0.3;
pub const DEFAULT_TRIAGE_MAX_TOKENS: u32 = 500;
pub const DEFAULT_GENERATION_TIMEOUT_MS: u64 = 30_000;

// --- Provider chains ---
pub const PROVIDER_API: &str = "api";
pub const PROVIDER_LOCAL: &str = "local";
pub const KNOWN_PROVIDERS: &[&str] = &[PROVIDER_API, PROVIDER_LOCAL];

// --- Backends ---
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

// --- Retrieval ---
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_MIN_SCORE: f64 = 0.3;

// --- Ingestion ---
pub const DEFAULT_CHUNK_MAX_WORDS: usize = 500;
pub const DEFAULT_SUMMARY_CHARS: usize = 500;
pub const DEFAULT_DOCS_PATH: &str = "./docs";
pub const DEFAULT_UPLOADS_DIR: &str = "./docs/uploads";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
