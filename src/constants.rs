//! Centralized defaults for generation, the store client, and config lookup.

/// Default length of a generated secret.
pub const DEFAULT_SECRET_LENGTH: usize = 18;

/// Largest accepted length; keeps `content=<secret>` well under the per-argument limit.
pub const MAX_SECRET_LENGTH: usize = 4096;

/// Smallest length accepted unless the config file lowers it.
pub const DEFAULT_MIN_LENGTH: usize = 1;

/// Characters a generated secret is drawn from: ASCII letters, digits and punctuation.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
abcdefghijklmnopqrstuvwxyz\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Field name the secret is stored under.
pub const CONTENT_FIELD: &str = "content";

/// Store client executable looked up on PATH.
pub const DEFAULT_STORE_PROGRAM: &str = "vault";

/// System-wide config file, read only if present.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/goamet/randpass.toml";

/// Env var naming an explicit config file.
pub const CONFIG_ENV: &str = "GOAMET_RANDPASS_CONFIG";

/// Env var holding a tracing filter directive.
pub const LOG_ENV: &str = "GOAMET_RANDPASS_LOG";
