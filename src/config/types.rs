use serde::Deserialize;

/// Default fetch timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default number of candidates the matcher tries per text
pub const DEFAULT_MAX_CANDIDATES: usize = 65535;

/// Main configuration structure for Phone-Scout
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Phone matcher configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MatcherConfig {
    /// Maximum candidates tried in a single text before giving up
    #[serde(rename = "max-candidates", default = "default_max_candidates")]
    pub max_candidates: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_candidates: default_max_candidates(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("phone-scout/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_candidates() -> usize {
    DEFAULT_MAX_CANDIDATES
}
