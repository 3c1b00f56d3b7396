use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub api: ApiSettings,
    #[serde(default)]
    pub refresh: RefreshSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshSettings {
    /// Cadence of the network poll that replaces the city collection.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Cadence of the local clock tick that redraws the cards.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplaySettings {
    #[serde(default = "default_use_24_hour")]
    pub use_24_hour: bool,
    #[serde(default = "default_columns")]
    pub columns: usize,
}

fn default_poll_interval_secs() -> u64 {
    75
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_use_24_hour() -> bool {
    true
}

fn default_columns() -> usize {
    3
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            use_24_hour: default_use_24_hour(),
            columns: default_columns(),
        }
    }
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
