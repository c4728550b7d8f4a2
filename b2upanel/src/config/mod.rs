use bindable::BindableAddr;
use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

#[derive(Deserialize)]
pub struct Config {
	pub address: BindableAddr,
	#[serde(default = "default_log_level")]
	pub log_level: LogLevel,
	/// Shown in place of pagination whose numbers are not available yet.
	#[serde(default = "default_loading_label")]
	pub loading_label: String,
	/// Number of page buttons in one pagination window.
	#[serde(default = "default_per_page")]
	pub per_page: u64,
}

fn deserialize_level_filter<'de, D: serde::de::Deserializer<'de>>(
	d: D,
) -> Result<LevelFilter, D::Error>
where
	D::Error: serde::de::Error,
{
	String::deserialize(d)?
		.parse()
		.map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "LogLevelSerdeHelper")]
pub struct LogLevel {
	pub internal: LevelFilter,
	pub external: LevelFilter,
}

const fn default_log_level_internal() -> LevelFilter {
	LevelFilter::INFO
}

const fn default_log_level_external() -> LevelFilter {
	LevelFilter::WARN
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LogLevelSerdeHelper {
	#[serde(deserialize_with = "deserialize_level_filter")]
	Together(LevelFilter),
	Separate {
		#[serde(
			deserialize_with = "deserialize_level_filter",
			default = "default_log_level_internal"
		)]
		internal: LevelFilter,
		#[serde(
			deserialize_with = "deserialize_level_filter",
			default = "default_log_level_external"
		)]
		external: LevelFilter,
	},
}

impl From<LogLevelSerdeHelper> for LogLevel {
	fn from(helper: LogLevelSerdeHelper) -> Self {
		match helper {
			LogLevelSerdeHelper::Together(level) => Self {
				internal: level,
				external: level,
			},
			LogLevelSerdeHelper::Separate { internal, external } => Self { internal, external },
		}
	}
}

const fn default_log_level() -> LogLevel {
	LogLevel {
		internal: default_log_level_internal(),
		external: default_log_level_external(),
	}
}

fn default_loading_label() -> String {
	b2upanel::action::DEFAULT_LOADING_LABEL.to_owned()
}

const fn default_per_page() -> u64 {
	5
}

pub fn config() -> Result<Config, figment::Error> {
	use figment::providers::Format as _;

	extract(
		figment::Figment::new()
			.merge(figment::providers::Toml::file("b2upanel.toml"))
			.merge(figment::providers::Env::prefixed("B2UPANEL_")),
	)
}

pub fn extract(figment: figment::Figment) -> Result<Config, figment::Error> {
	let config: Config = figment.extract()?;
	if config.per_page == 0 {
		return Err(figment::Error::from(
			"`per_page` must be at least 1".to_owned(),
		));
	}
	Ok(config)
}
