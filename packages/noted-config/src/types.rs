use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
	#[serde(default = "default_default_limit")]
	pub default_limit: u32,
	#[serde(default = "default_max_limit")]
	pub max_limit: u32,
}

impl Default for Pagination {
	fn default() -> Self {
		Self { default_limit: default_default_limit(), max_limit: default_max_limit() }
	}
}

fn default_default_limit() -> u32 {
	10
}

fn default_max_limit() -> u32 {
	100
}
