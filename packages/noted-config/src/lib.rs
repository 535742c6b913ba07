mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Pagination, Postgres, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.pagination.default_limit == 0 {
		return Err(Error::Validation {
			message: "pagination.default_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.pagination.default_limit > cfg.pagination.max_limit {
		return Err(Error::Validation {
			message: "pagination.default_limit must not exceed pagination.max_limit.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	trim(&mut cfg.service.http_bind);
	trim(&mut cfg.service.log_level);
	trim(&mut cfg.storage.postgres.dsn);
}

fn trim(value: &mut String) {
	let trimmed = value.trim();

	if trimmed.len() != value.len() {
		*value = trimmed.to_string();
	}
}
