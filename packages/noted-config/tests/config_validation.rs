use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use noted_config::{Config, Error};

const SAMPLE_CONFIG_TOML: &str = include_str!("fixtures/sample_config.toml");

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

fn sample_value() -> Value {
	toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.")
}

fn parse(value: &Value) -> Config {
	let raw = toml::to_string(value).expect("Failed to render config.");

	toml::from_str(&raw).expect("Failed to parse config.")
}

fn set(value: &mut Value, table: &str, key: &str, new: Value) {
	value
		.as_table_mut()
		.and_then(|root| root.get_mut(table))
		.and_then(Value::as_table_mut)
		.expect("Sample config must contain the table.")
		.insert(key.to_string(), new);
}

fn temp_config_path() -> PathBuf {
	let stamp = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("Clock before unix epoch.")
		.as_nanos();
	let unique = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

	env::temp_dir().join(format!("noted_config_{stamp}_{unique}.toml"))
}

#[test]
fn sample_config_is_valid() {
	let cfg = parse(&sample_value());

	assert!(noted_config::validate(&cfg).is_ok());
	assert_eq!(cfg.service.http_bind, "127.0.0.1:3001");
	assert_eq!(cfg.pagination.default_limit, 10);
	assert_eq!(cfg.pagination.max_limit, 100);
}

#[test]
fn pagination_section_is_optional() {
	let mut value = sample_value();

	value.as_table_mut().expect("Sample config must be a table.").remove("pagination");

	let cfg = parse(&value);

	assert!(noted_config::validate(&cfg).is_ok());
	assert_eq!(cfg.pagination.default_limit, 10);
	assert_eq!(cfg.pagination.max_limit, 100);
}

#[test]
fn rejects_empty_http_bind() {
	let mut value = sample_value();

	set(&mut value, "service", "http_bind", Value::String(String::new()));

	let cfg = parse(&value);
	let err = noted_config::validate(&cfg).unwrap_err();

	assert!(matches!(err, Error::Validation { message } if message.contains("http_bind")));
}

#[test]
fn rejects_zero_pool_size() {
	let mut value = sample_value();
	let postgres = value
		.as_table_mut()
		.and_then(|root| root.get_mut("storage"))
		.and_then(Value::as_table_mut)
		.and_then(|storage| storage.get_mut("postgres"))
		.and_then(Value::as_table_mut)
		.expect("Sample config must contain [storage.postgres].");

	postgres.insert("pool_max_conns".to_string(), Value::Integer(0));

	let cfg = parse(&value);
	let err = noted_config::validate(&cfg).unwrap_err();

	assert!(matches!(err, Error::Validation { message } if message.contains("pool_max_conns")));
}

#[test]
fn rejects_zero_default_limit() {
	let mut value = sample_value();

	set(&mut value, "pagination", "default_limit", Value::Integer(0));

	let cfg = parse(&value);
	let err = noted_config::validate(&cfg).unwrap_err();

	assert!(matches!(err, Error::Validation { message } if message.contains("default_limit")));
}

#[test]
fn rejects_default_limit_above_max() {
	let mut value = sample_value();

	set(&mut value, "pagination", "default_limit", Value::Integer(200));

	let cfg = parse(&value);
	let err = noted_config::validate(&cfg).unwrap_err();

	assert!(matches!(err, Error::Validation { message } if message.contains("max_limit")));
}

#[test]
fn load_trims_padded_strings() {
	let mut value = sample_value();

	set(&mut value, "service", "log_level", Value::String("  info  ".to_string()));

	let path = temp_config_path();

	fs::write(&path, toml::to_string(&value).expect("Failed to render config."))
		.expect("Failed to write temp config.");

	let cfg = noted_config::load(&path).expect("Failed to load config.");

	fs::remove_file(&path).expect("Failed to remove temp config.");

	assert_eq!(cfg.service.log_level, "info");
}

#[test]
fn load_reports_missing_file() {
	let err = noted_config::load(&temp_config_path()).unwrap_err();

	assert!(matches!(err, Error::ReadConfig { .. }));
}
