use std::path::PathBuf;

use clap::Parser;
use time::{Duration, OffsetDateTime};
use tracing_subscriber::EnvFilter;

use noted_domain::NoteId;
use noted_storage::{db::Db, models::NoteRow, queries};

/// Resets the notes table to a deterministic fixture so browser scenarios
/// start from a known state.
#[derive(Debug, Parser)]
#[command(
	version = noted_cli::VERSION,
	rename_all = "kebab",
	styles = noted_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// How many notes to seed.
	#[arg(long, default_value_t = 10)]
	pub count: u32,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = noted_config::load(&args.config)?;
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();

	let db = Db::connect(&config.storage.postgres).await?;

	db.ensure_schema().await?;

	let removed = queries::delete_all_notes(&db).await?;

	if removed > 0 {
		tracing::info!(removed, "Cleared existing notes.");
	}

	let base = OffsetDateTime::now_utc();

	for index in 0..args.count {
		// Spaced timestamps keep list order equal to insertion order.
		let at = base + Duration::microseconds(i64::from(index));
		let id = NoteId::generate_at(at);
		let row = NoteRow {
			id: id.to_string(),
			title: format!("Note {}", index + 1),
			content: format!("Seeded note {}", index + 1),
			author_name: "Seed Fixture".to_string(),
			author_email: "seed@example.com".to_string(),
			created_at: at,
			updated_at: at,
		};

		queries::insert_note(&db, &row).await?;
	}

	tracing::info!(count = args.count, "Seeded notes.");

	Ok(())
}
