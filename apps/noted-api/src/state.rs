use std::sync::Arc;

use noted_service::NotesService;
use noted_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<NotesService>,
}
impl AppState {
	pub async fn new(config: noted_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = NotesService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}
}
