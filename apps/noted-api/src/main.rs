use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = noted_api::Args::parse();
	noted_api::run(args).await
}
