use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = noted_seed::Args::parse();
	noted_seed::run(args).await
}
