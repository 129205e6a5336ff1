use shader_build::{cli::Args, Config, Driver, Glslc};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse()?;
    if args.help {
        println!("{}", shader_build::cli::USAGE);
        return Ok(());
    }

    let config = Config::default();
    let compiler = Glslc::new(&config.compiler);
    let mut driver = Driver::new(config, compiler);

    driver.run(args.mode())
}
