use clap::Parser as _;
use sales_tracker::{
    config::{CliArgs, Config},
    util::SalesTracker,
    Session,
};

fn main() {
    let cli = CliArgs::parse();
    let config = Config::load(&cli);

    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );

    // One operator, one task: a current-thread runtime is all this needs.
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("using sales file {}", config.storage.file.display());
    let tracker = SalesTracker::new(&config.storage.file);
    let mut session = Session::new(
        tracker,
        tokio::io::BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );

    if let Err(e) = runtime.block_on(session.run()) {
        log::error!("session ended with an error: {}", e);
        std::process::exit(1);
    }
}
