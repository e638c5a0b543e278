use RealGasThermo::Examples::realgas_examples::realgas_examples;
use RealGasThermo::settings::{DEFAULT_CONFIG_FILE, Settings};
use log::{error, info, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

pub fn main() {
    // the logger level comes from the file, so problems with it are reported after init
    let (settings, problem) = Settings::load_or_default(DEFAULT_CONFIG_FILE);
    if let Err(e) = TermLogger::init(
        settings.log_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("logger was not initialized: {}", e);
    }
    match problem {
        Some(e) => warn!(
            "could not read {}: {}, using default settings",
            settings.config_file().display(),
            e
        ),
        None if settings.config_file().exists() => {
            info!("settings loaded from {}", settings.config_file().display())
        }
        None => info!("no {}, using default settings", DEFAULT_CONFIG_FILE),
    }
    //
    let task: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0);
    if let Err(e) = realgas_examples(task, &settings) {
        error!("example {} failed: {}", task, e);
        std::process::exit(1);
    }
}
