use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;
use std::fs;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "catalogue.log";

/// Initializes the global logger.
///
/// Call once from `main`. The library itself never installs a logger.
///
/// Log level is controlled by the `RUST_LOG` environment variable and defaults to `info`.
/// Example: `RUST_LOG=debug cargo run`
///
/// Logs go to stderr (colored) and to `logs/catalogue.log`. If the file cannot be
/// opened only the console sink is installed.
pub fn init() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_level_filter = log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);

    let console_config = Dispatch::new()
        .format(|out, message, record| {
            let colors = fern::colors::ColoredLevelConfig::new()
                .error(fern::colors::Color::Red)
                .warn(fern::colors::Color::Yellow)
                .info(fern::colors::Color::Green)
                .debug(fern::colors::Color::Blue)
                .trace(fern::colors::Color::BrightBlack);

            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    let mut base_config = Dispatch::new().level(log_level_filter).chain(console_config);

    let log_file_path = format!("{}/{}", LOG_DIR, LOG_FILE);
    let log_file = fs::create_dir_all(LOG_DIR).and_then(|_| fern::log_file(&log_file_path));

    match log_file {
        Ok(file) => {
            let file_config = Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!("[{} {} {}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), record.level(), record.target(), message))
                })
                .chain(file);
            base_config = base_config.chain(file_config);
        }
        Err(e) => eprintln!("Failed to open log file '{}': {}", log_file_path, e),
    }

    if let Err(e) = base_config.apply() {
        eprintln!("Failed to apply logger configuration: {}", e);
        return;
    }

    log::debug!("Logger initialized at level {}", log_level_filter);
}
