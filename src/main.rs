use cosmic::app::Settings;
use cosmic::cosmic_config::CosmicConfigEntry;
use cosmic::iced::Limits;

mod application;
mod components;
mod localize;
mod message;
mod pages;

use healthplus::config::{CONFIG_VERSION, HealthPlusConfig};
use healthplus::session::FileSessionStore;

use application::{APP_ID, Flags, HealthPlus};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cosmic_cfg = cosmic::cosmic_config::Config::new(APP_ID, CONFIG_VERSION)?;
    let config = HealthPlusConfig::get_entry(&cosmic_cfg).unwrap_or_else(|(_, cfg)| cfg);

    // Set up logging to the systemd user journal (`journalctl --user -t healthplus -f`).
    // Wrapper filters: our targets at info/debug (per config), everything else at warn.
    {
        struct FilteredJournal {
            inner: systemd_journal_logger::JournalLog,
        }

        impl log::Log for FilteredJournal {
            fn enabled(&self, metadata: &log::Metadata) -> bool {
                let target = metadata.target();
                if target.starts_with("healthplus") || target.starts_with("application") || target.starts_with("pages") || target.starts_with("components") {
                    let max = if healthplus::debug_logging() { log::LevelFilter::Debug } else { log::LevelFilter::Info };
                    metadata.level() <= max
                } else {
                    metadata.level() <= log::LevelFilter::Warn
                }
            }
            fn log(&self, record: &log::Record) {
                if self.enabled(record.metadata()) {
                    self.inner.log(record);
                }
            }
            fn flush(&self) {
                self.inner.flush();
            }
        }

        healthplus::set_debug_logging(config.debug_logging);

        match systemd_journal_logger::JournalLog::new() {
            Ok(journal) => {
                let journal = journal.with_syslog_identifier("healthplus".to_string());
                if log::set_boxed_logger(Box::new(FilteredJournal { inner: journal })).is_ok() {
                    // Global max must be Debug so debug logs can pass through when toggled
                    log::set_max_level(log::LevelFilter::Debug);
                }
            }
            Err(e) => eprintln!("journal unavailable, running without logs: {}", e),
        }
    }

    localize::localize();

    if let Err(e) = config.ensure_data_dir() {
        log::error!("Failed to create data directory: {}", e);
    }
    let session = FileSessionStore::new(config.session_path());

    // Parse CLI flags
    let start_path = {
        let args: Vec<String> = std::env::args().collect();
        args.iter()
            .position(|a| a == "--route")
            .and_then(|i| args.get(i + 1).cloned())
            .unwrap_or_else(|| "/".to_string())
    };

    let mut settings = Settings::default();
    settings = settings.size_limits(Limits::NONE.min_width(400.0).min_height(300.0));

    let flags = Flags {
        config,
        cosmic_config: cosmic_cfg,
        session: Box::new(session),
        start_path,
    };
    cosmic::app::run::<HealthPlus>(settings, flags)?;

    Ok(())
}
