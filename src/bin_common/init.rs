use std::path::Path;

use color_eyre::eyre::{self, Context};

pub fn init_eyre() -> eyre::Result<()> {
    use color_eyre::config::{HookBuilder, Theme};
    let eyre_color = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        Theme::dark()
    } else {
        Theme::new()
    };

    HookBuilder::default()
        .theme(eyre_color)
        .install()
        .wrap_err("Failed to install eyre")
}

pub fn init_logger(logfile: Option<&Path>) -> eyre::Result<()> {
    let mut dispatch = fern::Dispatch::new()
        .level(log::LevelFilter::Info)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                humantime::format_rfc3339_seconds(std::time::SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stdout());

    if let Some(logfile) = logfile {
        dispatch = dispatch.chain(fern::log_file(logfile).wrap_err_with(|| {
            format!("failed to open the log file at: {}", logfile.display())
        })?);
    }

    dispatch.apply().wrap_err("Failed to set the logger")?;

    Ok(())
}
