use env_logger::WriteStyle;
use log::LevelFilter;
use std::io::Write;

/// Installs an `env_logger` backend for the `log` calls made by this crate.
///
/// Fails if another logger was already installed.
pub fn try_init() -> Result<(), log::SetLoggerError> {
    env_logger::builder()
        .format(|buf, record| writeln!(buf, "[NARROWPHASE | {}] {}", record.level(), record.args()))
        .write_style(WriteStyle::Always)
        .filter(None, LevelFilter::Info)
        .try_init()
}
