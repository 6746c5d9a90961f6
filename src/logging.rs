use std::fs::File;
use std::io;
use std::path::Path;

/// Route `log` output to `path`. The terminal belongs to the table UI, so
/// nothing is written to stdout or stderr.
pub fn init(path: &Path, level: log::LevelFilter) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = File::create(path)?;
    simplelog::WriteLogger::init(level, config, file).map_err(io::Error::other)
}
