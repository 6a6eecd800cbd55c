use std::path::Path;
use std::str::FromStr;

use crate::InitLogError;

/// Включает запись лога в `file`, если задана переменная окружения `env_var`
/// с уровнем (`error`, `warn`, `info`, `debug`, `trace`).
///
/// Возвращает `false`, когда переменная не задана и логирование выключено.
pub fn init_log(env_var: &str, file: impl AsRef<Path>) -> Result<bool, InitLogError> {
    let Ok(level) = std::env::var(env_var) else {
        return Ok(false);
    };

    let level = log::LevelFilter::from_str(&level)
        .map_err(|source| InitLogError::Level { level, source })?;

    let config = simplelog::ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        // смещение не определить в многопоточном процессе, остаёмся в UTC
        .unwrap_or_else(|builder| builder)
        .set_max_level(level)
        .build();

    let path = file.as_ref();
    let log_file = std::fs::File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| InitLogError::File {
            path: path.to_path_buf(),
            source,
        })?;

    simplelog::CombinedLogger::init(vec![simplelog::WriteLogger::new(level, config, log_file)])?;

    Ok(true)
}
