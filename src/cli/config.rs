//! `study config` 子命令

use std::io::{self, Write};

use crate::error::Result;
use crate::storage::config::{self, Config};

/// 输出配置文件路径和当前生效的配置
pub fn execute() -> Result<()> {
    let path = config::config_path();
    let config = config::load_config();

    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, &path.display().to_string(), path.exists(), &config)
}

fn write_report(out: &mut impl Write, path: &str, exists: bool, config: &Config) -> Result<()> {
    let status = if exists { "" } else { " (not found, using defaults)" };
    writeln!(out, "# {}{}", path, status)?;
    write!(out, "{}", toml::to_string_pretty(config)?)?;
    Ok(())
}
