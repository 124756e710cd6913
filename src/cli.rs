use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pkglog::{Attrs, Format, Level, LogConfig, OutputWriter, Record, StandardWriter};
use serde_json::Value;

pub type Result<T> = std::result::Result<T, anyhow::Error>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML 配置文件，未指定时读取 LOG / LOG_LEVEL / LOG_FORMAT
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 以 JSON 输出
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved package settings
    Settings,

    /// Tell whether a package logs at a level
    Check { package: String, level: String },

    /// Emit one record to stdout through the configured filter
    Emit {
        package: String,
        level: String,
        message: String,

        /// key=value, repeatable
        #[arg(short = 'a', long = "attr")]
        attrs: Vec<String>,

        /// Elapsed time for TIMER records
        #[arg(long, default_value_t = 0)]
        elapsed_ms: u64,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => LogConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => LogConfig::from_env(),
    };
    if cli.json {
        config.format = Format::Json;
    }

    let writer = StandardWriter::from_config(std::io::stdout(), &config);

    match cli.command {
        Commands::Settings => print_settings(&writer),
        Commands::Check { package, level } => {
            let enabled = writer.is_enabled(&package, &level.to_uppercase());
            if enabled {
                println!("{}", "enabled".green());
            } else {
                println!("{}", "disabled".red());
            }
        }
        Commands::Emit {
            package,
            level,
            message,
            attrs,
            elapsed_ms,
        } => {
            let level = Level::parse(&level.to_uppercase())?;
            let mut record = Record::new(package, level, message)
                .with_elapsed(Duration::from_millis(elapsed_ms));
            if !attrs.is_empty() {
                record = record.with_attrs(parse_attrs(&attrs)?);
            }
            writer.write(&record);
        }
    }

    Ok(())
}

fn print_settings<W: std::io::Write + Send>(writer: &StandardWriter<W>) {
    let flag = |on: bool| if on { "on".green() } else { "off".red() };

    for (name, settings) in writer.settings().entries() {
        let name = if name.is_empty() { "\"\"" } else { name };
        println!(
            "{:<16} info={} error={} timer={}",
            name.bold(),
            flag(settings.info),
            flag(settings.error),
            flag(settings.timer)
        );
    }
}

/// 解析 "key=value"，value 能按 JSON 解析时保留类型
fn parse_attrs(raw: &[String]) -> Result<Attrs> {
    let mut attrs = Attrs::new();
    for item in raw {
        let Some((key, value)) = item.split_once('=') else {
            bail!("Invalid attribute (expected key=value): {}", item);
        };
        let value = serde_json::from_str(value.trim())
            .unwrap_or_else(|_| Value::String(value.trim().to_string()));
        attrs.insert(key.trim().to_string(), value);
    }
    Ok(attrs)
}
