mod document;

use anyhow::{Context, Result, bail};
use markleaf_config::Config;
use std::{
    env, fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

const USAGE: &str = "usage: markleaf [INPUT | -] [--config PATH]";

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    /// `None` reads standard input.
    input: Option<PathBuf>,
    /// Standard input was asked for explicitly with `-`.
    stdin: bool,
    config: Option<PathBuf>,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let Some(path) = args.next() else {
                        bail!("--config needs a path\n{USAGE}");
                    };
                    parsed.config = Some(PathBuf::from(path));
                }
                flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
                _ if parsed.input.is_some() || parsed.stdin => {
                    bail!("more than one input given\n{USAGE}")
                }
                "-" => parsed.stdin = true,
                path => parsed.input = Some(PathBuf::from(path)),
            }
        }

        Ok(parsed)
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file not found: {}", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };
    log::debug!("using config: {config:?}");
    Ok(config)
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read standard input")?;
            Ok(buf)
        }
    }
}

/// `<output_dir>/<input stem>.html`, or `None` when output goes to stdout.
fn output_path(config: &Config, input: Option<&Path>) -> Option<PathBuf> {
    let dir = config.output_dir.as_ref()?;
    let stem = input?.file_stem()?;
    Some(dir.join(format!("{}.html", stem.to_string_lossy())))
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse(env::args().skip(1))?;
    let config = load_config(args.config.as_deref())?;
    let markdown = read_input(args.input.as_deref())?;

    let html = document::render_document(&markdown, &config)?;

    match output_path(&config, args.input.as_deref()) {
        Some(path) => {
            write_output(&path, &html)?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
