//! Command-line entrypoint: assess one paper read as JSON.
//!
//! ```text
//! taxonomy-assess [--catalog standard|recalibration] [--messages FILE.json] [PAPER.json]
//! ```
//!
//! Reads the paper from `PAPER.json` or stdin and prints the valid results as
//! JSON. Logs go to stderr; filter with `RUST_LOG`.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, bail};

use taxonomy::{Assessor, CatalogVariant, Config, Paper};

#[derive(Debug, Default)]
struct Args {
    catalog: Option<CatalogVariant>,
    messages: Option<PathBuf>,
    input: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--catalog" => {
                let value = iter.next().context("--catalog needs a value")?;
                args.catalog = Some(value.parse()?);
            }
            "--messages" => {
                let value = iter.next().context("--messages needs a path")?;
                args.messages = Some(PathBuf::from(value));
            }
            flag if flag.starts_with("--") => bail!("unknown flag: {flag}"),
            path => args.input = Some(PathBuf::from(path)),
        }
    }

    Ok(args)
}

fn read_paper(input: Option<&PathBuf>) -> anyhow::Result<Paper> {
    let raw = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("paper is not valid JSON")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = parse_args()?;

    let mut config = Config::from_env();
    if let Some(catalog) = args.catalog {
        config.catalog = catalog;
    }
    if let Some(messages) = args.messages {
        config.messages_path = Some(messages);
    }
    config.validate()?;

    let translator = config.translator()?;

    let paper = read_paper(args.input.as_ref())?;

    tracing::info!(
        catalog = %config.catalog,
        words = taxonomy::research::word_count(paper.text()),
        "Assessing paper"
    );

    let mut assessor = Assessor::with_config(translator, &config);
    assessor.assess(&paper);

    println!("{}", serde_json::to_string_pretty(&assessor.valid_results())?);
    Ok(())
}
