use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::Context;
use ipfilter_common::config::Config;
use ipfilter_core::pipeline::{self, Summary};
use ipfilter_core::view;
use tracing::{debug, info};

pub fn filter(cfg: &Config) -> anyhow::Result<Summary> {
    let reader: Box<dyn BufRead> = match &cfg.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            info!("Reading addresses from {}", path.display());
            Box::new(BufReader::new(file))
        }
        None => {
            info!("Reading addresses from standard input");
            Box::new(io::stdin().lock())
        }
    };

    let views = view::default_views();
    let summary: Summary = pipeline::run(reader, io::stdout().lock(), &views)?;

    let unit: &str = if summary.total == 1 { "address" } else { "addresses" };
    debug!("{} {unit} sorted into {} views", summary.total, summary.matched.len());

    Ok(summary)
}
