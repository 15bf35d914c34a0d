use colored::*;
use ipfilter_common::config::Config;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Prints events as `[+] message`, one symbol per level.
///
/// Installed on a stderr writer: stdout is reserved for the address views, so
/// a diagnostic there would be read back as an address by the next tool in a
/// pipe.
pub struct IpfilterFormatter;

impl<S, N> FormatEvent<S, N> for IpfilterFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn default_level(cfg: &Config) -> &'static str {
    if cfg.quiet {
        return "error";
    }
    match cfg.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Sends all diagnostics to stderr; stdout carries addresses only.
///
/// `RUST_LOG` wins over the level picked from the command line.
pub fn init_logging(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(cfg)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(IpfilterFormatter)
        .init();
}

/// Writes the fatal error of a run to stderr in the `[-]` style.
///
/// Bypasses the subscriber: neither `-q` nor `RUST_LOG` may hide it.
pub fn report_fatal(err: &anyhow::Error) {
    eprintln!("{} {err:#}", "[-]".red().bold());
}
