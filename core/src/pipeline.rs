//! # Address Pipeline
//!
//! Reads one address per line, sorts the whole set largest first and writes
//! every [`View`] over the sorted set.
//!
//! The first field of each line (up to the first tab) is the address; the
//! rest of the line is ignored. Processing stops at the first malformed
//! line. All input is read before anything is written, so a failed run
//! leaves the output untouched.

use std::io::{self, BufRead, BufWriter, Write};

use ipfilter_common::network::address::{Address, AddressError};
use ipfilter_common::utils::split::{first_field, split};
use thiserror::Error;
use tracing::{debug, trace};

use crate::view::View;

const FIELD_DELIMITER: char = '\t';
const OCTET_DELIMITER: char = '.';

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid address on line {line}")]
    Line {
        line: usize,
        #[source]
        source: AddressError,
    },
    #[error("failed to read input at line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output")]
    Write(#[source] io::Error),
}

/// What a completed run read and printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub matched: Vec<(View, usize)>,
}

/// Parses every line of `reader` into an [`Address`], keeping input order.
pub fn ingest<R: BufRead>(reader: R) -> Result<Vec<Address>, PipelineError> {
    let mut pool: Vec<Address> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| PipelineError::Read {
            line: idx + 1,
            source,
        })?;
        let field = first_field(&line, FIELD_DELIMITER);

        let address = Address::parse(&split(field, OCTET_DELIMITER))
            .map_err(|source| PipelineError::Line {
                line: idx + 1,
                source,
            })?;

        trace!("line {}: {address}", idx + 1);
        pool.push(address);
    }

    debug!("Read {} addresses", pool.len());
    Ok(pool)
}

/// Sorts largest address first. Equal addresses keep their input order.
pub fn sort_descending(pool: &mut [Address]) {
    pool.sort_by(|a, b| b.cmp(a));
}

/// Writes each address of `pool` accepted by `view`, one per line.
///
/// Returns the number of addresses written.
pub fn write_view<W: Write>(writer: &mut W, pool: &[Address], view: &View) -> io::Result<usize> {
    let mut written: usize = 0;
    for address in pool.iter().filter(|address| view.matches(address)) {
        writeln!(writer, "{address}")?;
        written += 1;
    }
    Ok(written)
}

/// Ingests `reader`, sorts, then writes every view in order to `writer`.
pub fn run<R, W>(reader: R, writer: W, views: &[View]) -> Result<Summary, PipelineError>
where
    R: BufRead,
    W: Write,
{
    let mut pool: Vec<Address> = ingest(reader)?;
    sort_descending(&mut pool);

    let mut out = BufWriter::new(writer);
    let mut matched: Vec<(View, usize)> = Vec::with_capacity(views.len());

    for view in views {
        let count = write_view(&mut out, &pool, view).map_err(PipelineError::Write)?;
        debug!("View '{view}' matched {count} addresses");
        matched.push((view.clone(), count));
    }

    out.flush().map_err(PipelineError::Write)?;

    Ok(Summary {
        total: pool.len(),
        matched,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
