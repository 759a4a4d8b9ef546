//! Command line: `phylo <operation> <arg>`.
//!
//! The only operation is `dir <pattern>`. All output, diagnostics included,
//! goes to the writer passed to [`run`]; the binary hands it standard output.
//!
//! Only the argument count decides whether the call is well-formed. Any two
//! arguments, dashes included, go to the operation dispatch; `--help` and
//! `--version` are honoured only as the sole argument.

use std::ffi::OsString;
use std::io::{self, Write};

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, error};

use crate::error::PhyloError;
use crate::fs::FsSource;
use crate::traits::Source;

/// Exit code for a successful run.
pub const SUCCESS: u8 = 0;

/// Flags answered by clap when given on their own.
const INFO_FLAGS: [&str; 4] = ["-h", "--help", "-V", "--version"];

#[derive(Parser, Debug)]
#[command(
    name = "phylo",
    version,
    about = "List directory entries as attrs/created/accessed/modified/size/name"
)]
pub struct Args {
    /// Operation to run. Only `dir` is supported.
    pub operation: OsString,

    /// Operation argument: the path pattern for `dir`, with `*` and `?`
    /// allowed in the last segment.
    pub argument: OsString,
}

impl Args {
    /// Parse `operation argument` as plain values, whatever they look like.
    fn from_pair(bin: OsString, operation: OsString, argument: OsString) -> Result<Self, clap::Error> {
        // Everything after `--` is positional, `--` and `-h` included.
        Self::try_parse_from([bin, OsString::from("--"), operation, argument])
    }
}

/// Parse `args` (program name first) and run the requested operation,
/// writing to `out`. Returns the process exit code.
pub fn run<I, T, W>(args: I, out: &mut W) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write + ?Sized,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let bin = if args.is_empty() {
        OsString::from("phylo")
    } else {
        args.remove(0)
    };

    let (operation, argument) = match <[OsString; 2]>::try_from(args) {
        Ok([operation, argument]) => (operation, argument),
        Err(rest) => {
            if let [flag] = rest.as_slice() {
                if INFO_FLAGS.iter().any(|f| flag.as_os_str() == *f) {
                    return print_info(&bin, flag, out);
                }
            }
            debug!(count = rest.len(), "wrong argument count");
            return report(out, &PhyloError::Usage);
        }
    };

    let args = match Args::from_pair(bin, operation, argument) {
        Ok(args) => args,
        Err(e) => {
            debug!(kind = ?e.kind(), "rejected arguments");
            return report(out, &PhyloError::Usage);
        }
    };

    if args.operation != "dir" {
        let name = args.operation.to_string_lossy().into_owned();
        return report(out, &PhyloError::UnknownOperation(name));
    }

    match args.argument.into_string() {
        Ok(pattern) => dir(&pattern, out),
        Err(raw) => {
            // A pattern the lister cannot represent cannot be opened.
            let err = PhyloError::EnumerationOpen {
                pattern: raw.to_string_lossy().into_owned(),
                source:  io::Error::new(io::ErrorKind::InvalidData, "pattern is not valid UTF-8"),
            };
            report(out, &err)
        }
    }
}

/// List `pattern` from the filesystem. 0 on success, otherwise the exit
/// code of the error.
pub fn dir<W: Write + ?Sized>(pattern: &str, out: &mut W) -> u8 {
    dir_from(FsSource, pattern, out)
}

/// List `pattern` from `source`, reporting failures the way `dir` does.
pub fn dir_from<S, W>(source: S, pattern: &str, out: &mut W) -> u8
where
    S: Source + 'static,
    W: Write + ?Sized,
{
    match crate::list(pattern).source(source).run(&mut *out) {
        Ok(results) => match results.interrupted {
            Some(e) => report(out, &e),
            None => SUCCESS,
        },
        Err(e) => report(out, &e),
    }
}

/// Let clap answer `--help` / `--version`.
fn print_info<W: Write + ?Sized>(bin: &OsString, flag: &OsString, out: &mut W) -> u8 {
    match Args::try_parse_from([bin.clone(), flag.clone()]) {
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            if let Err(io) = write!(out, "{e}") {
                error!(error = %io, "failed to write help");
            }
            SUCCESS
        }
        _ => report(out, &PhyloError::Usage),
    }
}

/// Print `err` as a single line and return its exit code.
fn report<W: Write + ?Sized>(out: &mut W, err: &PhyloError) -> u8 {
    debug!(error = ?err, "reporting");
    if let Err(io) = writeln!(out, "{err}").and_then(|()| out.flush()) {
        error!(error = %io, "failed to write diagnostic");
    }
    err.exit_code()
}
