// Configuration language translator
//
//  Copyright (C) 2014-2022 Ryan Specialty Group, LLC.
//
//  This file is part of cfgtrans.
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! This is the configuration language translator.
//!
//! `cfgtrans` reads an XML source document declaring constants and
//!   dictionaries and writes the equivalent configuration language to the
//!   output file.

extern crate cfgtrans;

use cfgtrans::{
    diagnose::{Annotation, Diagnostic, PlainReporter, Reporter},
    translate::{translate, TranslateError},
    xml::{read_document, ReadError},
};
use getopts::{Fail, Options};
use std::{
    env,
    error::Error,
    fmt::{self, Display},
    fs,
    io::{self, BufReader},
    path::Path,
};

/// Types of commands
enum Command {
    Translate(String, String),
    Usage,
}

/// Translate a source file,
///   writing to the provided destination path.
///
/// The destination is written only if translation succeeds;
///   it is never left with partial output.
fn translate_file(
    src_path: &String,
    dest_path: &String,
) -> Result<(), CfgtransError> {
    let src = fs::File::open(Path::new(src_path))
        .map_err(|e| CfgtransError::Input(src_path.clone(), e))?;

    let doc = read_document(BufReader::new(src))?;
    let out = translate(&doc)?;

    fs::write(Path::new(dest_path), out)
        .map_err(|e| CfgtransError::Output(dest_path.clone(), e))?;

    Ok(())
}

/// Entrypoint for the translator
pub fn main() {
    let args: Vec<String> = env::args().collect();
    let program = &args[0];
    let opts = get_opts();
    let usage = opts.usage(&format!("Usage: {} [OPTIONS] INPUT OUTPUT", program));

    match parse_options(opts, args) {
        Ok(Command::Translate(src_path, dest_path)) => {
            match translate_file(&src_path, &dest_path) {
                Ok(()) => {
                    println!("translation complete: wrote `{}`", dest_path);
                    std::process::exit(exitcode::OK);
                }
                Err(e) => {
                    let reporter = PlainReporter::new();

                    // Rendering to a string ensures buffering so that we
                    //   don't interleave output between processes.
                    let report = reporter.render(&e).to_string();
                    eprintln!("{report}\nfatal: failed to translate `{}`", src_path);

                    std::process::exit(e.exit_code());
                }
            }
        }
        Ok(Command::Usage) => {
            println!("{}", usage);
            std::process::exit(exitcode::OK);
        }
        Err(e) => {
            eprintln!("{}", e);
            println!("{}", usage);
            std::process::exit(exitcode::USAGE);
        }
    }
}

/// Get 'Options'
///
/// ```
/// use getopts::Options;
///
/// let opts = get_opts();
/// ```
fn get_opts() -> Options {
    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");

    opts
}

/// Option parser
fn parse_options(opts: Options, args: Vec<String>) -> Result<Command, Fail> {
    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            return Err(f);
        }
    };

    if matches.opt_present("h") {
        return Ok(Command::Usage);
    }

    match &matches.free[..] {
        [] => Err(Fail::OptionMissing(String::from("INPUT"))),
        [_] => Err(Fail::OptionMissing(String::from("OUTPUT"))),
        [input, output] => Ok(Command::Translate(input.clone(), output.clone())),
        [_, _, extra, ..] => Err(Fail::UnrecognizedOption(extra.clone())),
    }
}

/// Translator (`cfgtrans`) error.
///
/// This represents the aggregation of all possible errors that can occur
///   while translating a file.
#[derive(Debug)]
pub enum CfgtransError {
    /// The source file could not be opened.
    Input(String, io::Error),

    /// The destination file could not be written.
    Output(String, io::Error),

    Read(ReadError),
    Translate(TranslateError),
}

impl CfgtransError {
    /// Process exit code appropriate for this error.
    fn exit_code(&self) -> i32 {
        match self {
            Self::Input(..) => exitcode::NOINPUT,
            Self::Output(..) => exitcode::CANTCREAT,
            Self::Read(_) | Self::Translate(_) => exitcode::DATAERR,
        }
    }
}

impl From<ReadError> for CfgtransError {
    fn from(e: ReadError) -> Self {
        Self::Read(e)
    }
}

impl From<TranslateError> for CfgtransError {
    fn from(e: TranslateError) -> Self {
        Self::Translate(e)
    }
}

impl Display for CfgtransError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(path, e) => write!(f, "{path}: {e}"),
            Self::Output(path, e) => write!(f, "{path}: {e}"),
            Self::Read(e) => Display::fmt(e, f),
            Self::Translate(e) => Display::fmt(e, f),
        }
    }
}

impl Error for CfgtransError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(_, e) => Some(e),
            Self::Output(_, e) => Some(e),
            Self::Read(e) => Some(e),
            Self::Translate(e) => Some(e),
        }
    }
}

impl Diagnostic for CfgtransError {
    fn describe(&self) -> Vec<Annotation> {
        match self {
            Self::Read(e) => e.describe(),
            Self::Translate(e) => e.describe(),

            Self::Output(..) => {
                Annotation::note("no output was written").into()
            }

            // Falls back to rendering just the error `Display`.
            Self::Input(..) => vec![],
        }
    }
}
