use clap::Parser;
use std::ffi::OsString;
use std::iter;
use std::path::PathBuf;

/// Multiply integer arguments together
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct ProductArgs {
    pub numbers: Vec<String>,
}

/// Print the contents of a text file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct PrintFileArgs {
    pub paths: Vec<PathBuf>,
}

/// Inserts `--` after the program name so that every token the user typed,
/// including `--` itself and anything starting with `-`, is a positional.
pub fn positional_argv<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv = argv.into_iter().map(Into::into);
    argv.next()
        .into_iter()
        .chain(iter::once(OsString::from("--")))
        .chain(argv)
        .collect()
}

impl ProductArgs {
    pub fn from_argv<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(positional_argv(argv))
    }
}

impl PrintFileArgs {
    pub fn from_argv<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(positional_argv(argv))
    }
}
