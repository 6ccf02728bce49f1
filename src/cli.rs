use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

const LONG_ABOUT: &str = "\
ucsrename renames files using the Universal Category System (UCS) filename pattern.

The program asks a series of questions to build a filename that conforms to UCS standards. The
source file's extension is carried forward to the new file. The layout of the produced filename:

    CatID_FXName_CreatorID_SourceID_UserData.Extension

CatID, FXName, CreatorID and SourceID are required fields. The UserData field is optional and can
be used for information not captured by the UCS standard.

Some fields can be skipped by setting one of the following environment variables:

- UCS_CAT_ID
- UCS_CREATOR_ID
- UCS_SOURCE_ID
- UCS_USER_DATA

Once a variable is set, its value is used instead of prompting. This is useful for relatively
static fields like CreatorID and SourceID. UCS_CAT_ID must name a category in the catalog.

fzf is required to provide a filterable list of category IDs. When stdout is not a terminal the
catalog is printed instead, one category per line.

A UCS CSV is embedded in the program. Set UCS_CSV_FILE to use a different file; compatible CSV
files are available at https://universalcategorysystem.com.";

#[derive(Debug, Parser)]
#[command(name = "ucsrename")]
#[command(version)]
#[command(about = "Rename audio files using the Universal Category System filename pattern")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    /// Rename without asking for confirmation
    #[arg(short = 'y', long = "yes")]
    pub force_confirm: bool,

    /// File to rename
    pub file: Option<PathBuf>,
}

impl Cli {
    pub fn print_usage() -> io::Result<()> {
        Self::command().print_long_help()
    }
}
