pub mod bootstrap;
pub mod builder;
pub mod renamer;

use std::io::{BufRead, Write};
use std::path::Path;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use crate::select::Selector;
use crate::ui::Console;

pub use bootstrap::run;
pub use builder::FilenameBuilder;
pub use renamer::{RenameOutcome, Renamer, SourceFile};

/// Check the source, collect the fields, then confirm and rename.
pub fn rename_file<S, R, O, E>(
    config: &Config,
    catalog: &Catalog,
    selector: S,
    console: &mut Console<R, O, E>,
    renamer: &Renamer,
    path: &Path,
) -> Result<RenameOutcome>
where
    S: Selector,
    R: BufRead,
    O: Write,
    E: Write,
{
    let source = SourceFile::inspect(renamer.working_dir(), path)?;
    let filename = FilenameBuilder::new(config, catalog, selector).build(console)?;
    let new_name = filename.render(source.extension());
    renamer.confirm_and_rename(console, &source, &new_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::select::SelectError;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    struct Fixed(&'static str);

    impl Selector for Fixed {
        fn select(&mut self, _candidates: &[String]) -> std::result::Result<String, SelectError> {
            Ok(self.0.to_string())
        }
    }

    fn console(input: &'static str) -> Console<Cursor<&'static str>, Vec<u8>, Vec<u8>> {
        Console::new(Cursor::new(input), Vec::new(), Vec::new())
    }

    #[test]
    fn renames_with_collected_fields() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("take1.wav"), b"RIFF").unwrap();
        let catalog = Catalog::bundled().unwrap();
        let config = Config::default();
        let mut console = console("Bethesda   Fountain\nBuddin\nPhonogrifter\nClippy\ny\n");

        let outcome = rename_file(
            &config,
            &catalog,
            Fixed("AMBPark: AMBIENCE PARK -- park"),
            &mut console,
            &Renamer::new(dir.path()),
            Path::new("take1.wav"),
        )
        .expect("renamed");

        let expected = dir
            .path()
            .join("AMBPark_Bethesda-Fountain_Buddin_Phonogrifter_Clippy.wav");
        assert_eq!(
            outcome,
            RenameOutcome::Renamed {
                from: dir.path().join("take1.wav"),
                to: expected.clone(),
            }
        );
        assert!(expected.exists());
    }

    #[test]
    fn source_is_checked_before_prompting() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README"), b"notes").unwrap();
        let catalog = Catalog::bundled().unwrap();
        let config = Config::default();
        let mut console = console("");

        let err = rename_file(
            &config,
            &catalog,
            Fixed("AMBPark"),
            &mut console,
            &Renamer::new(dir.path()),
            Path::new("README"),
        )
        .expect_err("no extension");

        assert!(matches!(err, AppError::NoExtension), "{err}");
        let (_, output, _) = console.into_parts();
        assert!(output.is_empty());
    }
}
