use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::error::{AppError, Result};

const BUNDLED_CSV: &str = include_str!("../../assets/ucs/UCS-v8.2-core.csv");
const BUNDLED_NAME: &str = "bundled UCS-v8.2-core.csv";

/// Rows with any other field count are skipped.
const FIELDS_PER_ROW: usize = 6;

/// A single UCS category entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub category: String,
    pub sub_category: String,
    pub cat_id: String,
    pub cat_short: String,
    pub synonyms: String,
}

impl Category {
    /// Render the entry as a selector line, padding the CatID column to `id_width` cells.
    pub fn render_line(&self, id_width: usize) -> String {
        let pad = id_width.saturating_sub(UnicodeWidthStr::width(self.cat_id.as_str()));
        format!(
            "{}:{} {} {} -- {}",
            self.cat_id,
            " ".repeat(pad),
            self.category,
            self.sub_category,
            self.synonyms
        )
    }
}

// Positional layout of a catalog row; the explanation column is read and dropped.
#[derive(Debug, Deserialize)]
struct CategoryRow {
    category: String,
    sub_category: String,
    cat_id: String,
    cat_short: String,
    #[allow(dead_code)]
    explanation: String,
    synonyms: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            category: row.category,
            sub_category: row.sub_category,
            cat_id: row.cat_id,
            cat_short: row.cat_short,
            synonyms: row.synonyms,
        }
    }
}

/// The UCS category table, sorted ascending by CatID.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Load from the configured override path, falling back to the bundled table.
    pub fn load(config: &Config) -> Result<Self> {
        match &config.catalog_path_override {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    pub fn bundled() -> Result<Self> {
        Self::from_reader(BUNDLED_CSV.as_bytes(), BUNDLED_NAME)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|err| AppError::catalog_load(&source_name, err))?;
        Self::from_reader(file, &source_name)
    }

    /// Parse headerless comma-separated rows from `reader`.
    pub fn from_reader<R: Read>(reader: R, source_name: &str) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut categories = Vec::new();
        for (index, result) in csv_reader.records().enumerate() {
            let record = result.map_err(|err| AppError::catalog_load(source_name, err))?;
            if record.len() != FIELDS_PER_ROW {
                debug!(
                    "skipping row {} of {source_name}: expected {FIELDS_PER_ROW} fields, found {}",
                    index + 1,
                    record.len()
                );
                continue;
            }

            let row: CategoryRow = record
                .deserialize(None)
                .map_err(|err| AppError::catalog_load(source_name, err))?;
            categories.push(Category::from(row));
        }

        categories.sort_by(|a, b| a.cat_id.cmp(&b.cat_id));
        debug!("loaded {} categories from {source_name}", categories.len());

        Ok(Self { categories })
    }

    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn lookup(&self, cat_id: &str) -> Option<&Category> {
        self.categories
            .binary_search_by(|entry| entry.cat_id.as_str().cmp(cat_id))
            .ok()
            .map(|index| &self.categories[index])
    }

    /// Render every entry as a selector line, with the CatID column aligned.
    pub fn render_lines(&self) -> Vec<String> {
        let id_width = self
            .categories
            .iter()
            .map(|entry| UnicodeWidthStr::width(entry.cat_id.as_str()))
            .max()
            .unwrap_or(0);

        self.categories
            .iter()
            .map(|entry| entry.render_line(id_width))
            .collect()
    }
}
