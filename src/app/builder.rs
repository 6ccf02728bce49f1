use std::io::{BufRead, Write};

use log::debug;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::filename::{Field, Filename};
use crate::select::Selector;
use crate::ui::{Console, FieldPrompt};
use crate::utils::leading_token;

/// Collects every UCS field, from overrides where configured and prompts otherwise.
pub struct FilenameBuilder<'a, S> {
    config: &'a Config,
    catalog: &'a Catalog,
    selector: S,
    reprompt: bool,
}

impl<'a, S: Selector> FilenameBuilder<'a, S> {
    pub fn new(config: &'a Config, catalog: &'a Catalog, selector: S) -> Self {
        Self {
            config,
            catalog,
            selector,
            reprompt: true,
        }
    }

    /// With re-prompting off, the first rejected value fails the build.
    pub fn reprompt(mut self, enabled: bool) -> Self {
        self.reprompt = enabled;
        self
    }

    /// Produce a CatID known to the catalog, from the override or the selector.
    pub fn resolve_category(&mut self) -> Result<String> {
        if let Some(cat_id) = &self.config.category_id_override {
            debug!("using CatID override {cat_id}");
            return self
                .catalog
                .lookup(cat_id)
                .map(|entry| entry.cat_id.clone())
                .ok_or_else(|| AppError::UnknownCategory(cat_id.clone()));
        }

        let choice = self.selector.select(&self.catalog.render_lines())?;
        let cat_id = leading_token(&choice).ok_or(AppError::Cancelled)?;
        self.catalog
            .lookup(cat_id)
            .map(|entry| entry.cat_id.clone())
            .ok_or_else(|| AppError::UnknownCategory(cat_id.to_string()))
    }

    pub fn build<R, O, E>(&mut self, console: &mut Console<R, O, E>) -> Result<Filename>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        let mut filename = Filename {
            cat_id: self.resolve_category()?,
            ..Filename::default()
        };
        console.say(&format!("{}: {}", Field::CatId, filename.cat_id))?;

        let prompted = [
            (Field::FxName, None),
            (Field::CreatorId, self.config.creator_id_override.as_deref()),
            (Field::SourceId, self.config.source_id_override.as_deref()),
            (Field::UserData, self.config.user_data_override.as_deref()),
        ];
        for (field, override_value) in prompted {
            let value = self.field_value(console, field, override_value)?;
            filename.set(field, value);
        }

        if let Some(field) = filename.missing_required() {
            return Err(AppError::RequiredFieldMissing(field.label().to_string()));
        }
        Ok(filename)
    }

    fn field_value<R, O, E>(
        &self,
        console: &mut Console<R, O, E>,
        field: Field,
        override_value: Option<&str>,
    ) -> Result<String>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        // Overrides are taken as-is, without trimming or delimiter checks.
        if let Some(value) = override_value.filter(|value| !value.is_empty()) {
            debug!("using {field} override");
            return Ok(value.to_string());
        }

        FieldPrompt::new(field)
            .reprompt(self.reprompt)
            .run(console)
    }
}
