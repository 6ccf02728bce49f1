use std::fmt;

/// Separator between filename segments. Accepted field values never contain it.
pub const DELIMITER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
}

/// The five segments of a UCS filename, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CatId,
    FxName,
    CreatorId,
    SourceId,
    UserData,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::CatId,
        Field::FxName,
        Field::CreatorId,
        Field::SourceId,
        Field::UserData,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::CatId => "CatID",
            Field::FxName => "FXName",
            Field::CreatorId => "CreatorID",
            Field::SourceId => "SourceID",
            Field::UserData => "UserData",
        }
    }

    pub fn requirement(self) -> Requirement {
        match self {
            Field::UserData => Requirement::Optional,
            _ => Requirement::Required,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A UCS filename. Segments must not contain [`DELIMITER`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filename {
    pub cat_id: String,
    pub fx_name: String,
    pub creator_id: String,
    pub source_id: String,
    pub user_data: String,
}

impl Filename {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CatId => &self.cat_id,
            Field::FxName => &self.fx_name,
            Field::CreatorId => &self.creator_id,
            Field::SourceId => &self.source_id,
            Field::UserData => &self.user_data,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::CatId => self.cat_id = value,
            Field::FxName => self.fx_name = value,
            Field::CreatorId => self.creator_id = value,
            Field::SourceId => self.source_id = value,
            Field::UserData => self.user_data = value,
        }
    }

    /// First required field that is still empty, if any.
    pub fn missing_required(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| field.requirement() == Requirement::Required)
            .find(|field| self.get(*field).is_empty())
    }

    /// Assemble `CatID_FXName_CreatorID_SourceID[_UserData]<ext>`.
    ///
    /// `ext` is appended verbatim and should carry its leading dot.
    pub fn render(&self, ext: &str) -> String {
        let mut segments = vec![
            self.cat_id.as_str(),
            self.fx_name.as_str(),
            self.creator_id.as_str(),
            self.source_id.as_str(),
        ];
        if !self.user_data.is_empty() {
            segments.push(self.user_data.as_str());
        }

        let mut rendered = segments.join(DELIMITER.to_string().as_str());
        rendered.push_str(ext);
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fountain() -> Filename {
        Filename {
            cat_id: "AMBPark".to_string(),
            fx_name: "Central Park Bethesda Fountain".to_string(),
            creator_id: "Buddin".to_string(),
            source_id: "Phonogrifter".to_string(),
            user_data: "Clippy".to_string(),
        }
    }

    #[test]
    fn renders_all_segments() {
        assert_eq!(
            fountain().render(".wav"),
            "AMBPark_Central Park Bethesda Fountain_Buddin_Phonogrifter_Clippy.wav"
        );
    }

    #[test]
    fn omits_empty_user_data() {
        let filename = Filename {
            user_data: String::new(),
            ..fountain()
        };
        assert_eq!(
            filename.render(".wav"),
            "AMBPark_Central Park Bethesda Fountain_Buddin_Phonogrifter.wav"
        );
    }

    #[test]
    fn segment_count_tracks_user_data() {
        let full = fountain().render(".flac");
        let body = full.strip_suffix(".flac").expect("extension kept");
        assert_eq!(body.split(DELIMITER).count(), 5);

        let mut short = fountain();
        short.user_data.clear();
        let rendered = short.render(".flac");
        let body = rendered.strip_suffix(".flac").expect("extension kept");
        assert_eq!(body.split(DELIMITER).count(), 4);
    }

    #[test]
    fn rendering_is_repeatable() {
        let filename = fountain();
        assert_eq!(filename.render(".aif"), filename.render(".aif"));
    }

    #[test]
    fn extension_is_appended_verbatim() {
        assert!(fountain().render(".WAV").ends_with("Clippy.WAV"));
    }

    #[test]
    fn reports_first_missing_required_field() {
        let mut filename = fountain();
        assert_eq!(filename.missing_required(), None);

        filename.user_data.clear();
        assert_eq!(filename.missing_required(), None);

        filename.set(Field::SourceId, String::new());
        filename.set(Field::CreatorId, String::new());
        assert_eq!(filename.missing_required(), Some(Field::CreatorId));
    }

    #[test]
    fn only_user_data_is_optional() {
        let optional: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| field.requirement() == Requirement::Optional)
            .collect();
        assert_eq!(optional, vec![Field::UserData]);
    }
}
