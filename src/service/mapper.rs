use crate::model::marvel::CharacterRecord;

/// Fields of a character that end up in storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedCharacter {
    /// Character name, empty when absent.
    pub name: String,
    /// Character description, empty when absent.
    pub description: String,
    /// Thumbnail URL, empty when the record has no usable image.
    pub image_url: String,
}

/// Projects an API record onto the stored hero fields.
pub fn map_character(record: &CharacterRecord) -> MappedCharacter {
    MappedCharacter {
        name: record.name.clone().unwrap_or_default(),
        description: record.description.clone().unwrap_or_default(),
        image_url: record.image_url(),
    }
}
