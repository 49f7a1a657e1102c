use serde_json::Value;

use crate::{
    constant::IMAGES_PATH,
    fixtures::marvel::{factory, MarvelFixtures},
};

impl<'a> MarvelFixtures<'a> {
    /// Thumbnail path (without extension) served by the mock server for `id`.
    pub fn image_path(&self, id: i64) -> String {
        format!("{}{}/{}", self.setup.server.url(), IMAGES_PATH, id)
    }

    /// Create a character whose thumbnail points at the mock server's `/images/{id}.jpg`.
    pub fn with_mock_character(&self, id: i64, name: &str) -> Value {
        factory::mock_character(id, name, &self.image_path(id), "jpg")
    }

    /// Create a character without thumbnail information.
    pub fn with_mock_character_without_image(&self, id: i64, name: &str) -> Value {
        factory::mock_character(id, name, "", "")
    }

    /// Create `count` consecutive characters starting at `first_id`, named `Hero {id}`.
    pub fn with_mock_characters(&self, first_id: i64, count: usize) -> Vec<Value> {
        (0..count as i64)
            .map(|i| {
                let id = first_id + i;
                self.with_mock_character(id, &format!("Hero {}", id))
            })
            .collect()
    }
}
