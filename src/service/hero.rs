use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::hero::HeroRepository,
    error::Error,
    marvel::MarvelClient,
    model::{db::HeroModel, marvel::CharacterRecord},
    service::{image::ImageLoader, mapper::map_character},
};

/// Stores fetched pages as heroes and reads them back.
pub struct HeroService<'a> {
    db: &'a DatabaseConnection,
    marvel_client: &'a MarvelClient,
}

impl<'a> HeroService<'a> {
    /// Creates a new instance of [`HeroService`]
    pub fn new(db: &'a DatabaseConnection, marvel_client: &'a MarvelClient) -> Self {
        Self { db, marvel_client }
    }

    /// Stores one page of characters as heroes.
    ///
    /// Every record produces a hero. Name and description are only set when non-empty and
    /// the image only when its download succeeded. Thumbnails are downloaded before the
    /// transaction opens so the page is written and committed in one step.
    ///
    /// # Arguments
    /// - `records` - Characters of a single page, in API order
    ///
    /// # Returns
    /// - `Ok(Vec<HeroModel>)` - The created heroes, in record order
    /// - `Err(Error::DbErr)` - An insert or the commit failed; nothing from this page is kept
    pub async fn store_page(&self, records: &[CharacterRecord]) -> Result<Vec<HeroModel>, Error> {
        let image_loader = ImageLoader::new(self.marvel_client);

        let mut pending = Vec::with_capacity(records.len());
        for record in records {
            let character = map_character(record);
            let image = image_loader.load(&character.image_url).await;

            pending.push((character, image));
        }

        let txn = self.db.begin().await?;
        let hero_repo = HeroRepository::new(&txn);

        let mut heroes = Vec::with_capacity(pending.len());
        for (character, image) in pending {
            let hero = hero_repo
                .create(
                    non_empty(character.name),
                    non_empty(character.description),
                    image,
                )
                .await?;

            heroes.push(hero);
        }

        txn.commit().await?;

        tracing::debug!("Stored page of {} heroes", heroes.len());

        Ok(heroes)
    }

    /// Returns every stored hero ordered by name
    pub async fn list_heroes(&self) -> Result<Vec<HeroModel>, Error> {
        let hero_repo = HeroRepository::new(self.db);

        Ok(hero_repo.get_all_sorted_by_name().await?)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
