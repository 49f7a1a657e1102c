use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct HeroRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HeroRepository<'a, C> {
    /// Creates a new instance of [`HeroRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a hero
    ///
    /// Fields left as `None` are stored as NULL.
    pub async fn create(
        &self,
        name: Option<String>,
        description: Option<String>,
        image: Option<Vec<u8>>,
    ) -> Result<entity::hero::Model, DbErr> {
        let hero = entity::hero::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            image: ActiveValue::Set(image),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        hero.insert(self.db).await
    }

    /// Returns all heroes ordered by name, then by ID for equal names
    pub async fn get_all_sorted_by_name(&self) -> Result<Vec<entity::hero::Model>, DbErr> {
        entity::prelude::Hero::find()
            .order_by_asc(entity::hero::Column::Name)
            .order_by_asc(entity::hero::Column::Id)
            .all(self.db)
            .await
    }
}
