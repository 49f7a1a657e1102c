//! Stored hero and setting insertion utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::marvel::MarvelFixtures,
    model::{AppSettingModel, HeroModel},
};

impl<'a> MarvelFixtures<'a> {
    /// Insert a hero record directly into the database.
    ///
    /// # Arguments
    /// - `name` - Hero name, stored as-is
    ///
    /// # Returns
    /// - `Ok(HeroModel)` - The created hero record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_mock_hero(&self, name: &str) -> Result<HeroModel, TestError> {
        Ok(entity::prelude::Hero::insert(entity::hero::ActiveModel {
            name: ActiveValue::Set(Some(name.to_string())),
            description: ActiveValue::Set(Some(format!("Description of {}", name))),
            image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a boolean setting directly into the database.
    pub async fn insert_setting(&self, key: &str, value: bool) -> Result<AppSettingModel, TestError> {
        Ok(
            entity::prelude::AppSetting::insert(entity::app_setting::ActiveModel {
                key: ActiveValue::Set(key.to_string()),
                value: ActiveValue::Set(value),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
