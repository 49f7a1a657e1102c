use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

/// Key of the flag recording that the initial hero load has run.
pub const HEROES_LOADED_KEY: &str = "heroes_loaded";

pub struct SettingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SettingRepository<'a, C> {
    /// Creates a new instance of [`SettingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Reads a boolean setting, `false` when the key has never been written
    pub async fn get_bool(&self, key: &str) -> Result<bool, DbErr> {
        let setting = entity::prelude::AppSetting::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(setting.map(|s| s.value).unwrap_or(false))
    }

    /// Writes a boolean setting, replacing any previous value
    pub async fn set_bool(
        &self,
        key: &str,
        value: bool,
    ) -> Result<entity::app_setting::Model, DbErr> {
        let setting = entity::app_setting::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::AppSetting::insert(setting)
            .on_conflict(
                OnConflict::column(entity::app_setting::Column::Key)
                    .update_columns([
                        entity::app_setting::Column::Value,
                        entity::app_setting::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}
