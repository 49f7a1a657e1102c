pub type HeroModel = entity::hero::Model;
pub type AppSettingModel = entity::app_setting::Model;
