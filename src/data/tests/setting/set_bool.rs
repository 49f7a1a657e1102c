use super::*;

/// Expect a new key to be inserted
#[tokio::test]
async fn inserts_new_setting() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::AppSetting)?;

    let setting_repo = SettingRepository::new(&test.db);
    let setting = setting_repo.set_bool(HEROES_LOADED_KEY, true).await?;

    assert_eq!(setting.key, HEROES_LOADED_KEY);
    assert!(setting.value);
    assert!(setting_repo.get_bool(HEROES_LOADED_KEY).await?);

    Ok(())
}

/// Expect an existing key to be overwritten rather than duplicated
#[tokio::test]
async fn overwrites_existing_setting() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_hero_tables()
        .with_setting(HEROES_LOADED_KEY, true)
        .build()
        .await?;

    let setting_repo = SettingRepository::new(&test.db);
    setting_repo.set_bool(HEROES_LOADED_KEY, false).await?;

    assert!(!setting_repo.get_bool(HEROES_LOADED_KEY).await?);

    Ok(())
}

/// Expect keys to be stored independently
#[tokio::test]
async fn keeps_keys_separate() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::AppSetting)?;

    let setting_repo = SettingRepository::new(&test.db);
    setting_repo.set_bool("other_flag", true).await?;

    assert!(!setting_repo.get_bool(HEROES_LOADED_KEY).await?);
    assert!(setting_repo.get_bool("other_flag").await?);

    Ok(())
}
