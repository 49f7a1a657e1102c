use super::*;

/// Expect false for a key that was never written
#[tokio::test]
async fn defaults_to_false() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::AppSetting)?;

    let setting_repo = SettingRepository::new(&test.db);
    let value = setting_repo.get_bool(HEROES_LOADED_KEY).await?;

    assert!(!value);

    Ok(())
}

/// Expect the stored value for an existing key
#[tokio::test]
async fn reads_stored_value() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_hero_tables()
        .with_setting(HEROES_LOADED_KEY, true)
        .build()
        .await?;

    let setting_repo = SettingRepository::new(&test.db);
    let value = setting_repo.get_bool(HEROES_LOADED_KEY).await?;

    assert!(value);

    Ok(())
}

/// Expect Error when the setting table does not exist
#[tokio::test]
async fn fails_without_table() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let setting_repo = SettingRepository::new(&test.db);
    let result = setting_repo.get_bool(HEROES_LOADED_KEY).await;

    assert!(result.is_err());

    Ok(())
}
