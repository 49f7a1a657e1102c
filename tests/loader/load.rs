use super::*;

/// Expect a fresh database to be filled and the flag set
#[tokio::test]
async fn loads_heroes_and_sets_flag() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_hero_tables()
        .with_image_endpoint(1, vec![0xFF, 0xD8], 1)
        .build()
        .await?;
    let results = vec![
        test.marvel().with_mock_character(1, "Wolverine"),
        test.marvel().with_mock_character_without_image(2, "Captain America"),
    ];
    let first_page = test
        .marvel()
        .create_characters_endpoint(0, factory::mock_characters_page(0, 25, 2, results), 1);
    let empty_page = test
        .marvel()
        .create_characters_endpoint(25, factory::mock_empty_page(25, 25, 2), 1);

    let client = test.marvel_client();
    let loader = HeroLoader::new(&test.db, &client, PageWindow::default());
    let report = loader.load().await.unwrap();

    test.assert_mocks();
    first_page.assert();
    empty_page.assert();
    assert_eq!(report.phase, Phase::Stopped(StopReason::EndOfData));
    assert_eq!(report.heroes_created, 2);
    assert!(SettingRepository::new(&test.db)
        .get_bool(HEROES_LOADED_KEY)
        .await?);

    let heroes = HeroService::new(&test.db, &client).list_heroes().await.unwrap();
    assert_eq!(heroes.len(), 2);
    assert_eq!(heroes[0].name.as_deref(), Some("Captain America"));
    assert_eq!(heroes[0].image, None);
    assert_eq!(heroes[1].name.as_deref(), Some("Wolverine"));
    assert_eq!(heroes[1].image, Some(vec![0xFF, 0xD8]));

    Ok(())
}

/// Expect a second load to issue no requests
#[tokio::test]
async fn loads_only_once() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_hero_tables().build().await?;
    let character = test.marvel().with_mock_character_without_image(1, "Hulk");
    let first_page = test.marvel().create_characters_endpoint(
        0,
        factory::mock_characters_page(0, 25, 1, vec![character]),
        1,
    );
    let empty_page = test
        .marvel()
        .create_characters_endpoint(25, factory::mock_empty_page(25, 25, 1), 1);

    let client = test.marvel_client();
    let loader = HeroLoader::new(&test.db, &client, PageWindow::default());
    loader.load().await.unwrap();
    let second = loader.load().await.unwrap();

    first_page.assert();
    empty_page.assert();
    assert_eq!(second.phase, Phase::NotStarted);

    let heroes = HeroService::new(&test.db, &client).list_heroes().await.unwrap();
    assert_eq!(heroes.len(), 1);

    Ok(())
}

/// Expect nothing to be fetched when the flag is already stored
#[tokio::test]
async fn skips_when_flag_is_stored() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_hero_tables()
        .with_mock_hero("Hulk")
        .with_setting(HEROES_LOADED_KEY, true)
        .build()
        .await?;
    let endpoint = test
        .marvel()
        .create_characters_endpoint(0, factory::mock_empty_page(0, 25, 0), 0);

    let client = test.marvel_client();
    let loader = HeroLoader::new(&test.db, &client, PageWindow::default());
    let report = loader.load().await.unwrap();

    endpoint.assert();
    assert_eq!(report.phase, Phase::NotStarted);

    Ok(())
}

/// Expect the flag to be set even when the first page fails
#[tokio::test]
async fn sets_flag_after_failed_fetch() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_hero_tables().build().await?;
    let endpoint = test.marvel().create_characters_endpoint_with_status(
        0,
        401,
        factory::mock_invalid_credentials().to_string(),
        1,
    );

    let client = test.marvel_client();
    let loader = HeroLoader::new(&test.db, &client, PageWindow::default());
    let report = loader.load().await.unwrap();

    endpoint.assert();
    assert_eq!(report.phase, Phase::Stopped(StopReason::FetchFailed));
    assert!(SettingRepository::new(&test.db)
        .get_bool(HEROES_LOADED_KEY)
        .await?);

    Ok(())
}

/// Expect Error and the flag left unset when heroes cannot be stored
#[tokio::test]
async fn leaves_flag_unset_on_storage_failure() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::AppSetting)?;
    let character = test.marvel().with_mock_character_without_image(1, "Hulk");
    let endpoint = test.marvel().create_characters_endpoint(
        0,
        factory::mock_characters_page(0, 25, 1, vec![character]),
        1,
    );

    let client = test.marvel_client();
    let loader = HeroLoader::new(&test.db, &client, PageWindow::default());
    let result = loader.load().await;

    endpoint.assert();
    assert!(matches!(result, Err(Error::DbErr(_))));
    assert!(!SettingRepository::new(&test.db)
        .get_bool(HEROES_LOADED_KEY)
        .await?);

    Ok(())
}
