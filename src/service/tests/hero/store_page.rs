use sea_orm::{ConnectionTrait, EntityTrait};

use super::*;

/// Expect one hero per record with name, description and image
#[tokio::test]
async fn stores_page_with_images() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_hero_tables()
        .with_image_endpoint(1, vec![1], 1)
        .with_image_endpoint(2, vec![2], 1)
        .with_image_endpoint(3, vec![3], 1)
        .build()
        .await?;
    let records = to_records(test.marvel().with_mock_characters(1, 3));

    let client = test_marvel_client(&test);
    let hero_service = HeroService::new(&test.db, &client);
    let result = hero_service.store_page(&records).await;

    test.assert_mocks();
    let heroes = result.unwrap();
    assert_eq!(heroes.len(), 3);
    for (i, hero) in heroes.iter().enumerate() {
        let id = i as u8 + 1;
        assert_eq!(hero.name, Some(format!("Hero {}", id)));
        assert_eq!(hero.description, Some(format!("Description of Hero {}", id)));
        assert_eq!(hero.image, Some(vec![id]));
    }

    Ok(())
}

/// Expect the hero to be stored without image when the download fails
#[tokio::test]
async fn stores_hero_when_image_is_missing() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Hero)?;
    let records = to_records(vec![test.marvel().with_mock_character(1, "Hulk")]);
    let endpoint = test.marvel().create_missing_image_endpoint(1, 1);

    let client = test_marvel_client(&test);
    let hero_service = HeroService::new(&test.db, &client);
    let heroes = hero_service.store_page(&records).await.unwrap();

    endpoint.assert();
    assert_eq!(heroes.len(), 1);
    assert_eq!(heroes[0].name.as_deref(), Some("Hulk"));
    assert_eq!(heroes[0].image, None);

    Ok(())
}

/// Expect images to be requested only for records with a thumbnail
#[tokio::test]
async fn skips_image_request_without_thumbnail() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_hero_tables()
        .with_image_endpoint(2, vec![2], 1)
        .build()
        .await?;
    let records = to_records(vec![
        test.marvel().with_mock_character_without_image(1, "Blade"),
        test.marvel().with_mock_character(2, "Storm"),
    ]);

    let client = test_marvel_client(&test);
    let hero_service = HeroService::new(&test.db, &client);
    let heroes = hero_service.store_page(&records).await.unwrap();

    test.assert_mocks();
    assert_eq!(heroes[0].image, None);
    assert_eq!(heroes[1].image, Some(vec![2]));

    Ok(())
}

/// Expect a hero with NULL fields for a record with empty name and description
#[tokio::test]
async fn stores_empty_record_with_null_fields() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Hero)?;
    let records = vec![CharacterRecord {
        id: 1,
        name: Some(String::new()),
        description: Some(String::new()),
        ..Default::default()
    }];

    let client = test_marvel_client(&test);
    let hero_service = HeroService::new(&test.db, &client);
    let heroes = hero_service.store_page(&records).await.unwrap();

    assert_eq!(heroes.len(), 1);
    assert_eq!(heroes[0].name, None);
    assert_eq!(heroes[0].description, None);
    assert_eq!(heroes[0].image, None);

    Ok(())
}

/// Expect Error when the page cannot be written
#[tokio::test]
async fn fails_without_hero_table() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let records = vec![CharacterRecord {
        id: 1,
        name: Some("Hulk".to_string()),
        ..Default::default()
    }];

    let client = test_marvel_client(&test);
    let hero_service = HeroService::new(&test.db, &client);
    let result = hero_service.store_page(&records).await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}

/// Expect earlier heroes of a page discarded when a later insert fails
#[tokio::test]
async fn rolls_back_page_when_later_insert_fails() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    // Rejects the second, unnamed record
    test.db
        .execute_unprepared(
            "CREATE TABLE hero (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT,
                image BLOB,
                created_at TEXT NOT NULL
            )",
        )
        .await?;
    let records = vec![
        CharacterRecord {
            id: 1,
            name: Some("Hulk".to_string()),
            ..Default::default()
        },
        CharacterRecord {
            id: 2,
            name: None,
            ..Default::default()
        },
    ];

    let client = test_marvel_client(&test);
    let hero_service = HeroService::new(&test.db, &client);
    let result = hero_service.store_page(&records).await;

    assert!(matches!(result, Err(Error::DbErr(_))));
    let heroes = entity::prelude::Hero::find().all(&test.db).await?;
    assert!(heroes.is_empty());

    Ok(())
}
