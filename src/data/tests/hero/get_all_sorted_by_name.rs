use super::*;

/// Expect heroes ordered by name regardless of insertion order
#[tokio::test]
async fn returns_heroes_sorted_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_hero_tables()
        .with_mock_hero("Wolverine")
        .with_mock_hero("Captain America")
        .with_mock_hero("Hulk")
        .build()
        .await?;

    let hero_repo = HeroRepository::new(&test.db);
    let heroes = hero_repo.get_all_sorted_by_name().await?;

    let names: Vec<_> = heroes.iter().filter_map(|h| h.name.as_deref()).collect();
    assert_eq!(names, ["Captain America", "Hulk", "Wolverine"]);

    Ok(())
}

/// Expect unnamed heroes first, then named heroes in order
#[tokio::test]
async fn places_unnamed_heroes_first() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_hero_tables()
        .with_mock_hero("Thor")
        .build()
        .await?;

    let hero_repo = HeroRepository::new(&test.db);
    let unnamed = hero_repo.create(None, None, None).await?;

    let heroes = hero_repo.get_all_sorted_by_name().await?;

    assert_eq!(heroes.len(), 2);
    assert_eq!(heroes[0].id, unnamed.id);
    assert_eq!(heroes[1].name.as_deref(), Some("Thor"));

    Ok(())
}

/// Expect an empty list when no heroes are stored
#[tokio::test]
async fn returns_empty_list() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Hero)?;

    let hero_repo = HeroRepository::new(&test.db);
    let heroes = hero_repo.get_all_sorted_by_name().await?;

    assert!(heroes.is_empty());

    Ok(())
}
