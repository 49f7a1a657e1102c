use super::*;

/// Expect stored heroes sorted by name
#[tokio::test]
async fn lists_heroes_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_hero_tables()
        .with_mock_hero("Vision")
        .with_mock_hero("Black Widow")
        .build()
        .await?;

    let client = test_marvel_client(&test);
    let hero_service = HeroService::new(&test.db, &client);
    let heroes = hero_service.list_heroes().await.unwrap();

    let names: Vec<_> = heroes.iter().filter_map(|h| h.name.as_deref()).collect();
    assert_eq!(names, ["Black Widow", "Vision"]);

    Ok(())
}
