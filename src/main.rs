use marvel_heroes::{
    config::Config,
    service::{hero::HeroService, loader::HeroLoader, pagination::PageWindow},
    startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<(), marvel_heroes::error::Error> {
    let marvel_client = startup::build_marvel_client(config)?;
    let db = startup::connect_to_database(config).await?;

    let loader = HeroLoader::new(&db, &marvel_client, PageWindow::from(config));
    let report = loader.load().await?;

    tracing::info!(
        "Load finished: {:?}, {} pages fetched, {} heroes stored",
        report.phase,
        report.pages_fetched,
        report.heroes_created
    );

    let heroes = HeroService::new(&db, &marvel_client).list_heroes().await?;
    for hero in heroes {
        let image = if hero.image.is_some() { "image" } else { "no image" };

        println!(
            "{:>5}  {} ({})",
            hero.id,
            hero.name.as_deref().unwrap_or("<unnamed>"),
            image
        );
    }

    Ok(())
}
