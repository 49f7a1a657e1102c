use sea_orm::DatabaseConnection;

use crate::{
    data::setting::{SettingRepository, HEROES_LOADED_KEY},
    error::Error,
    marvel::MarvelClient,
    service::pagination::{PageWindow, PaginationDriver, PaginationReport, PaginationState},
};

/// Runs the initial hero load at most once per database.
pub struct HeroLoader<'a> {
    db: &'a DatabaseConnection,
    marvel_client: &'a MarvelClient,
    window: PageWindow,
}

impl<'a> HeroLoader<'a> {
    /// Creates a new instance of [`HeroLoader`]
    pub fn new(
        db: &'a DatabaseConnection,
        marvel_client: &'a MarvelClient,
        window: PageWindow,
    ) -> Self {
        Self {
            db,
            marvel_client,
            window,
        }
    }

    /// Loads heroes unless a previous run already did.
    ///
    /// Reads the `heroes_loaded` flag, runs pagination and stores the flag once the run
    /// stops. The flag stays unset when storing a page fails so the next start retries.
    ///
    /// # Returns
    /// - `Ok(PaginationReport)` - Summary of the run, `Phase::NotStarted` if nothing was fetched
    /// - `Err(Error::DbErr)` - Reading the flag, storing a page or writing the flag failed
    pub async fn load(&self) -> Result<PaginationReport, Error> {
        let setting_repo = SettingRepository::new(self.db);

        let state = PaginationState {
            already_loaded: setting_repo.get_bool(HEROES_LOADED_KEY).await?,
        };

        let driver = PaginationDriver::new(self.db, self.marvel_client, self.window);
        let (new_state, report) = driver.run(state).await?;

        if new_state != state {
            setting_repo
                .set_bool(HEROES_LOADED_KEY, new_state.already_loaded)
                .await?;
        }

        Ok(report)
    }
}
