use crate::TestContext;

pub mod data;
pub mod factory;
pub mod mock;
pub mod mockito;

impl TestContext {
    pub fn marvel<'a>(&'a mut self) -> MarvelFixtures<'a> {
        MarvelFixtures { setup: self }
    }
}

pub struct MarvelFixtures<'a> {
    pub setup: &'a mut TestContext,
}
