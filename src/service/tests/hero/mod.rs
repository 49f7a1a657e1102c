use super::*;
use crate::service::hero::HeroService;

mod list_heroes;
mod store_page;
