use heroes_test_utils::prelude::*;
use marvel_heroes::{
    data::setting::{SettingRepository, HEROES_LOADED_KEY},
    error::Error,
    service::{
        hero::HeroService,
        loader::HeroLoader,
        pagination::{PageWindow, Phase, StopReason},
    },
};

use crate::TestContextExt;

mod load;
