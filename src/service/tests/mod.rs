use heroes_test_utils::prelude::*;
use serde_json::Value;

use crate::{error::Error, model::marvel::CharacterRecord, util::test::test_marvel_client};

mod hero;

fn to_records(values: Vec<Value>) -> Vec<CharacterRecord> {
    values
        .into_iter()
        .map(|value| serde_json::from_value(value).expect("Failed to decode mock character"))
        .collect()
}
