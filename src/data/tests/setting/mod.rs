use super::*;

mod get_bool;
mod set_bool;
