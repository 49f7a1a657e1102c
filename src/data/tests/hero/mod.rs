use super::*;

mod get_all_sorted_by_name;
