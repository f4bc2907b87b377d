use crate::{data::review::ReviewRepository, error::AppError};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, review::ReviewFactory},
};

mod find_by_id;
mod get_all;
