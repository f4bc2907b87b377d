use crate::data::category::CategoryRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::category::CategoryFactory};
