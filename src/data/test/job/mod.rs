use crate::{data::job::JobRepository, model::job::JobFilter};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{JobStatus, PaymentStatus, Tier};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::job::JobFactory};

mod create;
mod mark_published;
mod search;
