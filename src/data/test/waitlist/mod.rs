use crate::data::waitlist::WaitlistRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod upsert;
