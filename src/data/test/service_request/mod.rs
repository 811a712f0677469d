use crate::{
    data::service_request::ServiceRequestRepository,
    model::service_request::CreateServiceRequestParams,
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
