// Code generated by armid-generator. DO NOT EDIT.

mod app_service_id;
mod topic_subscription_id;
#[cfg(test)]
mod topic_subscription_id_test;

pub use app_service_id::*;
pub use topic_subscription_id::*;
