// Code generated by armid-generator. DO NOT EDIT.

mod app_service;
mod management_group;
#[cfg(test)]
mod management_group_test;
mod topic_subscription;

pub use app_service::*;
pub use management_group::*;
pub use topic_subscription::*;
