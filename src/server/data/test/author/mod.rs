use crate::server::{
    data::author::AuthorRepository,
    model::author::{CreateAuthorParam, UpdateAuthorParam},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod delete;
mod find_or_create_by_name;
mod update;
