use crate::topic::application::domain::entities::{Topic, TopicId};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: Option<String>,

    pub min_lesson_number: Option<i32>,

    pub max_lesson_number: Option<i32>,
}

impl Model {
    pub fn to_domain(&self) -> Topic {
        Topic {
            id: TopicId::from(self.id),
            title: self.title.clone(),
            min_lesson_number: self.min_lesson_number,
            max_lesson_number: self.max_lesson_number,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
