use sea_orm::entity::prelude::*;

/// Recipe record. Column names keep the camelCase spelling of the on-disk schema.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub origin: Option<String>,
    pub description: String,
    /// Comma-separated ingredient names.
    pub ingredients: String,
    /// Newline-separated instructions.
    pub steps: String,
    #[sea_orm(column_name = "imagePath")]
    pub image_path: Option<String>,
    #[sea_orm(column_name = "userId")]
    pub user_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
