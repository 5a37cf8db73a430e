use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, Statement};

#[derive(DeriveMigrationName)]
pub struct Migration;

const REBUILD_TABLE: &str = "recipes_rebuild";

// Files written by the Express backend declare `origin TEXT NOT NULL` and a
// FOREIGN KEY on `userId`; `create_recipes` leaves such a table untouched.
// SQLite cannot relax either constraint in place, so the table is rebuilt:
// create, copy, drop, rename. Rows and ids are kept.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !is_legacy_layout(manager).await? {
            return Ok(());
        }

        manager
            .create_table(
                Table::create()
                    .table(Alias::new(REBUILD_TABLE))
                    .col(
                        ColumnDef::new(Recipes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Recipes::Title).text().not_null())
                    .col(ColumnDef::new(Recipes::Origin).text().null())
                    .col(ColumnDef::new(Recipes::Description).text().not_null())
                    .col(ColumnDef::new(Recipes::Ingredients).text().not_null())
                    .col(ColumnDef::new(Recipes::Steps).text().not_null())
                    .col(ColumnDef::new(Recipes::ImagePath).text().null())
                    .col(ColumnDef::new(Recipes::UserId).integer().null())
                    .to_owned(),
            )
            .await?;

        let columns = r#"id, title, origin, description, ingredients, steps, "imagePath", "userId""#;
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "INSERT INTO {REBUILD_TABLE} ({columns}) SELECT {columns} FROM recipes"
            ))
            .await?;

        manager
            .drop_table(Table::drop().table(Recipes::Table).to_owned())
            .await?;
        manager
            .rename_table(
                Table::rename()
                    .table(Alias::new(REBUILD_TABLE), Recipes::Table)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}

/// True when `recipes` still requires `origin` or carries a foreign key.
async fn is_legacy_layout(manager: &SchemaManager<'_>) -> Result<bool, DbErr> {
    let db = manager.get_connection();
    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            r#"SELECT
                (SELECT "notnull" FROM pragma_table_info('recipes') WHERE name = 'origin') AS origin_required,
                (SELECT COUNT(*) FROM pragma_foreign_key_list('recipes')) AS foreign_keys"#,
        ))
        .await?;
    let Some(row) = row else {
        return Ok(false);
    };
    let origin_required: Option<i64> = row.try_get("", "origin_required")?;
    let foreign_keys: i64 = row.try_get("", "foreign_keys")?;
    Ok(origin_required == Some(1) || foreign_keys > 0)
}

#[derive(Iden)]
enum Recipes {
    Table,
    Id,
    Title,
    Origin,
    Description,
    Ingredients,
    Steps,
    #[iden = "imagePath"]
    ImagePath,
    #[iden = "userId"]
    UserId,
}
