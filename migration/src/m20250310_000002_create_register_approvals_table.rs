use sea_orm_migration::prelude::*;

// Statements below must tolerate a schema that already has them.
const STATUS_CHECK_SQL: &str = r#"
    ALTER TABLE register_approvals
    DROP CONSTRAINT IF EXISTS chk_register_approvals_status;
    ALTER TABLE register_approvals
    ADD CONSTRAINT chk_register_approvals_status
    CHECK (status IN ('pending', 'approved', 'rejected'));
"#;

const ADMIN_ID_INDEX_SQL: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_register_approvals_admin_id
    ON register_approvals (admin_id);
"#;

const STATUS_INDEX_SQL: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_register_approvals_status
    ON register_approvals (status);
"#;

const UPDATED_AT_TRIGGER_SQL: &str = r#"
    DROP TRIGGER IF EXISTS update_register_approvals_updated_at ON register_approvals;
    CREATE TRIGGER update_register_approvals_updated_at
    BEFORE UPDATE ON register_approvals
    FOR EACH ROW
    EXECUTE FUNCTION update_updated_at_column();
"#;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RegisterApprovals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RegisterApprovals::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RegisterApprovals::AdminId).uuid().not_null())
                    .col(ColumnDef::new(RegisterApprovals::SuperAdminId).uuid().null())
                    .col(
                        ColumnDef::new(RegisterApprovals::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(RegisterApprovals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(RegisterApprovals::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // FK → actors; deleting an actor removes its approval rows
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_register_approvals_admin_id")
                            .from(RegisterApprovals::Table, RegisterApprovals::AdminId)
                            .to(Actors::Table, Actors::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(STATUS_CHECK_SQL)
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(ADMIN_ID_INDEX_SQL)
            .await?;

        manager
            .get_connection()
            .execute_unprepared(STATUS_INDEX_SQL)
            .await?;

        manager
            .get_connection()
            .execute_unprepared(UPDATED_AT_TRIGGER_SQL)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_register_approvals_updated_at ON register_approvals;
                DROP INDEX IF EXISTS idx_register_approvals_admin_id;
                DROP INDEX IF EXISTS idx_register_approvals_status;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RegisterApprovals::Table).to_owned())
            .await?;

        // Shared with the actors trigger, dropped once both tables are gone.
        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RegisterApprovals {
    Table,
    Id,
    AdminId,
    SuperAdminId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Actors {
    Table,
    Id,
}
