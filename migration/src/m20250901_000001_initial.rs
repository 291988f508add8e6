use sea_orm_migration::prelude::extension::postgres::Type;
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    UserEmail,
    UserName,
    FoodName,
    Category,
    FoodType,
    Quantity,
    Price,
    TotalPrice,
    SelectedSize,
    Status,
    PaymentStatus,
    PaymentMethod,
    IsInRestaurant,
    TableNumber,
    ChairIndices,
    ContactNumber,
    Image,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Foods {
    Table,
    Id,
    Name,
    Category,
    FoodType,
    Price,
    Image,
    Available,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Admins {
    Table,
    Id,
    Email,
    PasswordHash,
    DisplayName,
    IsSuperAdmin,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Carts {
    Table,
    Id,
    UserEmail,
    UserName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CartItems {
    Table,
    Id,
    CartId,
    FoodId,
    FoodName,
    Category,
    FoodType,
    Quantity,
    Price,
    Image,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // enums
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("order_status"))
                    .values(vec![
                        Alias::new("Order"),
                        Alias::new("Preparing"),
                        Alias::new("Served"),
                        Alias::new("Completed"),
                    ])
                    .to_owned(),
            )
            .await?;
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("payment_status"))
                    .values(vec![Alias::new("Unpaid"), Alias::new("Paid")])
                    .to_owned(),
            )
            .await?;
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("payment_method"))
                    .values(vec![
                        Alias::new("UPI"),
                        Alias::new("Cash"),
                        Alias::new("Other"),
                    ])
                    .to_owned(),
            )
            .await?;
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("food_type"))
                    .values(vec![
                        Alias::new("Veg"),
                        Alias::new("Non-Veg"),
                        Alias::new("Other"),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Foods::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Foods::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Foods::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Foods::Category).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Foods::FoodType)
                            .custom(Alias::new("food_type"))
                            .not_null()
                            .default(Expr::cust("'Veg'::food_type")),
                    )
                    .col(ColumnDef::new(Foods::Price).double().not_null())
                    .col(ColumnDef::new(Foods::Image).text().null())
                    .col(
                        ColumnDef::new(Foods::Available)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Foods::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Foods::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Orders::UserEmail).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Orders::UserName)
                            .string_len(255)
                            .not_null()
                            .default("Guest User"),
                    )
                    .col(ColumnDef::new(Orders::FoodName).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Orders::Category)
                            .string_len(255)
                            .not_null()
                            .default("Uncategorized"),
                    )
                    .col(
                        ColumnDef::new(Orders::FoodType)
                            .custom(Alias::new("food_type"))
                            .not_null()
                            .default(Expr::cust("'Veg'::food_type")),
                    )
                    .col(ColumnDef::new(Orders::Quantity).integer().not_null())
                    .col(ColumnDef::new(Orders::Price).double().not_null())
                    .col(ColumnDef::new(Orders::TotalPrice).double().not_null())
                    .col(ColumnDef::new(Orders::SelectedSize).string_len(64).null())
                    .col(
                        ColumnDef::new(Orders::Status)
                            .custom(Alias::new("order_status"))
                            .not_null()
                            .default(Expr::cust("'Order'::order_status")),
                    )
                    .col(
                        ColumnDef::new(Orders::PaymentStatus)
                            .custom(Alias::new("payment_status"))
                            .not_null()
                            .default(Expr::cust("'Unpaid'::payment_status")),
                    )
                    .col(
                        ColumnDef::new(Orders::PaymentMethod)
                            .custom(Alias::new("payment_method"))
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Orders::IsInRestaurant)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Orders::TableNumber)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Orders::ChairIndices)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Orders::ContactNumber).string_len(32).null())
                    .col(ColumnDef::new(Orders::Image).text().null())
                    .col(
                        ColumnDef::new(Orders::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Orders::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_orders_user_email")
                    .table(Orders::Table)
                    .col(Orders::UserEmail)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_orders_status")
                    .table(Orders::Table)
                    .col(Orders::Status)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_orders_created_at")
                    .table(Orders::Table)
                    .col(Orders::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admins::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Admins::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Admins::PasswordHash).string_len(255).not_null())
                    .col(ColumnDef::new(Admins::DisplayName).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Admins::IsSuperAdmin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Admins::CreatedBy)
                            .string_len(255)
                            .not_null()
                            .default("system"),
                    )
                    .col(
                        ColumnDef::new(Admins::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Admins::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Carts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Carts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Carts::UserEmail)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Carts::UserName)
                            .string_len(255)
                            .not_null()
                            .default("Guest User"),
                    )
                    .col(
                        ColumnDef::new(Carts::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Carts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CartItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CartItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CartItems::CartId).big_integer().not_null())
                    .col(ColumnDef::new(CartItems::FoodId).big_integer().not_null())
                    .col(ColumnDef::new(CartItems::FoodName).string_len(255).not_null())
                    .col(
                        ColumnDef::new(CartItems::Category)
                            .string_len(255)
                            .not_null()
                            .default("Uncategorized"),
                    )
                    .col(
                        ColumnDef::new(CartItems::FoodType)
                            .custom(Alias::new("food_type"))
                            .not_null()
                            .default(Expr::cust("'Veg'::food_type")),
                    )
                    .col(
                        ColumnDef::new(CartItems::Quantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(CartItems::Price).double().not_null())
                    .col(ColumnDef::new(CartItems::Image).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_items_cart")
                            .from(CartItems::Table, CartItems::CartId)
                            .to(Carts::Table, Carts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cart_items_cart_food")
                    .table(CartItems::Table)
                    .col(CartItems::CartId)
                    .col(CartItems::FoodId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(CartItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Carts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Admins::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Foods::Table).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(Alias::new("food_type")).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(Alias::new("payment_method")).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(Alias::new("payment_status")).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(Alias::new("order_status")).to_owned())
            .await?;
        Ok(())
    }
}
