mod meal_plan;
mod recipe;
mod shopping_item;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "foodprep",
    "m0001",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        recipe::CreateIdx1,
        meal_plan::CreateTable,
        meal_plan::CreateIdx1,
        shopping_item::CreateTable,
        shopping_item::CreateUk1
    ]
);
