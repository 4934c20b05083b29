use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    UserId,
    Name,
    Description,
    Ingredients,
    Instructions,
    PrepTime,
    CookTime,
    Servings,
    Calories,
    Category,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum MealPlan {
    Table,
    Id,
    UserId,
    RecipeId,
    Date,
    MealType,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum ShoppingItem {
    Table,
    Id,
    UserId,
    Item,
    Completed,
    CreatedAt,
}
