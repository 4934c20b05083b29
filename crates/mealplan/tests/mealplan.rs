use foodprep_mealplan::{Command, MealType, Query, UNKNOWN_RECIPE_LABEL, UpdateInput};
use foodprep_shared::{Error, parse_date};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_create_and_list_by_date() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());
    let omelette = helpers::create_recipe(&state, "Omelette", 300, "john").await?;
    let curry = helpers::create_recipe(&state, "Curry", 450, "john").await?;

    command
        .create(helpers::plan(&curry, "2024-03-04", MealType::Dinner), "john")
        .await?;
    let breakfast = command
        .create(helpers::plan(&omelette, "2024-03-04", MealType::Breakfast), "john")
        .await?;
    command
        .create(helpers::plan(&curry, "2024-03-05", MealType::Lunch), "john")
        .await?;

    assert_eq!(breakfast.label, "Omelette");
    assert_eq!(breakfast.calories(), 300);

    let day = query.list("john", Some(parse_date("2024-03-04")?)).await?;
    let meal_types = day.iter().map(|m| m.meal_type).collect::<Vec<_>>();
    assert_eq!(meal_types, vec![MealType::Breakfast, MealType::Dinner]);

    let all = query.list("john", None).await?;
    assert_eq!(all.len(), 3);
    assert_eq!(all[2].date, "2024-03-05");

    Ok(())
}

#[tokio::test]
async fn test_create_rejects_bad_date_and_foreign_recipe() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let omelette = helpers::create_recipe(&state, "Omelette", 300, "john").await?;

    let err = command
        .create(helpers::plan(&omelette, "2024-13-40", MealType::Lunch), "john")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::User(_)));

    let err = command
        .create(helpers::plan(&omelette, "2024-03-04", MealType::Lunch), "albert")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    let err = command
        .create(helpers::plan("missing", "2024-03-04", MealType::Lunch), "john")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    Ok(())
}

#[tokio::test]
async fn test_update_and_delete_are_owner_scoped() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());
    let omelette = helpers::create_recipe(&state, "Omelette", 300, "john").await?;
    let entry = command
        .create(helpers::plan(&omelette, "2024-03-04", MealType::Breakfast), "john")
        .await?;

    let err = command
        .update(
            &entry.id,
            UpdateInput {
                meal_type: Some(MealType::Snack),
                ..Default::default()
            },
            "albert",
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    let updated = command
        .update(
            &entry.id,
            UpdateInput {
                date: Some("2024-03-06".to_owned()),
                meal_type: Some(MealType::Snack),
                ..Default::default()
            },
            "john",
        )
        .await?;
    assert_eq!(updated.date, "2024-03-06");
    assert_eq!(updated.meal_type, MealType::Snack);

    let err = command
        .update(&entry.id, UpdateInput::default(), "john")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::User(_)));

    let err = command.delete(&entry.id, "albert").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    command.delete(&entry.id, "john").await?;
    assert!(query.find(&entry.id, "john").await?.is_none());

    let err = command.delete(&entry.id, "john").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    Ok(())
}

#[tokio::test]
async fn test_deleted_recipe_leaves_dangling_entry() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());
    let omelette = helpers::create_recipe(&state, "Omelette", 300, "john").await?;
    let entry = command
        .create(helpers::plan(&omelette, "2024-03-04", MealType::Breakfast), "john")
        .await?;

    foodprep_recipe::Command::new(state.clone())
        .delete(&omelette, "john")
        .await?;

    let entry = query.find(&entry.id, "john").await?.unwrap();
    assert!(entry.is_dangling());
    assert_eq!(entry.label, UNKNOWN_RECIPE_LABEL);
    assert_eq!(entry.calories(), 0);

    Ok(())
}

#[tokio::test]
async fn test_daily_nutrition() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());
    let omelette = helpers::create_recipe(&state, "Omelette", 300, "john").await?;
    let curry = helpers::create_recipe(&state, "Curry", 450, "john").await?;
    let cake = helpers::create_recipe(&state, "Cake", 600, "john").await?;

    command
        .create(helpers::plan(&omelette, "2024-03-04", MealType::Breakfast), "john")
        .await?;
    command
        .create(helpers::plan(&curry, "2024-03-04", MealType::Dinner), "john")
        .await?;
    command
        .create(helpers::plan(&cake, "2024-03-04", MealType::Snack), "john")
        .await?;
    command
        .create(helpers::plan(&curry, "2024-03-05", MealType::Dinner), "john")
        .await?;
    foodprep_recipe::Command::new(state.clone())
        .delete(&cake, "john")
        .await?;

    let daily = query
        .daily_nutrition("john", parse_date("2024-03-04")?)
        .await?;
    assert_eq!(daily.date, "2024-03-04");
    assert_eq!(daily.total_calories, 750);
    assert_eq!(daily.meal_breakdown.breakfast, 300);
    assert_eq!(daily.meal_breakdown.dinner, 450);
    assert_eq!(daily.meal_breakdown.snack, 0);
    assert_eq!(daily.meals.len(), 3);
    assert_eq!(daily.goal.remaining, 1250);
    assert_eq!(daily.goal.progress, 37.5);

    let other = query
        .daily_nutrition("albert", parse_date("2024-03-04")?)
        .await?;
    assert_eq!(other.total_calories, 0);
    assert!(other.meals.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_weekly_nutrition() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());
    let big = helpers::create_recipe(&state, "Big", 2000, "john").await?;
    let medium = helpers::create_recipe(&state, "Medium", 1800, "john").await?;

    command
        .create(helpers::plan(&big, "2024-03-04", MealType::Dinner), "john")
        .await?;
    command
        .create(helpers::plan(&medium, "2024-03-06", MealType::Dinner), "john")
        .await?;
    // Outside the week of 2024-03-07.
    command
        .create(helpers::plan(&big, "2024-03-10", MealType::Dinner), "john")
        .await?;

    let weekly = query
        .weekly_nutrition("john", parse_date("2024-03-07")?)
        .await?;
    assert_eq!(weekly.start, "2024-03-03");
    assert_eq!(weekly.end, "2024-03-09");
    assert_eq!(weekly.daily_totals.len(), 2);
    assert_eq!(weekly.daily_totals["2024-03-04"], 2000);
    assert_eq!(weekly.daily_totals["2024-03-06"], 1800);
    assert_eq!(weekly.average, 1900);

    let empty = query
        .weekly_nutrition("john", parse_date("2024-04-17")?)
        .await?;
    assert!(empty.daily_totals.is_empty());
    assert_eq!(empty.average, 0);

    Ok(())
}
