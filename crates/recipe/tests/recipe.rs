use foodprep_recipe::{Command, Query, RecipeCategory, UpdateInput};
use foodprep_shared::Error;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_create_and_find() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    let created = command
        .create(
            foodprep_recipe::CreateInput {
                name: "  Pancakes ".to_owned(),
                ingredients: "eggs\nmilk\nflour".to_owned(),
                prep_time: 10,
                cook_time: 15,
                servings: 4,
                calories: 350,
                category: RecipeCategory::Breakfast,
                ..Default::default()
            },
            "john",
        )
        .await?;

    assert_eq!(created.name, "Pancakes");
    assert_eq!(created.user_id, "john");
    assert_eq!((created.prep_time, created.cook_time), (10, 15));

    let found = query.find(&created.id, "john").await?.unwrap();
    assert_eq!(found.category, RecipeCategory::Breakfast);
    assert_eq!(found.calories, 350);
    assert_eq!(found.ingredients, "eggs\nmilk\nflour");

    Ok(())
}

#[tokio::test]
async fn test_create_rejects_invalid_input() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());

    let err = command
        .create(helpers::recipe_input("   ", "eggs"), "john")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validate(_)));

    let err = command
        .create(
            foodprep_recipe::CreateInput {
                servings: 0,
                ..helpers::recipe_input("Soup", "water")
            },
            "john",
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validate(_)));

    Ok(())
}

#[tokio::test]
async fn test_create_keeps_maximum_times() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    let created = command
        .create(
            foodprep_recipe::CreateInput {
                prep_time: u32::MAX,
                cook_time: 1,
                ..helpers::recipe_input("Stock", "bones")
            },
            "john",
        )
        .await?;

    let found = query.find(&created.id, "john").await?.unwrap();
    assert_eq!(found.prep_time, u32::MAX);
    assert_eq!(found.cook_time, 1);

    Ok(())
}

#[tokio::test]
async fn test_list_is_scoped_to_owner()-> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    let fut = ["a", "b", "c"]
        .into_iter()
        .map(|name| command.create(helpers::recipe_input(name, "eggs"), "john"));

    for result in futures::future::join_all(fut).await {
        result?;
    }
    let albert = command
        .create(helpers::recipe_input("d", "eggs"), "albert")
        .await?;

    let recipes = query.list("john", None).await?;
    assert_eq!(recipes.len(), 3);
    assert!(recipes.iter().all(|r| r.user_id == "john"));

    assert_eq!(query.list("john", Some(2)).await?.len(), 2);
    assert_eq!(query.count("john").await?, 3);
    assert_eq!(query.count("albert").await?, 1);

    assert!(query.find(&albert.id, "john").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_update_and_delete_require_owner() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    let recipe = command
        .create(helpers::recipe_input("Omelette", "eggs"), "john")
        .await?;

    let err = command
        .update(
            &recipe.id,
            UpdateInput {
                calories: Some(10),
                ..Default::default()
            },
            "albert",
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    let err = command.delete(&recipe.id, "albert").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    let updated = command
        .update(
            &recipe.id,
            UpdateInput {
                calories: Some(420),
                category: Some(RecipeCategory::Dinner),
                ..Default::default()
            },
            "john",
        )
        .await?;
    assert_eq!(updated.calories, 420);
    assert_eq!(updated.category, RecipeCategory::Dinner);
    assert_eq!(updated.name, "Omelette");

    let err = command
        .update(&recipe.id, UpdateInput::default(), "john")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::User(_)));

    command.delete(&recipe.id, "john").await?;
    assert!(query.find(&recipe.id, "john").await?.is_none());

    let err = command.delete(&recipe.id, "john").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    Ok(())
}

#[tokio::test]
async fn test_find_ingredients_keeps_requested_order() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    let first = command.create(helpers::recipe_input("first", "eggs"), "john").await?;
    let second = command.create(helpers::recipe_input("second", "milk"), "john").await?;
    let foreign = command
        .create(helpers::recipe_input("foreign", "caviar"), "albert")
        .await?;

    let ids = vec![
        second.id.clone(),
        "missing".to_owned(),
        foreign.id.clone(),
        first.id.clone(),
    ];
    let found = query.find_ingredients(&ids, "john").await?;

    assert_eq!(
        found,
        vec![
            (second.id.clone(), "milk".to_owned()),
            (first.id.clone(), "eggs".to_owned()),
        ]
    );

    Ok(())
}
