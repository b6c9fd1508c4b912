//! Integration tests for RecipeClient against a mock endpoint

use crate::integration::mock_server::{closed_endpoint, silent_endpoint, MockServerFixture};
use recipe_finder::types::{DietaryFilters, RecipeQuery};
use recipe_finder::{Error, Recipe, RecipeClient, RecipeOutcome};
use serde_json::json;
use std::time::{Duration, Instant};

const THREE_RECIPES: &str = r#"{
    "recipes": [
        {"title": "Spinach omelette", "description": "Quick breakfast.", "ingredients": ["eggs", "spinach"], "cook_time_minutes": 10},
        {"title": "Green shakshuka", "description": "Eggs in greens.", "ingredients": "eggs, spinach, feta", "cook_time_minutes": "20"},
        {"title": "Frittata", "description": "", "ingredients": ["eggs"], "cook_time_minutes": null}
    ]
}"#;

#[tokio::test]
async fn test_posts_query_and_decodes_recipes() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_expecting_body(
            json!({
                "ingredients": "eggs, spinach",
                "filters": {
                    "vegetarian": true,
                    "vegan": false,
                    "gluten_free": true,
                    "dairy_free": false,
                    "nut_free": false
                }
            }),
            THREE_RECIPES,
        )
        .await;

    let client = fixture.create_test_client().expect("client");
    let query = RecipeQuery::new(
        "eggs, spinach",
        DietaryFilters::default().vegetarian(true).gluten_free(true),
    );
    let outcome = client.get_recipes(&query).await.expect("request");
    mock.assert_async().await;

    let RecipeOutcome::Recipes(recipes) = outcome else {
        panic!("expected recipes, got {:?}", outcome);
    };
    assert_eq!(recipes.len(), 3);
    assert_eq!(
        recipes[1],
        Recipe::new("Green shakshuka")
            .with_description("Eggs in greens.")
            .with_cook_time(20)
            .with_ingredients(["eggs", "spinach", "feta"])
    );
    assert_eq!(recipes[2].cook_time_minutes, None);
}

#[tokio::test]
async fn test_error_status_keeps_body() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response(502, r#"{"error": "Failed to call OpenAI API."}"#)
        .await;

    let client = fixture.create_test_client().expect("client");
    let err = client
        .get_recipes(&RecipeQuery::new("rice", DietaryFilters::default()))
        .await
        .unwrap_err();

    match &err {
        Error::Remote { status, body } => {
            assert_eq!(*status, 502);
            assert_eq!(body, r#"{"error": "Failed to call OpenAI API."}"#);
        }
        other => panic!("expected remote error, got {other:?}"),
    }
    assert_eq!(
        err.user_message(),
        r#"Server returned 502: {"error": "Failed to call OpenAI API."}"#
    );
}

#[tokio::test]
async fn test_error_field_on_success_status() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response(200, r#"{"error": "No recipes returned from AI."}"#)
        .await;

    let client = fixture.create_test_client().expect("client");
    let outcome = client
        .get_recipes(&RecipeQuery::new("rice", DietaryFilters::default()))
        .await
        .expect("request");
    assert_eq!(
        outcome,
        RecipeOutcome::ServerError("No recipes returned from AI.".into())
    );
}

#[tokio::test]
async fn test_empty_object_means_no_recipes() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_json_response(200, "{}").await;

    let client = fixture.create_test_client().expect("client");
    let outcome = client
        .get_recipes(&RecipeQuery::new("rice", DietaryFilters::default()))
        .await
        .expect("request");
    assert_eq!(outcome, RecipeOutcome::NoRecipes);
}

#[tokio::test]
async fn test_non_json_success_body() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_json_response(200, "<html>oops</html>").await;

    let client = fixture.create_test_client().expect("client");
    let err = client
        .get_recipes(&RecipeQuery::new("rice", DietaryFilters::default()))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[tokio::test]
async fn test_timeout_aborts_request() {
    let url = silent_endpoint().await;
    let client = RecipeClient::builder()
        .api_url(url)
        .timeout(Duration::from_millis(200))
        .build()
        .expect("client");

    let started = Instant::now();
    let err = client
        .get_recipes(&RecipeQuery::new("rice", DietaryFilters::default()))
        .await
        .unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert_eq!(err.user_message(), "Request timed out. Try again.");
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let url = closed_endpoint().await;
    let client = RecipeClient::builder()
        .api_url(url)
        .timeout(Duration::from_secs(2))
        .build()
        .expect("client");

    let err = client
        .get_recipes(&RecipeQuery::new("rice", DietaryFilters::default()))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
    assert!(!err.user_message().is_empty());
}
