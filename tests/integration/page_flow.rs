//! End-to-end submit flow: Document -> RecipePage -> mock endpoint -> Document

use crate::integration::mock_server::MockServerFixture;
use recipe_finder::page::{Document, PageState, RecipePage};
use recipe_finder::types::DietaryFilters;

#[tokio::test]
async fn test_submit_renders_escaped_cards() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json_response(
            200,
            r#"{"recipes": [
                {"title": "<script>alert(1)</script>", "description": "Tom's \"best\" stew", "ingredients": ["beef", "stock"], "cook_time_minutes": 90},
                {"title": "", "description": "Mystery", "ingredients": [], "cook_time_minutes": 0}
            ]}"#,
        )
        .await;

    let page = RecipePage::new(fixture.create_test_client().expect("client"));
    let mut doc = Document::with_search("beef, stock", DietaryFilters::default());
    let state = page.submit(&mut doc).await;

    let PageState::Rendered(recipes) = state else {
        panic!("expected rendered state");
    };
    assert_eq!(recipes.len(), 2);

    let html = doc.container_html();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("Tom&#39;s &quot;best&quot; stew"));
    assert!(html.contains("<span>90 min</span>"));
    assert!(html.contains(r#"<div class="title">Untitled</div>"#));
    assert!(html.contains("<span>—</span>"));
    assert!(!doc.no_results_visible());
}

#[tokio::test]
async fn test_submit_shows_server_status() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_json_response(500, "boom").await;

    let page = RecipePage::new(fixture.create_test_client().expect("client"));
    let mut doc = Document::with_search("eggs", DietaryFilters::default());
    let state = page.submit(&mut doc).await;

    assert_eq!(state, PageState::Failed("Server returned 500: boom".into()));
    assert_eq!(
        doc.container_html(),
        r#"<div class="recipe-card"><strong>Error:</strong> Server returned 500: boom</div>"#
    );
}

#[tokio::test]
async fn test_submit_empty_list_shows_notice() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_json_response(200, r#"{"recipes": []}"#).await;

    let page = RecipePage::new(fixture.create_test_client().expect("client"));
    let mut doc = Document::with_search("sawdust", DietaryFilters::default().vegan(true));
    assert_eq!(page.submit(&mut doc).await, PageState::Empty);
    assert!(doc.no_results_visible());
    assert_eq!(doc.container_html(), "");
}

#[tokio::test]
async fn test_blank_input_sends_nothing() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_unreachable().await;

    let page = RecipePage::new(fixture.create_test_client().expect("client"));
    let mut doc = Document::new();
    let state = page.submit(&mut doc).await;

    assert_eq!(state, PageState::Failed("Please enter some ingredients.".into()));
    mock.assert_async().await;
}
