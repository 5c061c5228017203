use anyhow::Result;
use serde_json::json;

// Smoke script against a locally running server; run with
// `cargo test quick_dev -- --ignored --nocapture`.
#[tokio::test]
#[ignore = "requires a running server and database"]
async fn quick_dev() -> Result<()> {
    let hc = httpc_test::new_client("http://localhost:8080/api")?;

    hc.do_post(
        "/auth/register",
        json!({
          "name": "leo",
          "email": "leo@example.com",
          "password": "123456",
          "passwordConfirm": "123456",
        }),
    )
    .await?
    .print()
    .await?;

    hc.do_post(
        "/auth/login",
        json!({
          "email": "leo@example.com",
          "password": "123456",
        }),
    )
    .await?
    .print()
    .await?;

    hc.do_post(
        "/groups",
        json!({
          "title": "Rustaceans",
          "slug": "rustaceans",
          "description": "Posts about the crab language",
        }),
    )
    .await?
    .print()
    .await?;

    hc.do_post(
        "/posts",
        json!({
          "text": "First post from the smoke script",
        }),
    )
    .await?
    .print()
    .await?;

    hc.do_get("/posts?page=1").await?.print().await?;

    hc.do_get("/groups/rustaceans").await?.print().await?;

    hc.do_get("/profiles/leo").await?.print().await?;

    hc.do_post("/profiles/leo/follow", json!({})).await?.print().await?;

    hc.do_get("/feed").await?.print().await?;

    Ok(())
}
