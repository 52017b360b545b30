//! Integration tests for the article and topic repositories.
//!
//! Each test gets a fresh database with migrations applied and the
//! `test_data` fixture loaded.

use ncnews_db::repositories::{ArticleRepo, TopicRepo};
use sqlx::PgPool;

#[sqlx::test(fixtures("test_data"))]
async fn test_list_topics_returns_all_rows(pool: PgPool) {
    let topics = TopicRepo::list(&pool).await.unwrap();

    let slugs: Vec<&str> = topics.iter().map(|t| t.slug.as_str()).collect();
    assert_eq!(slugs, ["cats", "mitch", "paper"]);
    assert_eq!(topics[1].description, "The man, the Mitch, the legend");
}

#[sqlx::test(fixtures("test_data"))]
async fn test_list_articles_newest_first(pool: PgPool) {
    let articles = ArticleRepo::list(&pool).await.unwrap();

    assert_eq!(articles.len(), 12);
    assert!(articles
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
    assert_eq!(articles[0].article_id, 3);
}

#[sqlx::test(fixtures("test_data"))]
async fn test_find_by_id_found(pool: PgPool) {
    let article = ArticleRepo::find_by_id(&pool, 2).await.unwrap().unwrap();

    assert_eq!(article.article_id, 2);
    assert_eq!(article.title, "Sony Vaio; or, The Laptop");
    assert_eq!(article.topic, "mitch");
    assert_eq!(article.votes, 0);
}

#[sqlx::test(fixtures("test_data"))]
async fn test_find_by_id_absent(pool: PgPool) {
    let article = ArticleRepo::find_by_id(&pool, 220).await.unwrap();
    assert!(article.is_none());
}

#[sqlx::test(fixtures("test_data"))]
async fn test_increment_votes_applies_delta(pool: PgPool) {
    let article = ArticleRepo::increment_votes(&pool, 1, -20)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(article.votes, 80);

    let reloaded = ArticleRepo::find_by_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!(reloaded.votes, 80);
}

#[sqlx::test(fixtures("test_data"))]
async fn test_increment_votes_can_go_negative(pool: PgPool) {
    let article = ArticleRepo::increment_votes(&pool, 3, -7)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(article.votes, -7);
}

#[sqlx::test(fixtures("test_data"))]
async fn test_increment_votes_absent_article(pool: PgPool) {
    let article = ArticleRepo::increment_votes(&pool, 687, 6).await.unwrap();
    assert!(article.is_none());
}

#[sqlx::test(fixtures("test_data"))]
async fn test_concurrent_increments_are_not_lost(pool: PgPool) {
    let mut handles = Vec::new();
    for _ in 0..20 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            ArticleRepo::increment_votes(&pool, 4, 1).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let article = ArticleRepo::find_by_id(&pool, 4).await.unwrap().unwrap();
    assert_eq!(article.votes, 20);
}

#[sqlx::test(fixtures("test_data"))]
async fn test_health_check(pool: PgPool) {
    ncnews_db::health_check(&pool).await.unwrap();
}
