//! Test utilities: application constructors and the shared fixture data.

use crate::config::{Config, DatabaseConfig, PoolSettings};
use crate::db::handlers::{Repository, Topics, Users};
use crate::db::models::{topics::TopicCreateDBRequest, users::UserCreateDBRequest};
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub async fn create_test_app(pool: PgPool) -> TestServer {
    create_test_app_with_config(pool, create_test_config()).await
}

pub async fn create_test_app_with_config(pool: PgPool, config: Config) -> TestServer {
    crate::Application::new_with_pool(config, pool)
        .expect("Failed to create application")
        .into_test_server()
}

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: DatabaseConfig {
            url: "postgres://localhost/nc_news_test".to_string(),
            pool: PoolSettings {
                max_connections: 1,
                min_connections: 1,
                ..Default::default()
            },
        },
        ..Default::default()
    }
}

struct ArticleRow {
    title: &'static str,
    topic: &'static str,
    author: &'static str,
    body: &'static str,
    created_at: &'static str,
    votes: i32,
}

struct CommentRow {
    article_id: i32,
    author: &'static str,
    body: &'static str,
    votes: i32,
    created_at: &'static str,
}

const TOPICS: [(&str, &str); 3] = [
    ("mitch", "The man, the Mitch, the legend"),
    ("cats", "Not dogs"),
    ("paper", "what books are made of"),
];

const USERS: [(&str, &str, &str); 4] = [
    (
        "butter_bridge",
        "jonny",
        "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
    ),
    (
        "icellusedkars",
        "sam",
        "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
    ),
    (
        "rogersop",
        "paul",
        "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
    ),
    (
        "lurker",
        "do_nothing",
        "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
    ),
];

const ARTICLES: [ArticleRow; 12] = [
    ArticleRow {
        title: "Living in the shadow of a great man",
        topic: "mitch",
        author: "butter_bridge",
        body: "I find this existence challenging",
        created_at: "2020-07-09T20:11:00Z",
        votes: 100,
    },
    ArticleRow {
        title: "Sony Vaio; or, The Laptop",
        topic: "mitch",
        author: "icellusedkars",
        body: "Call me Mitchell. Some years ago I thought I would buy a laptop.",
        created_at: "2020-10-16T05:03:00Z",
        votes: 0,
    },
    ArticleRow {
        title: "Eight pug gifs that remind me of mitch",
        topic: "mitch",
        author: "icellusedkars",
        body: "some gifs",
        created_at: "2020-11-03T09:12:00Z",
        votes: 0,
    },
    ArticleRow {
        title: "Student SUES Mitch!",
        topic: "mitch",
        author: "rogersop",
        body: "We all love Mitch and his wonderful, unique typing style.",
        created_at: "2020-05-06T01:14:00Z",
        votes: 0,
    },
    ArticleRow {
        title: "UNCOVERED: catspiracy to bring down democracy",
        topic: "cats",
        author: "rogersop",
        body: "Bastet walks amongst us, and the cats are taking arms!",
        created_at: "2020-08-03T13:14:00Z",
        votes: 0,
    },
    ArticleRow {
        title: "A",
        topic: "mitch",
        author: "icellusedkars",
        body: "Delicious tin of cat food",
        created_at: "2020-10-18T01:00:00Z",
        votes: 0,
    },
    ArticleRow {
        title: "Z",
        topic: "mitch",
        author: "icellusedkars",
        body: "I was hungry.",
        created_at: "2020-01-07T14:08:00Z",
        votes: 0,
    },
    ArticleRow {
        title: "Does Mitch predate civilisation?",
        topic: "mitch",
        author: "icellusedkars",
        body: "Archaeologists have uncovered a gigantic statue from the dawn of humanity.",
        created_at: "2020-04-17T01:08:00Z",
        votes: 0,
    },
    ArticleRow {
        title: "They're not exactly dogs, are they?",
        topic: "mitch",
        author: "butter_bridge",
        body: "Well? Think about it.",
        created_at: "2020-06-06T09:10:00Z",
        votes: 0,
    },
    ArticleRow {
        title: "Seven inspirational thought leaders from Manchester UK",
        topic: "mitch",
        author: "rogersop",
        body: "Who are we kidding, there is only one, and it's Mitch!",
        created_at: "2020-05-14T04:15:00Z",
        votes: 0,
    },
    ArticleRow {
        title: "Am I a cat?",
        topic: "mitch",
        author: "icellusedkars",
        body: "Having run out of ideas for articles, I am staring at the wall.",
        created_at: "2020-01-15T22:21:00Z",
        votes: 0,
    },
    ArticleRow {
        title: "Moustache",
        topic: "mitch",
        author: "butter_bridge",
        body: "Have you seen the size of that thing?",
        created_at: "2020-10-11T11:24:00Z",
        votes: 0,
    },
];

const COMMENTS: [CommentRow; 18] = [
    CommentRow {
        article_id: 9,
        author: "butter_bridge",
        body: "Oh, I've got compassion running out of my nose, pal! I'm the Sultan of Sentiment!",
        votes: 16,
        created_at: "2020-04-06T12:17:00Z",
    },
    CommentRow {
        article_id: 1,
        author: "butter_bridge",
        body: "The beautiful thing about treasure is that it exists.",
        votes: 14,
        created_at: "2020-10-31T03:03:00Z",
    },
    CommentRow {
        article_id: 1,
        author: "icellusedkars",
        body: "Replacing the quiet elegance of the dark suit and tie with the casual indifference of these muted earth tones.",
        votes: 100,
        created_at: "2020-03-01T01:13:00Z",
    },
    CommentRow {
        article_id: 1,
        author: "icellusedkars",
        body: "I carry a log, yes. Is it funny to you?",
        votes: -100,
        created_at: "2020-02-23T12:01:00Z",
    },
    CommentRow {
        article_id: 1,
        author: "icellusedkars",
        body: "I hate streaming noses",
        votes: 0,
        created_at: "2020-11-03T21:00:00Z",
    },
    CommentRow {
        article_id: 1,
        author: "icellusedkars",
        body: "I hate streaming eyes even more",
        votes: 0,
        created_at: "2020-04-11T21:02:00Z",
    },
    CommentRow {
        article_id: 1,
        author: "icellusedkars",
        body: "Lobster pot",
        votes: 0,
        created_at: "2020-05-15T20:19:00Z",
    },
    CommentRow {
        article_id: 1,
        author: "icellusedkars",
        body: "Delicious crackerbreads",
        votes: 0,
        created_at: "2020-04-14T20:19:00Z",
    },
    CommentRow {
        article_id: 1,
        author: "icellusedkars",
        body: "Superficially charming",
        votes: 0,
        created_at: "2020-01-01T03:08:00Z",
    },
    CommentRow {
        article_id: 3,
        author: "icellusedkars",
        body: "git push origin master",
        votes: 0,
        created_at: "2020-06-20T07:24:00Z",
    },
    CommentRow {
        article_id: 3,
        author: "icellusedkars",
        body: "Ambidextrous marsupial",
        votes: 0,
        created_at: "2020-09-19T23:10:00Z",
    },
    CommentRow {
        article_id: 1,
        author: "icellusedkars",
        body: "Massive intercranial brain haemorrhage",
        votes: 0,
        created_at: "2020-03-02T07:10:00Z",
    },
    CommentRow {
        article_id: 1,
        author: "icellusedkars",
        body: "Fruit pastilles",
        votes: 0,
        created_at: "2020-06-15T10:25:00Z",
    },
    CommentRow {
        article_id: 5,
        author: "icellusedkars",
        body: "What do you see? I have no idea where this will lead us.",
        votes: 16,
        created_at: "2020-06-09T05:00:00Z",
    },
    CommentRow {
        article_id: 5,
        author: "butter_bridge",
        body: "I am 100% sure that we're not completely sure.",
        votes: 1,
        created_at: "2020-11-24T00:08:00Z",
    },
    CommentRow {
        article_id: 6,
        author: "butter_bridge",
        body: "This is a bad article name",
        votes: 1,
        created_at: "2020-10-11T15:23:00Z",
    },
    CommentRow {
        article_id: 9,
        author: "icellusedkars",
        body: "The owls are not what they seem.",
        votes: 20,
        created_at: "2020-03-14T17:02:00Z",
    },
    CommentRow {
        article_id: 1,
        author: "butter_bridge",
        body: "This morning, I showered for nine minutes.",
        votes: 16,
        created_at: "2020-07-21T00:20:00Z",
    },
];

fn timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("fixture timestamps are RFC 3339")
}

/// Insert the fixed fixture. Rows go in in order, so articles get ids 1..=12 and comments 1..=18.
pub async fn seed_test_data(pool: &PgPool) {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");

    for (slug, description) in TOPICS {
        Topics::new(&mut conn)
            .create(&TopicCreateDBRequest {
                slug: slug.to_string(),
                description: description.to_string(),
            })
            .await
            .expect("Failed to insert topic");
    }

    for (username, name, avatar_url) in USERS {
        Users::new(&mut conn)
            .create(&UserCreateDBRequest {
                username: username.to_string(),
                name: name.to_string(),
                avatar_url: Some(avatar_url.to_string()),
            })
            .await
            .expect("Failed to insert user");
    }

    // Timestamps and vote counts are fixed, so these bypass the repositories
    for article in &ARTICLES {
        sqlx::query("INSERT INTO articles (title, topic, author, body, created_at, votes) VALUES ($1, $2, $3, $4, $5, $6)")
            .bind(article.title)
            .bind(article.topic)
            .bind(article.author)
            .bind(article.body)
            .bind(timestamp(article.created_at))
            .bind(article.votes)
            .execute(&mut *conn)
            .await
            .expect("Failed to insert article");
    }

    for comment in &COMMENTS {
        sqlx::query("INSERT INTO comments (article_id, author, body, votes, created_at) VALUES ($1, $2, $3, $4, $5)")
            .bind(comment.article_id)
            .bind(comment.author)
            .bind(comment.body)
            .bind(comment.votes)
            .bind(timestamp(comment.created_at))
            .execute(&mut *conn)
            .await
            .expect("Failed to insert comment");
    }
}
