//! OpenAPI documentation for the news API.
//!
//! Served as JSON at `/api/openapi.json` and rendered with Scalar at `/api/docs`.

use utoipa::OpenApi;

use crate::{api, errors};

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::endpoints::get_endpoints,
        api::handlers::topics::list_topics,
        api::handlers::topics::create_topic,
        api::handlers::users::list_users,
        api::handlers::users::get_user,
        api::handlers::articles::list_articles,
        api::handlers::articles::create_article,
        api::handlers::articles::get_article,
        api::handlers::articles::update_article_votes,
        api::handlers::articles::delete_article,
        api::handlers::comments::list_comments,
        api::handlers::comments::create_comment,
        api::handlers::comments::update_comment_votes,
        api::handlers::comments::delete_comment,
    ),
    components(
        schemas(
            errors::ErrorBody,
            api::handlers::endpoints::EndpointCatalog,
            api::models::topics::TopicCreate,
            api::models::topics::TopicResponse,
            api::models::topics::TopicEnvelope,
            api::models::topics::TopicsEnvelope,
            api::models::users::UserResponse,
            api::models::users::UserSummaryResponse,
            api::models::users::UserEnvelope,
            api::models::users::UsersEnvelope,
            api::models::articles::ArticleCreate,
            api::models::articles::ArticleResponse,
            api::models::articles::ArticleSummaryResponse,
            api::models::articles::ArticleEnvelope,
            api::models::articles::ArticlesEnvelope,
            api::models::comments::CommentCreate,
            api::models::comments::CommentResponse,
            api::models::comments::CommentEnvelope,
            api::models::comments::CommentsEnvelope,
            api::models::votes::VoteUpdate,
        )
    ),
    tags(
        (name = "discovery", description = "Catalog of the available endpoints."),
        (name = "topics", description = "Topics that articles are filed under."),
        (name = "users", description = "Users who write articles and comments."),
        (name = "articles", description = "Articles, their comment counts and votes.

Listings accept `sort_by` (created_at, title, topic, author, votes, comment_count), `order` (asc, desc) and `topic`."),
        (name = "comments", description = "Comments on articles and their votes."),
    ),
    info(
        title = "NC News API",
        version = "1.0.0",
        description = "REST API over articles, comments, topics and users.

## Errors

Every error response carries a JSON body with a single `msg` field:

```json
{ \"msg\": \"Article 9999 not found\" }
```

Unknown paths return `404` with the plain text body `Path not found`.",
    ),
)]
pub struct ApiDoc;
