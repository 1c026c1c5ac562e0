//! Repository implementations for database access.
//!
//! Each repository wraps a borrowed `PgConnection` (a pooled connection or an open
//! transaction) and exposes strongly-typed operations returning models from
//! [`crate::db::models`].
//!
//! # Available Repositories
//!
//! - [`Topics`]: topic listing and creation
//! - [`Users`]: user lookup and listing
//! - [`Articles`]: articles with derived comment counts; votes and deletion
//! - [`Comments`]: comments on articles; votes and deletion
//!
//! # Common Pattern
//!
//! ```ignore
//! use ncnews::db::handlers::{Articles, Repository};
//!
//! async fn example(pool: &sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut tx = pool.begin().await?;
//!     let mut repo = Articles::new(&mut tx);
//!
//!     if let Some(article) = repo.get_by_id(5).await? {
//!         println!("{} has {} comments", article.title, article.comment_count);
//!     }
//!
//!     tx.commit().await?;
//!     Ok(())
//! }
//! ```
//!
//! # The Repository Traits
//!
//! [`Repository`] covers `create`, `get_by_id`, `exists` and `list` for every table.
//! [`MutableRepository`] adds `update` (relative vote changes) and `delete` for the
//! tables the API lets clients mutate.

pub mod articles;
pub mod comments;
pub mod repository;
pub mod topics;
pub mod users;

pub use articles::Articles;
pub use comments::Comments;
pub use repository::{MutableRepository, Repository};
pub use topics::Topics;
pub use users::Users;
