pub mod author;
pub mod book;
pub mod user;

pub use author::PostgresAuthorRepository;
pub use book::PostgresBookRepository;
pub use user::PostgresUserRepository;
