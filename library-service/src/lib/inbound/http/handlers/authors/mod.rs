pub mod create_author;
pub mod delete_author;
pub mod get_author;
pub mod list_authors;
pub mod list_books_by_author;
pub mod update_author;

pub use create_author::create_author;
pub use delete_author::delete_author;
pub use get_author::get_author;
pub use list_authors::list_authors;
pub use list_books_by_author::list_books_by_author;
pub use update_author::update_author;
