pub mod authors;
pub mod books;
pub mod layout;
pub mod reports;
pub mod users;
