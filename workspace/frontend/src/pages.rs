pub mod author_detail;
pub mod authors;
pub mod book_detail;
pub mod books;
pub mod home;
pub mod login;
pub mod register;
pub mod reports;
pub mod user_detail;
pub mod users;
