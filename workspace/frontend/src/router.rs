use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::pages::author_detail::AuthorDetailPage;
use crate::pages::authors::AuthorsPage;
use crate::pages::book_detail::BookDetailPage;
use crate::pages::books::BooksPage;
use crate::pages::home::Home;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::reports::ReportsPage;
use crate::pages::user_detail::UserDetailPage;
use crate::pages::users::UsersPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/books")]
    Books,
    #[at("/books/:id")]
    BookDetail { id: i64 },
    #[at("/authors")]
    Authors,
    #[at("/authors/:id")]
    AuthorDetail { id: i64 },
    #[at("/users")]
    Users,
    #[at("/users/:id")]
    UserDetail { id: i64 },
    #[at("/reports")]
    Reports,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => html! { <Home /> },
        Route::Books => html! { <BooksPage /> },
        Route::BookDetail { id } => html! { <BookDetailPage {id} /> },
        Route::Authors => html! { <AuthorsPage /> },
        Route::AuthorDetail { id } => html! { <AuthorDetailPage {id} /> },
        Route::Users => html! { <UsersPage /> },
        Route::UserDetail { id } => html! { <UserDetailPage {id} /> },
        Route::Reports => html! { <ReportsPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}
