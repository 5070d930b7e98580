use yew::prelude::*;

use crate::components::books::BookCatalog;
use crate::components::layout::Layout;

#[function_component(BooksPage)]
pub fn books_page() -> Html {
    html! {
        <Layout title="Book Catalog">
            <BookCatalog />
        </Layout>
    }
}
