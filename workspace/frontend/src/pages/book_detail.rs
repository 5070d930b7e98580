use yew::prelude::*;

use crate::components::books::BookDetail;
use crate::components::layout::Layout;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: i64,
}

#[function_component(BookDetailPage)]
pub fn book_detail_page(props: &Props) -> Html {
    html! {
        <Layout title="Book Details">
            <BookDetail id={props.id} />
        </Layout>
    }
}
