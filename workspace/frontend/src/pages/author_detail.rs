use yew::prelude::*;

use crate::components::authors::AuthorDetail;
use crate::components::layout::Layout;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: i64,
}

#[function_component(AuthorDetailPage)]
pub fn author_detail_page(props: &Props) -> Html {
    html! {
        <Layout title="Author Details">
            <AuthorDetail id={props.id} />
        </Layout>
    }
}
