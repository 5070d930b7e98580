use yew::prelude::*;

use crate::components::authors::AuthorsView;
use crate::components::layout::Layout;

#[function_component(AuthorsPage)]
pub fn authors_page() -> Html {
    html! {
        <Layout title="Authors">
            <AuthorsView />
        </Layout>
    }
}
