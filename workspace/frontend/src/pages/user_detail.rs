use yew::prelude::*;

use crate::components::layout::Layout;
use crate::components::users::UserDetail;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: i64,
}

#[function_component(UserDetailPage)]
pub fn user_detail_page(props: &Props) -> Html {
    html! {
        <Layout title="User Profile">
            <UserDetail id={props.id} />
        </Layout>
    }
}
