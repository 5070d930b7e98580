use yew::prelude::*;

use crate::components::layout::Layout;
use crate::components::users::UsersView;

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    html! {
        <Layout title="User Management">
            <UsersView />
        </Layout>
    }
}
