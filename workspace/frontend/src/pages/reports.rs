use yew::prelude::*;

use crate::components::layout::Layout;
use crate::components::reports::Reports;

#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    html! {
        <Layout title="Admin Reports">
            <Reports />
        </Layout>
    }
}
