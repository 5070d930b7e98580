use yew::prelude::*;

use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar />
            <main class="flex-1 p-6 overflow-y-auto">
                <h1 class="text-2xl font-bold mb-4">{ &props.title }</h1>
                { for props.children.iter() }
            </main>
        </div>
    }
}
