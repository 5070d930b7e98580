use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::router::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <Layout title="Welcome">
            <div class="hero min-h-[60vh] bg-base-200 rounded-box">
                <div class="hero-content text-center">
                    <div class="max-w-md">
                        <h1 class="text-5xl font-bold">{"Welcome to the Library"}</h1>
                        <p class="py-6">
                            {"Browse the catalog, discover authors, and manage your "}
                            {"rentals from one place."}
                        </p>
                        <div class="flex gap-4 justify-center">
                            <Link<Route> to={Route::Books} classes="btn btn-primary">
                                {"Browse Books"}
                            </Link<Route>>
                            <Link<Route> to={Route::Authors} classes="btn btn-outline">
                                {"Authors"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
