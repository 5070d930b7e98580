use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::auth;
use crate::common::auth::AuthContext;
use crate::common::toast::ToastContext;
use crate::router::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let auth_ctx = use_context::<AuthContext>().unwrap();
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let navigator = use_navigator().unwrap();

    let on_logout = {
        let auth_ctx = auth_ctx.clone();
        let toast_ctx = toast_ctx.clone();
        let navigator = navigator.clone();

        Callback::from(move |_| {
            let auth_ctx = auth_ctx.clone();
            let toast_ctx = toast_ctx.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match auth::logout().await {
                    Ok(()) => {
                        auth_ctx.refresh.emit(());
                        navigator.push(&Route::Home);
                    }
                    Err(err) => {
                        toast_ctx.show_error(err.user_message("Logout failed."));
                    }
                }
            });
        })
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 gap-1">
                <Link<Route> to={Route::Home} classes="btn btn-ghost text-xl">
                    <i class="fas fa-book"></i>{" Library"}
                </Link<Route>>
                <Link<Route> to={Route::Books} classes="btn btn-ghost btn-sm">{"Books"}</Link<Route>>
                <Link<Route> to={Route::Authors} classes="btn btn-ghost btn-sm">{"Authors"}</Link<Route>>
                {if auth_ctx.is_admin() {
                    html! {
                        <>
                            <Link<Route> to={Route::Users} classes="btn btn-ghost btn-sm">{"Users"}</Link<Route>>
                            <Link<Route> to={Route::Reports} classes="btn btn-ghost btn-sm">{"Reports"}</Link<Route>>
                        </>
                    }
                } else {
                    html! {}
                }}
            </div>
            <div class="flex-none gap-2">
                {match &auth_ctx.user {
                    Some(user) => html! {
                        <>
                            <Link<Route> to={Route::UserDetail { id: user.id }} classes="btn btn-ghost btn-sm">
                                <i class="fas fa-user"></i>{format!(" {}", user.name)}
                            </Link<Route>>
                            <button class="btn btn-outline btn-sm" onclick={on_logout}>{"Logout"}</button>
                        </>
                    },
                    None => html! {
                        <>
                            <Link<Route> to={Route::Login} classes="btn btn-ghost btn-sm">{"Login"}</Link<Route>>
                            <Link<Route> to={Route::Register} classes="btn btn-primary btn-sm">{"Register"}</Link<Route>>
                        </>
                    },
                }}
            </div>
        </div>
    }
}
