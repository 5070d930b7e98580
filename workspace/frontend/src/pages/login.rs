use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::auth;
use crate::common::auth::AuthContext;
use crate::components::layout::Layout;
use crate::router::Route;

/// Login form. Failures stay on the page as inline error text instead of a
/// toast, mirroring the dedicated error region of the login screen.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let form_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);
    let auth_ctx = use_context::<AuthContext>().unwrap();
    let navigator = use_navigator().unwrap();

    let on_submit = {
        let form_ref = form_ref.clone();
        let error_message = error_message.clone();
        let is_submitting = is_submitting.clone();
        let auth_ctx = auth_ctx.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_submitting {
                return;
            }

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let Ok(form_data) = FormData::new_with_form(&form) else {
                return;
            };

            error_message.set(None);
            is_submitting.set(true);

            let error_message = error_message.clone();
            let is_submitting = is_submitting.clone();
            let auth_ctx = auth_ctx.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match auth::login(form_data).await {
                    Ok(()) => {
                        auth_ctx.refresh.emit(());
                        navigator.push(&Route::Home);
                    }
                    Err(err) => {
                        error_message.set(Some(err.user_message("Invalid email or password.")));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <Layout title="Login">
            <div class="flex justify-center">
                <div class="card bg-base-100 shadow w-full max-w-md">
                    <div class="card-body">
                        {if let Some(error) = (*error_message).as_ref() {
                            html! {
                                <div class="alert alert-error">
                                    <i class="fas fa-exclamation-circle"></i>
                                    <span>{error}</span>
                                </div>
                            }
                        } else {
                            html! {}
                        }}

                        <form ref={form_ref} onsubmit={on_submit} class="space-y-4">
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Email"}</span></label>
                                <input type="email" name="email" class="input input-bordered" required={true} />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Password"}</span></label>
                                <input type="password" name="password" class="input input-bordered" required={true} />
                            </div>
                            <button type="submit" class="btn btn-primary w-full" disabled={*is_submitting}>
                                {if *is_submitting {
                                    html! { <span class="loading loading-spinner loading-sm"></span> }
                                } else {
                                    html! { "Login" }
                                }}
                            </button>
                        </form>

                        <p class="text-sm text-center">
                            {"No account yet? "}
                            <Link<Route> to={Route::Register} classes="link link-primary">{"Register"}</Link<Route>>
                        </p>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
