use common::RegisterRequest;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::auth;
use crate::common::toast::ToastContext;
use crate::components::layout::Layout;
use crate::router::Route;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let form_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let navigator = use_navigator().unwrap();

    let on_submit = {
        let form_ref = form_ref.clone();
        let error_message = error_message.clone();
        let is_submitting = is_submitting.clone();
        let toast_ctx = toast_ctx.clone();
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

            let request = RegisterRequest {
                name: form_data.get("name").as_string().unwrap_or_default(),
                email: form_data.get("email").as_string().unwrap_or_default(),
                password: form_data.get("password").as_string().unwrap_or_default(),
            };

            if request.name.is_empty() || request.email.is_empty() || request.password.is_empty() {
                error_message.set(Some("Please fill all fields.".to_string()));
                return;
            }

            error_message.set(None);
            is_submitting.set(true);

            let error_message = error_message.clone();
            let is_submitting = is_submitting.clone();
            let toast_ctx = toast_ctx.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match auth::register(&request).await {
                    Ok(()) => {
                        toast_ctx.show_success(
                            "Registration successful! You can now log in.".to_string(),
                        );
                        navigator.push(&Route::Login);
                    }
                    Err(err) => {
                        error_message.set(Some(err.user_message("Registration failed.")));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <Layout title="Register">
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
                                <label class="label"><span class="label-text">{"Name"}</span></label>
                                <input type="text" name="name" class="input input-bordered" required={true} />
                            </div>
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
                                    html! { "Create Account" }
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
