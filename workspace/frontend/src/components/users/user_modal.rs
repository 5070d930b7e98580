use common::{report_failure, CreateUserRequest};
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::api_client::users;
use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct UserModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub on_success: Callback<()>,
}

#[function_component(UserModal)]
pub fn user_modal(props: &UserModalProps) -> Html {
    let form_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let validation_error = use_state(|| None::<String>);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let on_submit = {
        let form_ref = form_ref.clone();
        let is_submitting = is_submitting.clone();
        let validation_error = validation_error.clone();
        let toast_ctx = toast_ctx.clone();
        let on_close = props.on_close.clone();
        let on_success = props.on_success.clone();

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

            let request = CreateUserRequest {
                name: form_data.get("name").as_string().unwrap_or_default(),
                email: form_data.get("email").as_string().unwrap_or_default(),
                password: form_data.get("password").as_string().unwrap_or_default(),
            };

            if request.name.trim().is_empty()
                || request.email.trim().is_empty()
                || request.password.is_empty()
            {
                validation_error.set(Some("Please fill all fields.".to_string()));
                return;
            }

            validation_error.set(None);
            is_submitting.set(true);

            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let toast_ctx = toast_ctx.clone();
            let on_close = on_close.clone();
            let on_success = on_success.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match users::create(&request).await {
                    Ok(user) => {
                        toast_ctx.show_success(format!("User \"{}\" created.", user.name));
                        form.reset();
                        on_success.emit(());
                        on_close.emit(());
                    }
                    Err(err) => {
                        report_failure(&toast_ctx, &err, "Failed to create user.");
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        let is_submitting = *is_submitting;
        Callback::from(move |_| {
            if !is_submitting {
                on_close.emit(());
            }
        })
    };

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))}>
            <div class="modal-box max-w-md">
                <h3 class="font-bold text-lg">{"Add User"}</h3>

                {if let Some(error) = (*validation_error).as_ref() {
                    html! {
                        <div class="alert alert-warning mt-4">
                            <span>{error}</span>
                        </div>
                    }
                } else {
                    html! {}
                }}

                <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-4">
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
                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            {if *is_submitting {
                                html! { <span class="loading loading-spinner loading-sm"></span> }
                            } else {
                                html! { "Create" }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
