use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub show: bool,
    pub message: String,
    #[prop_or("Confirm".to_string())]
    pub title: String,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Two-choice confirmation modal guarding destructive actions
/// (deactivate, delete, return, pay).
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_| on_confirm.emit(()))
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))}>
            <div class="modal-box max-w-md">
                <h3 class="font-bold text-lg">{&props.title}</h3>
                <p class="py-4">{&props.message}</p>
                <div class="modal-action">
                    <button class="btn btn-ghost" onclick={on_cancel}>{"Cancel"}</button>
                    <button class="btn btn-error" onclick={on_confirm}>{"Confirm"}</button>
                </div>
            </div>
        </dialog>
    }
}
