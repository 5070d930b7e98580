use yew::prelude::*;

/// Centered loading spinner marking a content region as busy.
#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="flex justify-center items-center py-12">
            <span class="loading loading-spinner loading-lg"></span>
        </div>
    }
}
