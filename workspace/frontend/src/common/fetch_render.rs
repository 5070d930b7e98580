use yew::prelude::*;

use super::error::ErrorDisplay;
use super::loading::LoadingSpinner;
use crate::hooks::FetchState;

#[derive(Properties)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<T>,
    pub render: Callback<T, Html>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

/// Renders a content region from its fetch state: spinner while loading,
/// error panel with optional retry on failure, the `render` callback on
/// success.
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        FetchState::NotStarted => html! {},
        FetchState::Loading => html! { <LoadingSpinner /> },
        FetchState::Error(err) => html! {
            <ErrorDisplay message={err.clone()} on_retry={props.on_retry.clone()} />
        },
        FetchState::Success(data) => props.render.emit(data.clone()),
    }
}
