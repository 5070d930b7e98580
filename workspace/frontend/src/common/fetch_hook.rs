use std::future::Future;
use std::rc::Rc;

use common::{report_failure, ApiError};
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::hooks::FetchState;

/// Fetches on mount and exposes a refetch callback. Failures are funneled
/// through the shared notification surface with the caller's fallback
/// message; the state always leaves `Loading`, success or not.
#[hook]
pub fn use_fetch_with_refetch<T, F, Fut>(
    fetch_fn: F,
    fallback: &'static str,
) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let fetch_fn = use_state(|| Rc::new(fetch_fn));

    let refetch = {
        let fetch_state = fetch_state.clone();
        let toast_ctx = toast_ctx.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback((), move |_, _| {
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();
            let fetch_fn = fetch_fn.clone();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let fut = (*fetch_fn)();
                match fut.await {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        report_failure(&toast_ctx, &err, fallback);
                        fetch_state.set(FetchState::Error(err.user_message(fallback)));
                    }
                }
            });
        })
    };

    // Fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}
