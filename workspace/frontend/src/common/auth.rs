use common::CurrentUserDto;
use yew::prelude::*;

use crate::api_client::auth;

/// Session state shared with every page: the authenticated user, if any,
/// and a callback to re-check after login/logout.
#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub user: Option<CurrentUserDto>,
    /// False until the first `/auth/me` round trip resolves.
    pub loaded: bool,
    pub refresh: Callback<()>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.admin)
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let user = use_state(|| None::<CurrentUserDto>);
    let loaded = use_state(|| false);

    let refresh = {
        let user = user.clone();
        let loaded = loaded.clone();

        use_callback((), move |_, _| {
            let user = user.clone();
            let loaded = loaded.clone();

            wasm_bindgen_futures::spawn_local(async move {
                // Any failure here just means "not signed in"; no toast.
                match auth::me().await {
                    Ok(current) => user.set(Some(current)),
                    Err(_) => user.set(None),
                }
                loaded.set(true);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let context = AuthContext {
        user: (*user).clone(),
        loaded: *loaded,
        refresh,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
