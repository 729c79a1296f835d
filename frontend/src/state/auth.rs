use crate::{
    api::{ApiClient, ApiError, LoginRequest, SessionUser},
    state::{
        policy::{MenuPermissions, RolePolicy},
        session::Session,
    },
};
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub policy: RolePolicy,
    pub menus: MenuPermissions,
    pub loading: bool,
}

impl AuthState {
    pub fn from_session(session: Option<Session>) -> Self {
        let policy = session
            .as_ref()
            .map(|s| RolePolicy::from_role_name(&s.user.role))
            .unwrap_or_default();
        Self {
            session,
            policy,
            menus: MenuPermissions::default(),
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn employee_id(&self) -> Option<i64> {
        let session = self.session.as_ref()?;
        session
            .employee
            .as_ref()
            .map(|e| e.id)
            .or(session.user.employee_id)
    }
}

fn create_auth_context() -> AuthContext {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let (auth_state, set_auth_state) =
        create_signal(AuthState::from_session(api.session().load()));

    // Effects only run in the browser, so SSR tests never touch the network.
    create_effect(move |_| {
        if auth_state.with_untracked(AuthState::is_authenticated) {
            let api = api.clone();
            spawn_local(async move { restore_session(&api, set_auth_state).await });
        }
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

async fn load_menus(api: &ApiClient) -> MenuPermissions {
    match api.get_my_menus().await {
        Ok(menus) => MenuPermissions::from_menus(menus),
        Err(err) => {
            log::warn!("menu permissions unavailable, using role defaults: {}", err);
            MenuPermissions::default()
        }
    }
}

/// Confirms a persisted token is still accepted and pulls menu flags. A
/// rejected token ends the session.
pub async fn restore_session(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    match api.get_me().await {
        Ok(user) => {
            let menus = load_menus(api).await;
            set_auth_state.update(|state| {
                if let Some(session) = state.session.as_mut() {
                    session.user.full_name = user.full_name.or(session.user.full_name.take());
                }
                state.menus = menus;
            });
        }
        Err(err) if err.is_unauthorized() => {
            log::info!("stored session rejected, signing out");
            api.logout();
            set_auth_state.set(AuthState::default());
        }
        Err(err) => log::warn!("could not verify session: {}", err),
    }
}

pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match api.login(&request).await {
        Ok(_) => {
            let menus = load_menus(api).await;
            let mut next = AuthState::from_session(api.session().load());
            next.menus = menus;
            set_auth_state.set(next);
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub fn logout(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    api.logout();
    set_auth_state.set(AuthState::default());
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();
    Callback::new(move |_| logout(&api, set_auth))
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::{policy::Capability, session::SessionStore};

    fn login_mocks(server: &MockServer, role: &str) {
        server.mock(|when, then| {
            when.method(POST).path("/api/Auth/Login");
            then.status(200).json_body(serde_json::json!({
                "token": "jwt-123",
                "user": { "id": 1, "email": "ada@example.com", "role": role, "employeeId": 7 },
                "employee": {
                    "id": 7, "firstName": "Ada", "lastName": "Lovelace",
                    "email": "ada@example.com"
                }
            }));
        });
    }

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start_async().await;
        login_mocks(&server, "Admin");
        server.mock(|when, then| {
            when.method(GET).path("/api/Menu/MyMenus");
            then.status(200).json_body(serde_json::json!([
                { "menuKey": "employees", "canView": true, "canEdit": false }
            ]));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::with_session(SessionStore::in_memory()).with_base_url(server.url("/api"));

        login_request(
            LoginRequest {
                email: "ada@example.com".into(),
                password: "secret".into(),
            },
            &api,
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get();
        assert!(snapshot.is_authenticated());
        assert!(snapshot.policy.can(Capability::ViewAdministration));
        assert!(!snapshot.menus.can_edit("employees", true));
        assert_eq!(snapshot.employee_id(), Some(7));

        logout(&api, set_state);
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated());
        assert!(api.session().load().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn missing_menus_fall_back_to_role_policy() {
        let server = MockServer::start_async().await;
        login_mocks(&server, "Employee");
        server.mock(|when, then| {
            when.method(GET).path("/api/Menu/MyMenus");
            then.status(500).json_body(serde_json::json!({}));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::with_session(SessionStore::in_memory()).with_base_url(server.url("/api"));
        login_request(
            LoginRequest {
                email: "ada@example.com".into(),
                password: "secret".into(),
            },
            &api,
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get();
        assert!(snapshot.menus.is_empty());
        assert!(!snapshot.policy.can(Capability::ViewAdministration));
        runtime.dispose();
    }

    #[tokio::test]
    async fn rejected_token_signs_out_on_restore() {
        let server = MockServer::start_async().await;
        login_mocks(&server, "Employee");
        server.mock(|when, then| {
            when.method(GET).path("/api/Auth/Me");
            then.status(401).json_body(serde_json::json!({ "message": "Token expired" }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/Menu/MyMenus");
            then.status(200).json_body(serde_json::json!([]));
        });

        let runtime = create_runtime();
        let api = ApiClient::with_session(SessionStore::in_memory()).with_base_url(server.url("/api"));
        api.login(&LoginRequest {
            email: "ada@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
        let (state, set_state) = create_signal(AuthState::from_session(api.session().load()));
        assert!(state.get().is_authenticated());

        restore_session(&api, set_state).await;
        assert!(!state.get().is_authenticated());
        assert!(api.session().token().is_none());
        runtime.dispose();
    }
}
