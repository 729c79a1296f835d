use super::utils::validate_credentials;
use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    /// Validates locally and dispatches; invalid input never reaches the API.
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let email = self.email.get_untracked().trim().to_string();
        let password = self.password.get_untracked();
        if let Err(err) = validate_credentials(&email, &password) {
            self.error.set(Some(err));
            return;
        }
        self.error.set(None);
        self.login_action.dispatch(LoginRequest { email, password });
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    password.set(String::new());
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/dashboard");
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        email,
        password,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_auth, ssr::with_runtime};

    #[test]
    fn defaults_are_empty() {
        with_runtime(|| {
            provide_auth(None);
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.email.get().is_empty());
        });
    }

    #[test]
    fn invalid_submit_sets_error_without_dispatch() {
        with_runtime(|| {
            provide_auth(None);
            let vm = use_login_view_model();
            vm.email.set("ada".into());
            vm.password.set("secret".into());
            vm.submit();
            assert_eq!(
                vm.error.get().map(|e| e.message),
                Some("Please enter a valid email address".to_string())
            );
            assert_eq!(vm.login_action.version().get_untracked(), 0);
        });
    }
}
