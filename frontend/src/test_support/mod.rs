#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Employee, SessionUser};
    use crate::state::auth::{AuthContext, AuthState};
    use crate::state::session::Session;
    use leptos::*;

    pub fn employee_record(id: i64, first: &str, last: &str) -> Employee {
        Employee {
            id,
            employee_code: Some(format!("EMP{:03}", id)),
            first_name: first.into(),
            last_name: last.into(),
            email: format!("{}@example.com", first.to_ascii_lowercase()),
            phone: None,
            department_id: Some(1),
            department_name: Some("Engineering".into()),
            position: Some("Engineer".into()),
            hire_date: None,
            status: "Active".into(),
            manager_id: None,
            address: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
        }
    }

    pub fn session_for(role: &str, full_name: &str, employee: Option<Employee>) -> Session {
        Session {
            token: "test-token".into(),
            user: SessionUser {
                id: 1,
                email: "user@example.com".into(),
                role: role.into(),
                department_id: Some(1),
                employee_id: employee.as_ref().map(|e| e.id),
                full_name: Some(full_name.into()),
            },
            employee,
        }
    }

    pub fn admin_session() -> Session {
        session_for("Admin", "Grace Hopper", None)
    }

    pub fn employee_session() -> Session {
        session_for(
            "Employee",
            "Ada Lovelace",
            Some(employee_record(7, "Ada", "Lovelace")),
        )
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn api_for(server: &crate::api::test_support::mock::MockServer) -> crate::api::ApiClient {
        crate::api::ApiClient::with_session(crate::state::session::SessionStore::in_memory())
            .with_base_url(server.url("/api"))
    }

    pub fn provide_auth(session: Option<Session>) -> AuthContext {
        let ctx = create_signal(AuthState::from_session(session));
        provide_context::<AuthContext>(ctx);
        ctx
    }
}
