use super::{
    repository,
    utils::{build_password_change, build_profile_update},
};
use crate::api::{ApiClient, ApiError, ChangePasswordRequest, Employee, ProfileUpdate};
use crate::state::{
    flash::{create_flash, Flash},
    loader::{create_loader, Loader},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ProfileForm {
    pub editing: RwSignal<bool>,
    pub phone: RwSignal<String>,
    pub address: RwSignal<String>,
    pub emergency_name: RwSignal<String>,
    pub emergency_phone: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
}

impl ProfileForm {
    fn new() -> Self {
        Self {
            editing: create_rw_signal(false),
            phone: create_rw_signal(String::new()),
            address: create_rw_signal(String::new()),
            emergency_name: create_rw_signal(String::new()),
            emergency_phone: create_rw_signal(String::new()),
            error: create_rw_signal(None),
        }
    }

    pub fn begin(&self, employee: &Employee) {
        self.phone.set(employee.phone.clone().unwrap_or_default());
        self.address.set(employee.address.clone().unwrap_or_default());
        self.emergency_name
            .set(employee.emergency_contact_name.clone().unwrap_or_default());
        self.emergency_phone
            .set(employee.emergency_contact_phone.clone().unwrap_or_default());
        self.error.set(None);
        self.editing.set(true);
    }

    pub fn cancel(&self) {
        self.editing.set(false);
        self.error.set(None);
    }
}

#[derive(Clone, Copy)]
pub struct PasswordForm {
    pub current: RwSignal<String>,
    pub new_password: RwSignal<String>,
    pub confirm: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
}

impl PasswordForm {
    fn new() -> Self {
        Self {
            current: create_rw_signal(String::new()),
            new_password: create_rw_signal(String::new()),
            confirm: create_rw_signal(String::new()),
            error: create_rw_signal(None),
        }
    }

    pub fn clear(&self) {
        self.current.set(String::new());
        self.new_password.set(String::new());
        self.confirm.set(String::new());
        self.error.set(None);
    }
}

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub profile: Loader<Employee>,
    pub form: ProfileForm,
    pub save_action: Action<ProfileUpdate, Result<Employee, ApiError>>,
    pub password: PasswordForm,
    pub password_action: Action<ChangePasswordRequest, Result<(), ApiError>>,
    pub flash: Flash,
}

impl ProfileViewModel {
    pub fn start_editing(&self) {
        if let Some(employee) = self.profile.data() {
            self.form.begin(&employee);
        }
    }

    pub fn save(&self) {
        let form = self.form;
        match build_profile_update(
            &form.phone.get_untracked(),
            &form.address.get_untracked(),
            &form.emergency_name.get_untracked(),
            &form.emergency_phone.get_untracked(),
        ) {
            Ok(update) => {
                form.error.set(None);
                self.save_action.dispatch(update);
            }
            Err(err) => form.error.set(Some(err)),
        }
    }

    pub fn change_password(&self) {
        let password = self.password;
        match build_password_change(
            &password.current.get_untracked(),
            &password.new_password.get_untracked(),
            &password.confirm.get_untracked(),
        ) {
            Ok(request) => {
                password.error.set(None);
                self.password_action.dispatch(request);
            }
            Err(err) => password.error.set(Some(err)),
        }
    }
}

pub fn use_profile_view_model() -> ProfileViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let profile = {
        let api = api.clone();
        create_loader(
            || (),
            move |_| {
                let api = api.clone();
                async move { repository::load_profile(&api).await }
            },
        )
    };
    let save_action = {
        let api = api.clone();
        create_action(move |update: &ProfileUpdate| {
            let api = api.clone();
            let update = update.clone();
            async move { repository::save_profile(&api, update).await }
        })
    };
    let password_action = create_action(move |request: &ChangePasswordRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { repository::change_password(&api, request).await }
    });

    let form = ProfileForm::new();
    let password = PasswordForm::new();
    let flash = create_flash();

    create_effect(move |_| match save_action.value().get() {
        Some(Ok(employee)) => {
            profile.set_ready(employee);
            form.cancel();
            flash.show("Profile updated");
        }
        Some(Err(err)) => form.error.set(Some(err)),
        None => {}
    });
    create_effect(move |_| match password_action.value().get() {
        Some(Ok(())) => {
            password.clear();
            flash.show("Password changed");
        }
        Some(Err(err)) => password.error.set(Some(err)),
        None => {}
    });

    ProfileViewModel {
        profile,
        form,
        save_action,
        password,
        password_action,
        flash,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee_record, ssr::with_runtime};

    #[test]
    fn editing_starts_from_loaded_profile() {
        with_runtime(|| {
            let vm = use_profile_view_model();
            vm.start_editing();
            assert!(!vm.form.editing.get());

            let mut employee = employee_record(7, "Ada", "Lovelace");
            employee.phone = Some("555-0100".into());
            vm.profile.set_ready(employee);
            vm.start_editing();
            assert!(vm.form.editing.get());
            assert_eq!(vm.form.phone.get(), "555-0100");
        });
    }

    #[test]
    fn mismatched_passwords_stay_local() {
        with_runtime(|| {
            let vm = use_profile_view_model();
            vm.password.current.set("old-pass".into());
            vm.password.new_password.set("longenough".into());
            vm.password.confirm.set("longenougH".into());
            vm.change_password();
            assert_eq!(
                vm.password.error.get().map(|e| e.message),
                Some("Passwords do not match".to_string())
            );
            assert_eq!(vm.password_action.version().get_untracked(), 0);
        });
    }
}
