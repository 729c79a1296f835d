use super::{
    repository::{self, DepartmentDirectory},
    utils::{build_department_input, delete_blocker, MENU_KEY},
};
use crate::api::{ApiClient, ApiError, Department, DepartmentInput};
use crate::state::{
    auth::use_auth,
    flash::{create_flash, Flash},
    loader::{create_loader, Loader},
    policy::{ActionPermissions, Capability},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DepartmentForm {
    pub open: RwSignal<bool>,
    pub editing: RwSignal<Option<i64>>,
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub manager_id: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
}

impl DepartmentForm {
    fn new() -> Self {
        Self {
            open: create_rw_signal(false),
            editing: create_rw_signal(None),
            name: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            manager_id: create_rw_signal(String::new()),
            error: create_rw_signal(None),
        }
    }

    pub fn fill(&self, department: &Department) {
        self.editing.set(Some(department.id));
        self.name.set(department.name.clone());
        self.description
            .set(department.description.clone().unwrap_or_default());
        self.manager_id.set(
            department
                .manager_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
        self.error.set(None);
        self.open.set(true);
    }

    pub fn reset(&self) {
        self.open.set(false);
        self.editing.set(None);
        self.name.set(String::new());
        self.description.set(String::new());
        self.manager_id.set(String::new());
        self.error.set(None);
    }
}

type SaveInput = (Option<i64>, DepartmentInput);

#[derive(Clone, Copy)]
pub struct DepartmentsViewModel {
    pub directory: Loader<DepartmentDirectory>,
    pub permissions: Memo<ActionPermissions>,
    pub form: DepartmentForm,
    pub edit_action: Action<i64, Result<Department, ApiError>>,
    pub save_action: Action<SaveInput, Result<(bool, Department), ApiError>>,
    pub delete_target: RwSignal<Option<Department>>,
    pub delete_action: Action<i64, Result<i64, ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub flash: Flash,
}

impl DepartmentsViewModel {
    pub fn open_create(&self) {
        self.form.reset();
        self.form.open.set(true);
    }

    /// Edits start from a fresh copy so stale rows never overwrite newer data.
    pub fn open_edit(&self, id: i64) {
        self.edit_action.dispatch(id);
    }

    pub fn submit(&self) {
        let form = self.form;
        match build_department_input(
            &form.name.get_untracked(),
            &form.description.get_untracked(),
            &form.manager_id.get_untracked(),
        ) {
            Ok(input) => {
                form.error.set(None);
                self.save_action
                    .dispatch((form.editing.get_untracked(), input));
            }
            Err(err) => form.error.set(Some(err)),
        }
    }

    pub fn request_delete(&self, department: Department) {
        match delete_blocker(&department) {
            Some(reason) => self.error.set(Some(ApiError::validation(reason))),
            None => self.delete_target.set(Some(department)),
        }
    }

    pub fn confirm_delete(&self) {
        if let Some(department) = self.delete_target.get_untracked() {
            self.delete_action.dispatch(department.id);
        }
    }
}

pub fn use_departments_view_model() -> DepartmentsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let (auth, _) = use_auth();
    let permissions = create_memo(move |_| {
        auth.with(|state| {
            ActionPermissions::resolve(
                &state.policy,
                &state.menus,
                MENU_KEY,
                Capability::ManageDepartments,
            )
        })
    });

    let directory = {
        let api = api.clone();
        create_loader(
            || (),
            move |_| {
                let api = api.clone();
                async move { repository::load_directory(&api).await }
            },
        )
    };
    let edit_action = {
        let api = api.clone();
        create_action(move |id: &i64| {
            let api = api.clone();
            let id = *id;
            async move { repository::fetch(&api, id).await }
        })
    };
    let save_action = {
        let api = api.clone();
        create_action(move |(id, input): &SaveInput| {
            let api = api.clone();
            let id = *id;
            let input = input.clone();
            async move {
                let saved = repository::save(&api, id, input).await?;
                Ok::<_, ApiError>((id.is_none(), saved))
            }
        })
    };
    let delete_action = create_action(move |id: &i64| {
        let api = api.clone();
        let id = *id;
        async move { repository::remove(&api, id).await.map(|_| id) }
    });

    let form = DepartmentForm::new();
    let delete_target = create_rw_signal(None::<Department>);
    let error = create_rw_signal(None::<ApiError>);
    let flash = create_flash();

    create_effect(move |_| match edit_action.value().get() {
        Some(Ok(department)) => form.fill(&department),
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });
    create_effect(move |_| match save_action.value().get() {
        Some(Ok((created, department))) => {
            form.reset();
            directory.update_data(|dir| {
                match dir.departments.iter_mut().find(|d| d.id == department.id) {
                    Some(existing) => *existing = department.clone(),
                    None => dir.departments.push(department.clone()),
                }
            });
            flash.show(if created {
                "Department created"
            } else {
                "Department updated"
            });
        }
        Some(Err(err)) => form.error.set(Some(err)),
        None => {}
    });
    create_effect(move |_| {
        let Some(result) = delete_action.value().get() else {
            return;
        };
        delete_target.set(None);
        match result {
            Ok(id) => {
                directory.update_data(|dir| dir.departments.retain(|d| d.id != id));
                flash.show("Department deleted");
            }
            Err(err) => error.set(Some(err)),
        }
    });

    DepartmentsViewModel {
        directory,
        permissions,
        form,
        edit_action,
        save_action,
        delete_target,
        delete_action,
        error,
        flash,
    }
}
