use super::{
    repository,
    utils::{build_onboarding_task, build_query, EmployeeDraft, MENU_KEY},
};
use crate::api::{ApiClient, ApiError, Department, Employee, EmployeeInput, OnboardingTask, OnboardingTaskInput};
use crate::state::{
    auth::use_auth,
    flash::{create_flash, Flash},
    loader::{create_loader, Loader},
    policy::{ActionPermissions, Capability},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct EmployeeForm {
    pub open: RwSignal<bool>,
    pub editing: RwSignal<Option<i64>>,
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub department_id: RwSignal<String>,
    pub position: RwSignal<String>,
    pub hire_date: RwSignal<String>,
    pub role: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
}

impl EmployeeForm {
    fn new() -> Self {
        Self {
            open: create_rw_signal(false),
            editing: create_rw_signal(None),
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            department_id: create_rw_signal(String::new()),
            position: create_rw_signal(String::new()),
            hire_date: create_rw_signal(String::new()),
            role: create_rw_signal("Employee".to_string()),
            error: create_rw_signal(None),
        }
    }

    pub fn draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            department_id: self.department_id.get_untracked(),
            position: self.position.get_untracked(),
            hire_date: self.hire_date.get_untracked(),
            role: self.role.get_untracked(),
        }
    }

    pub fn fill(&self, employee: &Employee) {
        self.editing.set(Some(employee.id));
        self.first_name.set(employee.first_name.clone());
        self.last_name.set(employee.last_name.clone());
        self.email.set(employee.email.clone());
        self.phone.set(employee.phone.clone().unwrap_or_default());
        self.department_id.set(
            employee
                .department_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
        self.position.set(employee.position.clone().unwrap_or_default());
        self.hire_date.set(
            employee
                .hire_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        );
        self.error.set(None);
        self.open.set(true);
    }

    pub fn reset(&self) {
        self.open.set(false);
        self.editing.set(None);
        for field in [
            self.first_name,
            self.last_name,
            self.email,
            self.phone,
            self.department_id,
            self.position,
            self.hire_date,
        ] {
            field.set(String::new());
        }
        self.role.set("Employee".to_string());
        self.error.set(None);
    }
}

/// Task checklist for one employee, opened from the directory.
#[derive(Clone, Copy)]
pub struct OnboardingAdmin {
    pub employee: RwSignal<Option<Employee>>,
    pub tasks: Loader<Vec<OnboardingTask>>,
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub due_date: RwSignal<String>,
    pub requires_document: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    pub create_action: Action<OnboardingTaskInput, Result<OnboardingTask, ApiError>>,
}

impl OnboardingAdmin {
    pub fn open(&self, employee: Employee) {
        self.clear_draft();
        self.employee.set(Some(employee));
    }

    pub fn close(&self) {
        self.clear_draft();
        self.employee.set(None);
    }

    fn clear_draft(&self) {
        self.title.set(String::new());
        self.description.set(String::new());
        self.due_date.set(String::new());
        self.requires_document.set(false);
        self.error.set(None);
    }

    pub fn add_task(&self) {
        let Some(employee_id) = self.employee.with_untracked(|e| e.as_ref().map(|e| e.id)) else {
            return;
        };
        match build_onboarding_task(
            employee_id,
            &self.title.get_untracked(),
            &self.description.get_untracked(),
            &self.due_date.get_untracked(),
            self.requires_document.get_untracked(),
        ) {
            Ok(input) => {
                self.error.set(None);
                self.create_action.dispatch(input);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

type SaveInput = (Option<i64>, EmployeeInput);

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub search: RwSignal<String>,
    pub department_filter: RwSignal<String>,
    pub employees: Loader<Vec<Employee>>,
    pub departments: Loader<Vec<Department>>,
    pub permissions: Memo<ActionPermissions>,
    pub can_manage_onboarding: Memo<bool>,
    pub form: EmployeeForm,
    pub edit_action: Action<i64, Result<Employee, ApiError>>,
    pub save_action: Action<SaveInput, Result<(bool, Employee), ApiError>>,
    pub delete_target: RwSignal<Option<Employee>>,
    pub delete_action: Action<i64, Result<i64, ApiError>>,
    pub onboarding: OnboardingAdmin,
    pub error: RwSignal<Option<ApiError>>,
    pub flash: Flash,
}

impl EmployeesViewModel {
    pub fn open_create(&self) {
        self.form.reset();
        self.form.open.set(true);
    }

    pub fn open_edit(&self, id: i64) {
        self.edit_action.dispatch(id);
    }

    pub fn submit(&self) {
        match self.form.draft().into_input() {
            Ok(input) => {
                self.form.error.set(None);
                self.save_action
                    .dispatch((self.form.editing.get_untracked(), input));
            }
            Err(err) => self.form.error.set(Some(err)),
        }
    }

    pub fn confirm_delete(&self) {
        if let Some(employee) = self.delete_target.get_untracked() {
            self.delete_action.dispatch(employee.id);
        }
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let (auth, _) = use_auth();
    let permissions = create_memo(move |_| {
        auth.with(|state| {
            ActionPermissions::resolve(
                &state.policy,
                &state.menus,
                MENU_KEY,
                Capability::ManageEmployees,
            )
        })
    });
    let can_manage_onboarding =
        create_memo(move |_| auth.with(|state| state.policy.can(Capability::ManageOnboarding)));

    let search = create_rw_signal(String::new());
    let department_filter = create_rw_signal(String::new());
    let query = create_memo(move |_| build_query(&search.get(), &department_filter.get()));

    let employees = {
        let api = api.clone();
        create_loader(
            move || query.get(),
            move |query| {
                let api = api.clone();
                async move { repository::load_employees(&api, query).await }
            },
        )
    };
    let departments = {
        let api = api.clone();
        create_loader(
            || (),
            move |_| {
                let api = api.clone();
                async move { repository::load_departments(&api).await }
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
    let delete_action = {
        let api = api.clone();
        create_action(move |id: &i64| {
            let api = api.clone();
            let id = *id;
            async move { repository::remove(&api, id).await.map(|_| id) }
        })
    };

    let onboarding_employee = create_rw_signal(None::<Employee>);
    let onboarding_tasks = {
        let api = api.clone();
        create_loader(
            move || onboarding_employee.with(|e| e.as_ref().map(|e| e.id)),
            move |employee_id| {
                let api = api.clone();
                async move {
                    match employee_id {
                        Some(id) => repository::load_onboarding(&api, id).await,
                        None => Ok(Vec::new()),
                    }
                }
            },
        )
    };
    let create_task_action = create_action(move |input: &OnboardingTaskInput| {
        let api = api.clone();
        let input = input.clone();
        async move { repository::add_onboarding_task(&api, input).await }
    });
    let onboarding = OnboardingAdmin {
        employee: onboarding_employee,
        tasks: onboarding_tasks,
        title: create_rw_signal(String::new()),
        description: create_rw_signal(String::new()),
        due_date: create_rw_signal(String::new()),
        requires_document: create_rw_signal(false),
        error: create_rw_signal(None),
        create_action: create_task_action,
    };

    let form = EmployeeForm::new();
    let delete_target = create_rw_signal(None::<Employee>);
    let error = create_rw_signal(None::<ApiError>);
    let flash = create_flash();

    create_effect(move |_| match edit_action.value().get() {
        Some(Ok(employee)) => form.fill(&employee),
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });
    create_effect(move |_| match save_action.value().get() {
        Some(Ok((created, _))) => {
            form.reset();
            // Server-side filters decide where the row belongs.
            employees.retry();
            flash.show(if created {
                "Employee created"
            } else {
                "Employee updated"
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
                employees.update_data(|list| list.retain(|e| e.id != id));
                flash.show("Employee deleted");
            }
            Err(err) => error.set(Some(err)),
        }
    });
    create_effect(move |_| match create_task_action.value().get() {
        Some(Ok(task)) => {
            onboarding.clear_draft();
            onboarding.tasks.update_data(|tasks| tasks.push(task));
            flash.show("Onboarding task added");
        }
        Some(Err(err)) => onboarding.error.set(Some(err)),
        None => {}
    });

    EmployeesViewModel {
        search,
        department_filter,
        employees,
        departments,
        permissions,
        can_manage_onboarding,
        form,
        edit_action,
        save_action,
        delete_target,
        delete_action,
        onboarding,
        error,
        flash,
    }
}
