//! Declarative role policy: which capabilities a role carries, which
//! dashboard it lands on and which sidebar sections it sees. Resolved once
//! per session and read everywhere else.

use crate::api::MenuPermission;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    HrManager,
    Director,
    Manager,
    Employee,
    Other(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "admin" | "administrator" | "superadmin" => Role::Admin,
            "hrmanager" | "hr" => Role::HrManager,
            "director" => Role::Director,
            "manager" | "teamlead" => Role::Manager,
            "employee" | "staff" => Role::Employee,
            _ => Role::Other(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::HrManager => "HR Manager",
            Role::Director => "Director",
            Role::Manager => "Manager",
            Role::Employee => "Employee",
            Role::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ViewAdministration,
    ManageEmployees,
    ManageDepartments,
    ApproveTimesheets,
    ApproveLeave,
    BulkImport,
    ViewReports,
    ManageOnboarding,
}

const ADMIN_CAPABILITIES: &[Capability] = &[
    Capability::ViewAdministration,
    Capability::ManageEmployees,
    Capability::ManageDepartments,
    Capability::ApproveTimesheets,
    Capability::ApproveLeave,
    Capability::BulkImport,
    Capability::ViewReports,
    Capability::ManageOnboarding,
];

const HR_MANAGER_CAPABILITIES: &[Capability] = &[
    Capability::ViewAdministration,
    Capability::ManageEmployees,
    Capability::ApproveLeave,
    Capability::ApproveTimesheets,
    Capability::BulkImport,
    Capability::ViewReports,
    Capability::ManageOnboarding,
];

const DIRECTOR_CAPABILITIES: &[Capability] = &[
    Capability::ApproveTimesheets,
    Capability::ApproveLeave,
    Capability::ViewReports,
];

const MANAGER_CAPABILITIES: &[Capability] =
    &[Capability::ApproveTimesheets, Capability::ApproveLeave];

pub fn capabilities_for(role: &Role) -> &'static [Capability] {
    match role {
        Role::Admin => ADMIN_CAPABILITIES,
        Role::HrManager => HR_MANAGER_CAPABILITIES,
        Role::Director => DIRECTOR_CAPABILITIES,
        Role::Manager => MANAGER_CAPABILITIES,
        Role::Employee | Role::Other(_) => &[],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardVariant {
    Admin,
    Hr,
    Director,
    Manager,
    Employee,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RolePolicy {
    role: Role,
    capabilities: &'static [Capability],
}

impl Default for RolePolicy {
    fn default() -> Self {
        Self::for_role(&Role::Employee)
    }
}

impl RolePolicy {
    pub fn for_role(role: &Role) -> Self {
        Self {
            role: role.clone(),
            capabilities: capabilities_for(role),
        }
    }

    pub fn from_role_name(raw: &str) -> Self {
        Self::for_role(&Role::parse(raw))
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn dashboard(&self) -> DashboardVariant {
        match self.role {
            Role::Admin => DashboardVariant::Admin,
            Role::HrManager => DashboardVariant::Hr,
            Role::Director => DashboardVariant::Director,
            Role::Manager => DashboardVariant::Manager,
            Role::Employee | Role::Other(_) => DashboardVariant::Employee,
        }
    }
}

/// Permission flags served by `/Menu/MyMenus`, keyed by menu key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuPermissions {
    entries: HashMap<String, MenuPermission>,
}

impl MenuPermissions {
    pub fn from_menus(menus: Vec<MenuPermission>) -> Self {
        Self {
            entries: menus
                .into_iter()
                .map(|menu| (menu.menu_key.to_ascii_lowercase(), menu))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&MenuPermission> {
        self.entries.get(&key.to_ascii_lowercase())
    }

    // Missing keys defer to what the role policy decided.
    pub fn can_view(&self, key: &str, otherwise: bool) -> bool {
        self.get(key).map(|m| m.can_view).unwrap_or(otherwise)
    }

    pub fn can_create(&self, key: &str, otherwise: bool) -> bool {
        self.get(key).map(|m| m.can_create).unwrap_or(otherwise)
    }

    pub fn can_edit(&self, key: &str, otherwise: bool) -> bool {
        self.get(key).map(|m| m.can_edit).unwrap_or(otherwise)
    }

    pub fn can_delete(&self, key: &str, otherwise: bool) -> bool {
        self.get(key).map(|m| m.can_delete).unwrap_or(otherwise)
    }
}

/// What a page may offer for one menu: create, edit and delete buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionPermissions {
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
}

impl ActionPermissions {
    /// Server flags for `menu_key` win; otherwise `capability` decides all three.
    pub fn resolve(
        policy: &RolePolicy,
        menus: &MenuPermissions,
        menu_key: &str,
        capability: Capability,
    ) -> Self {
        let allowed = policy.can(capability);
        Self {
            create: menus.can_create(menu_key, allowed),
            edit: menus.can_edit(menu_key, allowed),
            delete: menus.can_delete(menu_key, allowed),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct NavItem {
    pub key: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    pub requires: Option<Capability>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SidebarSection {
    pub title: &'static str,
    pub items: &'static [NavItem],
}

pub const SIDEBAR: &[SidebarSection] = &[
    SidebarSection {
        title: "Overview",
        items: &[
            NavItem {
                key: "dashboard",
                label: "Dashboard",
                path: "/dashboard",
                icon: "fa-gauge",
                requires: None,
            },
            NavItem {
                key: "profile",
                label: "My Profile",
                path: "/profile",
                icon: "fa-user",
                requires: None,
            },
        ],
    },
    SidebarSection {
        title: "My Work",
        items: &[
            NavItem {
                key: "attendance",
                label: "Attendance",
                path: "/attendance",
                icon: "fa-clock",
                requires: None,
            },
            NavItem {
                key: "timesheets",
                label: "Timesheets",
                path: "/timesheets",
                icon: "fa-table",
                requires: None,
            },
            NavItem {
                key: "leave",
                label: "Leave",
                path: "/leave",
                icon: "fa-plane",
                requires: None,
            },
            NavItem {
                key: "onboarding",
                label: "Onboarding",
                path: "/onboarding",
                icon: "fa-list-check",
                requires: None,
            },
        ],
    },
    SidebarSection {
        title: "Approvals",
        items: &[
            NavItem {
                key: "timesheet-approvals",
                label: "Timesheet Approvals",
                path: "/timesheets/approvals",
                icon: "fa-check-double",
                requires: Some(Capability::ApproveTimesheets),
            },
            NavItem {
                key: "leave-approvals",
                label: "Leave Approvals",
                path: "/leave/approvals",
                icon: "fa-calendar-check",
                requires: Some(Capability::ApproveLeave),
            },
        ],
    },
    SidebarSection {
        title: "Reports",
        items: &[NavItem {
            key: "daily-report",
            label: "Daily Attendance",
            path: "/reports/daily",
            icon: "fa-chart-column",
            requires: Some(Capability::ViewReports),
        }],
    },
    SidebarSection {
        title: "Administration",
        items: &[
            NavItem {
                key: "employees",
                label: "Employees",
                path: "/employees",
                icon: "fa-users",
                requires: Some(Capability::ManageEmployees),
            },
            NavItem {
                key: "departments",
                label: "Departments",
                path: "/departments",
                icon: "fa-sitemap",
                requires: Some(Capability::ManageDepartments),
            },
            NavItem {
                key: "bulk-import",
                label: "Bulk Import",
                path: "/employees/import",
                icon: "fa-file-import",
                requires: Some(Capability::BulkImport),
            },
        ],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct VisibleSection {
    pub title: &'static str,
    pub items: Vec<&'static NavItem>,
}

pub fn nav_item(path: &str) -> Option<&'static NavItem> {
    SIDEBAR
        .iter()
        .flat_map(|section| section.items.iter())
        .find(|item| item.path == path)
}

/// A server `canView` flag for the item's key wins; without one the role
/// capability decides.
pub fn can_open(policy: &RolePolicy, menus: &MenuPermissions, item: &NavItem) -> bool {
    let allowed = item.requires.map(|cap| policy.can(cap)).unwrap_or(true);
    menus.can_view(item.key, allowed)
}

/// Filters the sidebar table through `can_open`. Empty sections are dropped.
pub fn sidebar_for(policy: &RolePolicy, menus: &MenuPermissions) -> Vec<VisibleSection> {
    SIDEBAR
        .iter()
        .filter_map(|section| {
            let items: Vec<&'static NavItem> = section
                .items
                .iter()
                .filter(|item| can_open(policy, menus, item))
                .collect();
            (!items.is_empty()).then_some(VisibleSection {
                title: section.title,
                items,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section_titles(role: &str) -> Vec<&'static str> {
        sidebar_for(&RolePolicy::from_role_name(role), &MenuPermissions::default())
            .into_iter()
            .map(|s| s.title)
            .collect()
    }

    #[test]
    fn admin_sees_administration_and_employee_does_not() {
        assert!(section_titles("Admin").contains(&"Administration"));
        assert!(!section_titles("Employee").contains(&"Administration"));
    }

    #[test]
    fn role_parsing_is_tolerant_of_case_and_separators() {
        assert_eq!(Role::parse("HRManager"), Role::HrManager);
        assert_eq!(Role::parse("hr_manager"), Role::HrManager);
        assert_eq!(Role::parse(" admin "), Role::Admin);
        assert_eq!(Role::parse("Intern"), Role::Other("Intern".into()));
        assert_eq!(Role::parse("Intern").label(), "Intern");
    }

    #[test]
    fn unknown_roles_get_the_employee_experience() {
        let policy = RolePolicy::from_role_name("Contractor");
        assert_eq!(policy.dashboard(), DashboardVariant::Employee);
        assert!(!policy.can(Capability::ApproveLeave));
        assert_eq!(
            section_titles("Contractor"),
            vec!["Overview", "My Work"]
        );
    }

    #[test]
    fn dashboards_follow_roles() {
        assert_eq!(RolePolicy::from_role_name("Admin").dashboard(), DashboardVariant::Admin);
        assert_eq!(RolePolicy::from_role_name("HRManager").dashboard(), DashboardVariant::Hr);
        assert_eq!(
            RolePolicy::from_role_name("Director").dashboard(),
            DashboardVariant::Director
        );
        assert_eq!(
            RolePolicy::from_role_name("Manager").dashboard(),
            DashboardVariant::Manager
        );
    }

    #[test]
    fn managers_see_approvals_but_not_reports_or_admin() {
        let titles = section_titles("Manager");
        assert!(titles.contains(&"Approvals"));
        assert!(!titles.contains(&"Reports"));
        assert!(!titles.contains(&"Administration"));
    }

    #[test]
    fn hr_manager_administration_excludes_departments() {
        let sections = sidebar_for(
            &RolePolicy::from_role_name("HRManager"),
            &MenuPermissions::default(),
        );
        let admin = sections
            .iter()
            .find(|s| s.title == "Administration")
            .unwrap();
        let keys: Vec<_> = admin.items.iter().map(|i| i.key).collect();
        assert_eq!(keys, vec!["employees", "bulk-import"]);
    }

    #[test]
    fn server_menu_flags_can_hide_items() {
        let menus = MenuPermissions::from_menus(vec![MenuPermission {
            menu_key: "Employees".into(),
            title: None,
            path: None,
            can_view: false,
            can_create: false,
            can_edit: false,
            can_delete: false,
        }]);
        let sections = sidebar_for(&RolePolicy::from_role_name("Admin"), &menus);
        let admin = sections
            .iter()
            .find(|s| s.title == "Administration")
            .unwrap();
        assert!(admin.items.iter().all(|i| i.key != "employees"));
        assert!(!menus.can_edit("employees", true));
        assert!(menus.can_edit("departments", true));
    }

    #[test]
    fn server_menu_grant_reveals_role_denied_item() {
        let menus = MenuPermissions::from_menus(vec![MenuPermission {
            menu_key: "daily-report".into(),
            title: None,
            path: None,
            can_view: true,
            can_create: false,
            can_edit: false,
            can_delete: false,
        }]);
        let employee = RolePolicy::from_role_name("Employee");
        let titles: Vec<_> = sidebar_for(&employee, &menus)
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["Overview", "My Work", "Reports"]);

        let report = nav_item("/reports/daily").unwrap();
        assert!(can_open(&employee, &menus, report));
        let departments = nav_item("/departments").unwrap();
        assert!(!can_open(&employee, &menus, departments));
    }

    #[test]
    fn nav_item_lookup_by_path() {
        assert_eq!(nav_item("/employees/import").map(|i| i.key), Some("bulk-import"));
        assert!(nav_item("/nowhere").is_none());
    }

    #[test]
    fn action_permissions_prefer_server_flags() {
        let admin = RolePolicy::from_role_name("Admin");
        let none = MenuPermissions::default();
        assert_eq!(
            ActionPermissions::resolve(&admin, &none, "departments", Capability::ManageDepartments),
            ActionPermissions { create: true, edit: true, delete: true }
        );

        let menus = MenuPermissions::from_menus(vec![MenuPermission {
            menu_key: "Departments".into(),
            title: None,
            path: None,
            can_view: true,
            can_create: true,
            can_edit: true,
            can_delete: false,
        }]);
        let resolved =
            ActionPermissions::resolve(&admin, &menus, "departments", Capability::ManageDepartments);
        assert!(resolved.create && resolved.edit);
        assert!(!resolved.delete);

        let employee = RolePolicy::from_role_name("Employee");
        assert_eq!(
            ActionPermissions::resolve(&employee, &none, "departments", Capability::ManageDepartments),
            ActionPermissions::default()
        );
    }
}
