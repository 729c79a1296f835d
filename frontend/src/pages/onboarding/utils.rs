use crate::{api::OnboardingTask, utils::format::progress_percent};

const DEFAULT_CATEGORY: &str = "General";

pub fn checklist_progress(tasks: &[OnboardingTask]) -> u8 {
    progress_percent(tasks.iter().filter(|t| t.is_completed).count(), tasks.len())
}

/// A task that needs a document stays open until one is attached.
pub fn can_complete(task: &OnboardingTask) -> bool {
    !task.is_completed && (!task.requires_document || task.document_url.is_some())
}

pub fn needs_upload(task: &OnboardingTask) -> bool {
    task.requires_document && task.document_url.is_none()
}

/// Groups tasks by category in first-seen order; open tasks sort first
/// within each group.
pub fn group_by_category(tasks: Vec<OnboardingTask>) -> Vec<(String, Vec<OnboardingTask>)> {
    let mut groups: Vec<(String, Vec<OnboardingTask>)> = Vec::new();
    for task in tasks {
        let category = task
            .category
            .clone()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, list)) => list.push(task),
            None => groups.push((category, vec![task])),
        }
    }
    for (_, list) in groups.iter_mut() {
        list.sort_by_key(|t| t.is_completed);
    }
    groups
}

#[cfg(test)]
pub(crate) fn task(id: i64, category: Option<&str>, done: bool) -> OnboardingTask {
    OnboardingTask {
        id,
        title: format!("Task {}", id),
        description: None,
        category: category.map(str::to_string),
        due_date: None,
        is_completed: done,
        completed_at: None,
        requires_document: false,
        document_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_counts_completed_tasks() {
        let tasks = vec![task(1, None, true), task(2, None, false), task(3, None, false), task(4, None, true)];
        assert_eq!(checklist_progress(&tasks), 50);
        assert_eq!(checklist_progress(&[]), 0);
    }

    #[test]
    fn document_tasks_need_upload_first() {
        let mut t = task(1, None, false);
        t.requires_document = true;
        assert!(needs_upload(&t));
        assert!(!can_complete(&t));
        t.document_url = Some("/files/contract.pdf".into());
        assert!(!needs_upload(&t));
        assert!(can_complete(&t));
        t.is_completed = true;
        assert!(!can_complete(&t));
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let groups = group_by_category(vec![
            task(1, Some("IT"), true),
            task(2, None, false),
            task(3, Some("IT"), false),
        ]);
        let names: Vec<&str> = groups.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["IT", "General"]);
        assert_eq!(groups[0].1[0].id, 3);
    }
}
