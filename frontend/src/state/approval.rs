//! Shared machinery for the timesheet and leave approval queues.

use crate::api::ApiError;
use crate::state::{
    flash::{create_flash, Flash},
    loader::{create_loader, Loader},
};
use leptos::*;
use std::future::Future;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn label(self) -> &'static str {
        match self {
            Decision::Approve => "Approve",
            Decision::Reject => "Reject",
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            Decision::Approve => "approved",
            Decision::Reject => "rejected",
        }
    }
}

pub type DecisionInput = (i64, Decision, String);

pub struct ApprovalQueue<T: 'static> {
    pub items: Loader<Vec<T>>,
    pub selected: RwSignal<Option<i64>>,
    pub decision: RwSignal<Option<Decision>>,
    pub action: Action<DecisionInput, Result<(i64, Decision), ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub flash: Flash,
}

impl<T> Clone for ApprovalQueue<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ApprovalQueue<T> {}

impl<T: Clone + 'static> ApprovalQueue<T> {
    pub fn open(&self, id: i64, decision: Decision) {
        self.error.set(None);
        self.selected.set(Some(id));
        self.decision.set(Some(decision));
    }

    pub fn decide(&self, decision: Decision, comments: String) {
        if self.action.pending().get_untracked() {
            return;
        }
        if let Some(id) = self.selected.get_untracked() {
            self.action.dispatch((id, decision, comments));
        }
    }
}

/// `noun` names the item in success messages ("Timesheet approved").
/// Decided items leave the queue once the server confirms.
pub fn create_approval_queue<T, F, Fu, D, Du>(
    noun: &'static str,
    id_of: fn(&T) -> i64,
    fetch: F,
    decide: D,
) -> ApprovalQueue<T>
where
    T: Clone + 'static,
    F: Fn() -> Fu + 'static,
    Fu: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    D: Fn(i64, Decision, String) -> Du + 'static,
    Du: Future<Output = Result<(), ApiError>> + 'static,
{
    let items = create_loader(|| (), move |_| fetch());
    let action = create_action(move |(id, decision, comments): &DecisionInput| {
        let (id, decision) = (*id, *decision);
        let call = decide(id, decision, comments.clone());
        async move { call.await.map(|_| (id, decision)) }
    });
    let queue = ApprovalQueue {
        items,
        selected: create_rw_signal(None),
        decision: create_rw_signal(None),
        action,
        error: create_rw_signal(None),
        flash: create_flash(),
    };

    create_effect(move |_| match queue.action.value().get() {
        Some(Ok((id, decision))) => {
            queue
                .items
                .update_data(|list| list.retain(|item| id_of(item) != id));
            queue.selected.set(None);
            queue.decision.set(None);
            queue.flash.show(format!("{} {}", noun, decision.past_tense()));
        }
        Some(Err(err)) => {
            queue.decision.set(None);
            queue.error.set(Some(err));
        }
        None => {}
    });

    queue
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn open_selects_item_and_decision() {
        with_runtime(|| {
            let queue = create_approval_queue(
                "Timesheet",
                |id: &i64| *id,
                || async { Ok(vec![1_i64, 2]) },
                |_, _, _| async { Ok(()) },
            );
            queue.open(2, Decision::Reject);
            assert_eq!(queue.selected.get(), Some(2));
            assert_eq!(queue.decision.get(), Some(Decision::Reject));
            assert!(queue.error.get().is_none());
        });
    }

    #[test]
    fn decide_without_selection_does_nothing() {
        with_runtime(|| {
            let queue = create_approval_queue(
                "Leave request",
                |id: &i64| *id,
                || async { Ok(Vec::new()) },
                |_, _, _| async { Ok(()) },
            );
            queue.decide(Decision::Approve, String::new());
            assert_eq!(queue.action.version().get_untracked(), 0);
        });
    }

    #[test]
    fn decision_labels() {
        assert_eq!(Decision::Approve.label(), "Approve");
        assert_eq!(Decision::Reject.past_tense(), "rejected");
    }
}
