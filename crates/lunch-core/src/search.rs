//! Search Page Controller
//!
//! Budget input → `/search/{budget}` → results grid plus a toast.

use crate::action::{ActionSlot, Ticket};
use crate::api::LunchApi;
use crate::effects::{Begin, Effects};
use crate::error::ApiResult;
use crate::feedback::Notice;
use crate::models::MenuItem;
use crate::render::{display_results, plural, ResultsView};
use crate::validation::{parse_budget, parse_positive};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    ticket: Ticket,
    pub budget: f64,
    /// Budget as the user typed it, echoed back in messages
    pub budget_label: String,
}

impl SearchRequest {
    pub async fn send<A: LunchApi + ?Sized>(&self, api: &A) -> ApiResult<Vec<MenuItem>> {
        api.search(self.budget).await
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchController {
    budget_input: String,
    slot: ActionSlot,
    results: ResultsView,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn budget_input(&self) -> &str {
        &self.budget_input
    }

    pub fn set_budget_input(&mut self, raw: impl Into<String>) {
        self.budget_input = raw.into();
    }

    /// Live styling hint: the input currently holds a usable budget
    pub fn input_looks_valid(&self) -> bool {
        parse_positive(&self.budget_input).is_some()
    }

    /// Button and input are both disabled while busy
    pub fn is_busy(&self) -> bool {
        self.slot.is_busy()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_busy() {
            "Searching..."
        } else {
            "Find Meals"
        }
    }

    pub fn results(&self) -> &ResultsView {
        &self.results
    }

    pub fn begin_search(&mut self) -> Begin<SearchRequest> {
        match parse_budget(&self.budget_input) {
            Err(e) => Begin::Rejected(Effects::none().toast(Notice::error(e.to_string())).focus(e.field())),
            Ok(budget) => {
                tracing::debug!(budget, "searching");
                Begin::Send(SearchRequest {
                    ticket: self.slot.start(),
                    budget,
                    budget_label: self.budget_input.trim().to_string(),
                })
            }
        }
    }

    pub fn finish_search(&mut self, request: SearchRequest, result: ApiResult<Vec<MenuItem>>) -> Effects {
        if !self.slot.finish(request.ticket) {
            tracing::debug!(budget = request.budget, "dropping superseded search response");
            return Effects::none();
        }
        match result {
            Ok(items) => {
                self.results = display_results(&items, &request.budget_label);
                Effects::none().toast(Notice::success(format!(
                    "Found {} within your budget!",
                    plural(items.len(), "meal")
                )))
            }
            Err(e) => {
                tracing::warn!(error = %e, "search failed");
                self.results = ResultsView::Failed;
                Effects::none().toast(Notice::error("Error loading results. Please try again."))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Field, RequestError};
    use crate::feedback::NoticeKind;
    use crate::memory::MemoryApi;

    async fn run(ctrl: &mut SearchController, api: &MemoryApi) -> Effects {
        match ctrl.begin_search() {
            Begin::Rejected(effects) => effects,
            Begin::Send(request) => {
                let result = request.send(api).await;
                ctrl.finish_search(request, result)
            }
        }
    }

    fn menu() -> MemoryApi {
        MemoryApi::new().with_items(vec![
            MenuItem::new(1, "pizza", 6.99, None),
            MenuItem::new(2, "salad", 5.99, None),
            MenuItem::new(3, "soda", 1.99, None),
        ])
    }

    #[tokio::test]
    async fn test_invalid_budget_sends_nothing() {
        let api = menu();
        for raw in ["", "0", "-1", "  "] {
            let mut ctrl = SearchController::new();
            ctrl.set_budget_input(raw);
            let effects = run(&mut ctrl, &api).await;
            assert_eq!(effects.toasts, vec![Notice::error("Please enter a valid budget amount")]);
            assert_eq!(effects.focus, Some(Field::Budget));
            assert!(!ctrl.is_busy());
        }
        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn test_results_and_count_toast() {
        let api = menu();
        let mut ctrl = SearchController::new();
        ctrl.set_budget_input("6");
        let effects = run(&mut ctrl, &api).await;

        assert_eq!(ctrl.results().card_count(), 2);
        assert_eq!(effects.toasts[0].message, "Found 2 meals within your budget!");
        assert_eq!(effects.toasts[0].kind, NoticeKind::Success);
        assert!(!ctrl.is_busy());
        assert_eq!(ctrl.button_label(), "Find Meals");
    }

    #[tokio::test]
    async fn test_zero_results_show_empty_state() {
        let api = menu();
        let mut ctrl = SearchController::new();
        ctrl.set_budget_input("1");
        let effects = run(&mut ctrl, &api).await;
        assert_eq!(ctrl.results(), &ResultsView::Empty { budget: "1".to_string() });
        assert_eq!(effects.toasts[0].message, "Found 0 meals within your budget!");
    }

    #[tokio::test]
    async fn test_failure_restores_button_and_shows_error_state() {
        let api = menu();
        api.set_offline(true);
        let mut ctrl = SearchController::new();
        ctrl.set_budget_input("10");

        let Begin::Send(request) = ctrl.begin_search() else { panic!("expected request") };
        assert!(ctrl.is_busy());
        assert_eq!(ctrl.button_label(), "Searching...");
        let result = request.send(&api).await;
        let effects = ctrl.finish_search(request, result);

        assert_eq!(ctrl.results(), &ResultsView::Failed);
        assert!(effects.toasts[0].is_error());
        assert!(!ctrl.is_busy());
    }

    #[test]
    fn test_superseded_response_is_dropped() {
        let mut ctrl = SearchController::new();
        ctrl.set_budget_input("5");
        let first = ctrl.begin_search().request().unwrap();
        ctrl.set_budget_input("8");
        let second = ctrl.begin_search().request().unwrap();

        let late = ctrl.finish_search(first, Err(RequestError::Network("slow".into())));
        assert!(late.is_empty());
        assert_eq!(ctrl.results(), &ResultsView::Idle);
        assert!(ctrl.is_busy());

        ctrl.finish_search(second, Ok(vec![MenuItem::new(1, "soup", 4.0, None)]));
        assert_eq!(ctrl.results().card_count(), 1);
        assert!(!ctrl.is_busy());
    }

    #[test]
    fn test_live_input_hint() {
        let mut ctrl = SearchController::new();
        ctrl.set_budget_input("abc");
        assert!(!ctrl.input_looks_valid());
        ctrl.set_budget_input("4.5");
        assert!(ctrl.input_looks_valid());
    }
}
