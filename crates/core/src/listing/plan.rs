//! Ordered listing plan: filter, owner join, sort, paginate.
//!
//! A plan is assembled by setting stages on an empty [`ListingPlan`] in any
//! order; [`ListingPlan::stages`] always yields them in canonical order so
//! pagination is never applied before filtering or sorting.

use crate::types::DbId;

use super::params::{FilterSpec, ListingParams, PageSpec, SortSpec};

/// A constraint fixed by the calling context. User input cannot remove it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only rows attached to this video (comments).
    ParentVideo(DbId),
    /// Only rows owned by this user (a user's tweets or playlists).
    Owner(DbId),
    /// Only published rows (public video listing).
    Published,
}

/// One conjunct of the filter stage. All predicates are AND-ed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Scope(Scope),
    OwnerEq(DbId),
    /// Case-insensitive substring match against any of the source's text
    /// columns (OR-ed together).
    TextContains(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage<'a> {
    Filter(&'a [Predicate]),
    JoinOwner,
    Sort(SortSpec),
    Paginate(PageSpec),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPlan {
    predicates: Vec<Predicate>,
    join_owner: bool,
    sort: Option<SortSpec>,
    page: Option<PageSpec>,
}

impl ListingPlan {
    /// The identity plan: no filter, no join, no ordering, no window.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.predicates.push(Predicate::Scope(scope));
        self
    }

    /// Add the user-supplied constraints. The owner constraint is added
    /// before the text constraint; both are AND-ed with any scope.
    pub fn filter(mut self, filter: &FilterSpec) -> Self {
        if let Some(owner_id) = filter.owner_id {
            self.predicates.push(Predicate::OwnerEq(owner_id));
        }
        if let Some(text) = &filter.text {
            self.predicates.push(Predicate::TextContains(text.clone()));
        }
        self
    }

    pub fn join_owner(mut self) -> Self {
        self.join_owner = true;
        self
    }

    pub fn sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn paginate(mut self, page: PageSpec) -> Self {
        self.page = Some(page);
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn joins_owner(&self) -> bool {
        self.join_owner
    }

    pub fn sort_spec(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn page_spec(&self) -> Option<PageSpec> {
        self.page
    }

    /// Stages in execution order. An empty filter is omitted.
    pub fn stages(&self) -> Vec<Stage<'_>> {
        let mut stages = Vec::with_capacity(4);
        if !self.predicates.is_empty() {
            stages.push(Stage::Filter(&self.predicates));
        }
        if self.join_owner {
            stages.push(Stage::JoinOwner);
        }
        if let Some(sort) = self.sort {
            stages.push(Stage::Sort(sort));
        }
        if let Some(page) = self.page {
            stages.push(Stage::Paginate(page));
        }
        stages
    }
}

/// Searchable listing: user filter, owner join, user sort, pagination,
/// all AND-ed with the optional `scope`.
pub fn build_listing_plan(params: &ListingParams, scope: Option<Scope>) -> ListingPlan {
    let mut plan = ListingPlan::new();
    if let Some(scope) = scope {
        plan = plan.scope(scope);
    }
    plan.filter(&params.filter_spec())
        .join_owner()
        .sort(params.sort_spec())
        .paginate(params.page_spec())
}

/// Feed listing under a mandatory scope: owner join, newest first,
/// pagination. Text, sort and owner parameters are ignored.
pub fn build_feed_plan(params: &ListingParams, scope: Scope) -> ListingPlan {
    ListingPlan::new()
        .scope(scope)
        .join_owner()
        .sort(SortSpec::default())
        .paginate(params.page_spec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::params::{SortDirection, SortField};

    fn params(pairs: &[(&str, &str)]) -> ListingParams {
        ListingParams::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn identity_plan_has_no_stages() {
        assert!(ListingPlan::new().stages().is_empty());
    }

    #[test]
    fn stages_are_canonical_regardless_of_call_order() {
        let plan = ListingPlan::new()
            .paginate(PageSpec::default())
            .sort(SortSpec::default())
            .join_owner()
            .scope(Scope::Published);

        let stages = plan.stages();
        assert_eq!(stages.len(), 4);
        assert!(matches!(stages[0], Stage::Filter(_)));
        assert_eq!(stages[1], Stage::JoinOwner);
        assert!(matches!(stages[2], Stage::Sort(_)));
        assert!(matches!(stages[3], Stage::Paginate(_)));
    }

    #[test]
    fn owner_and_text_are_separate_conjuncts() {
        let plan = build_listing_plan(&params(&[("userId", "3"), ("query", "cat")]), None);
        assert_eq!(
            plan.predicates(),
            &[
                Predicate::OwnerEq(3),
                Predicate::TextContains("cat".to_string()),
            ]
        );
    }

    #[test]
    fn scope_is_always_present() {
        let plan = build_listing_plan(&params(&[("query", "cat")]), Some(Scope::Published));
        assert_eq!(plan.predicates()[0], Predicate::Scope(Scope::Published));
    }

    #[test]
    fn no_filter_params_leaves_only_scope() {
        let plan = build_listing_plan(&ListingParams::default(), Some(Scope::ParentVideo(7)));
        assert_eq!(
            plan.predicates(),
            &[Predicate::Scope(Scope::ParentVideo(7))]
        );

        let plan = build_listing_plan(&ListingParams::default(), None);
        assert!(plan.predicates().is_empty());
        assert!(!plan.stages().iter().any(|s| matches!(s, Stage::Filter(_))));
    }

    #[test]
    fn invalid_owner_is_dropped_text_kept() {
        let plan = build_listing_plan(
            &params(&[("userId", "not-a-valid-id"), ("query", "dogs")]),
            None,
        );
        assert_eq!(
            plan.predicates(),
            &[Predicate::TextContains("dogs".to_string())]
        );
    }

    #[test]
    fn feed_plan_ignores_user_sort_and_filters() {
        let plan = build_feed_plan(
            &params(&[
                ("sortBy", "title"),
                ("sortType", "asc"),
                ("query", "x"),
                ("userId", "4"),
                ("page", "2"),
            ]),
            Scope::ParentVideo(1),
        );
        assert_eq!(
            plan.predicates(),
            &[Predicate::Scope(Scope::ParentVideo(1))]
        );
        assert_eq!(plan.sort_spec(), Some(SortSpec::default()));
        assert_eq!(plan.page_spec(), Some(PageSpec { page: 2, limit: 10 }));
        assert!(plan.joins_owner());
    }

    #[test]
    fn listing_plan_honours_recognized_sort() {
        let plan = build_listing_plan(&params(&[("sortBy", "title"), ("sortType", "asc")]), None);
        assert_eq!(
            plan.sort_spec(),
            Some(SortSpec {
                field: SortField::Title,
                direction: SortDirection::Asc,
            })
        );
    }
}
