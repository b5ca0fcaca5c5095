//! # Campaign listing
//!
//! Everything the browse pages do to the fetched collection happens here,
//! in memory, over the full set:
//!
//! 1. [`CampaignQuery::apply`] filters by search text and [`TypeFilter`],
//!    then orders by [`SortOrder`].
//! 2. [`Page::of`] cuts one page of at most [`PAGE_SIZE`] items, clamping
//!    an out-of-range page number to the last page.
//!
//! Card decorations ([`Category`], [`Urgency`]) are derived from the
//! campaign itself and never stored.

use std::cmp::Ordering;

use api::Campaign;
use chrono::{NaiveDate, NaiveDateTime};

pub const PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Candidates,
    Committees,
    Causes,
}

impl TypeFilter {
    pub const ALL: [TypeFilter; 4] = [
        TypeFilter::All,
        TypeFilter::Candidates,
        TypeFilter::Committees,
        TypeFilter::Causes,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Candidates => "candidates",
            TypeFilter::Committees => "committees",
            TypeFilter::Causes => "causes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TypeFilter::All => "All Types",
            TypeFilter::Candidates => "Candidates",
            TypeFilter::Committees => "Committees",
            TypeFilter::Causes => "Causes",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == key)
            .unwrap_or_default()
    }

    pub fn matches(&self, campaign: &Campaign) -> bool {
        let kind = CampaignKind::of(campaign);
        match self {
            TypeFilter::All => true,
            TypeFilter::Candidates => kind == CampaignKind::Candidate,
            TypeFilter::Committees => kind == CampaignKind::Committee,
            TypeFilter::Causes => kind == CampaignKind::Cause,
        }
    }
}

/// Badge shown on a campaign card, guessed from the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignKind {
    Candidate,
    Committee,
    Cause,
}

impl CampaignKind {
    pub fn of(campaign: &Campaign) -> Self {
        if campaign.title.contains("for") {
            CampaignKind::Candidate
        } else if campaign.title.contains("Committee") {
            CampaignKind::Committee
        } else {
            CampaignKind::Cause
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CampaignKind::Candidate => "Candidate",
            CampaignKind::Committee => "Committee",
            CampaignKind::Cause => "Cause",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Recent,
    Popular,
    Ending,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Recent, SortOrder::Popular, SortOrder::Ending];

    pub fn key(&self) -> &'static str {
        match self {
            SortOrder::Recent => "recent",
            SortOrder::Popular => "popular",
            SortOrder::Ending => "ending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Recent => "Most Recent",
            SortOrder::Popular => "Most Popular",
            SortOrder::Ending => "Ending Soon",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .unwrap_or_default()
    }

    fn compare(&self, a: &Campaign, b: &Campaign) -> Ordering {
        match self {
            SortOrder::Recent => dated_last(b.created_timestamp(), a.created_timestamp(), true),
            SortOrder::Popular => b
                .amount_donated
                .partial_cmp(&a.amount_donated)
                .unwrap_or(Ordering::Equal),
            SortOrder::Ending => dated_last(a.ends_at(), b.ends_at(), false),
        }
    }
}

/// Compare two optional timestamps with undated campaigns after dated ones.
/// `reversed` marks arguments passed as `(b, a)` for a descending sort.
fn dated_last(x: Option<NaiveDateTime>, y: Option<NaiveDateTime>, reversed: bool) -> Ordering {
    match (x, y) {
        (Some(x), Some(y)) => x.cmp(&y),
        (None, None) => Ordering::Equal,
        (Some(_), None) if reversed => Ordering::Greater,
        (None, Some(_)) if reversed => Ordering::Less,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignQuery {
    pub search: String,
    pub filter: TypeFilter,
    pub sort: SortOrder,
}

impl CampaignQuery {
    /// Case-insensitive substring match on title or description.
    pub fn matches_search(&self, campaign: &Campaign) -> bool {
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || campaign.title.to_lowercase().contains(&needle)
            || campaign.description.to_lowercase().contains(&needle)
    }

    pub fn apply<'a>(&self, campaigns: &'a [Campaign]) -> Vec<&'a Campaign> {
        let mut matched: Vec<&Campaign> = campaigns
            .iter()
            .filter(|c| self.matches_search(c) && self.filter.matches(c))
            .collect();
        matched.sort_by(|a, b| self.sort.compare(a, b));
        matched
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page actually shown.
    pub number: usize,
    pub total_pages: usize,
}

impl<T: Clone> Page<T> {
    /// Page `requested` (1-based). Zero becomes the first page and anything
    /// past the end becomes the last.
    pub fn of(items: &[T], requested: usize) -> Self {
        let total_pages = page_count(items.len());
        let number = requested.clamp(1, total_pages.max(1));
        let start = (number - 1) * PAGE_SIZE;
        let items = items.iter().skip(start).take(PAGE_SIZE).cloned().collect();
        Self {
            items,
            number,
            total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Climate,
    Health,
    Education,
    Justice,
    Housing,
    Voting,
    Default,
}

impl Category {
    pub fn of(title: &str) -> Self {
        let has = |words: [&str; 2]| words.iter().any(|w| title.contains(w));
        if has(["Climate", "Environment"]) {
            Category::Climate
        } else if has(["Health", "Care"]) {
            Category::Health
        } else if has(["Education", "School"]) {
            Category::Education
        } else if has(["Justice", "Reform"]) {
            Category::Justice
        } else if has(["Housing", "Home"]) {
            Category::Housing
        } else if has(["Voting", "Democracy"]) {
            Category::Voting
        } else {
            Category::Default
        }
    }

    pub fn gradient(&self) -> &'static str {
        match self {
            Category::Climate => "from-green-500 to-green-600",
            Category::Health => "from-red-500 to-red-600",
            Category::Education => "from-blue-500 to-blue-600",
            Category::Justice => "from-purple-500 to-purple-600",
            Category::Housing => "from-orange-500 to-orange-600",
            Category::Voting => "from-indigo-500 to-indigo-600",
            Category::Default => "from-gray-500 to-gray-600",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Critical,
    High,
    Medium,
}

impl Urgency {
    /// Critical under 7 days left or 20% funded, High under 14 days or 50%.
    /// A campaign without an end date or a goal is judged on what it has.
    pub fn of(campaign: &Campaign, today: NaiveDate) -> Self {
        let days_left = campaign.end_date().map(|end| (end - today).num_days());
        let progress = campaign.progress_percent();
        let below = |days: i64, percent: f64| {
            days_left.is_some_and(|d| d < days) || progress.is_some_and(|p| p < percent)
        };
        if below(7, 20.0) {
            Urgency::Critical
        } else if below(14, 50.0) {
            Urgency::High
        } else {
            Urgency::Medium
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Critical => "Critical",
            Urgency::High => "High",
            Urgency::Medium => "Medium",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Urgency::Critical => "bg-red-100 text-red-800",
            Urgency::High => "bg-orange-100 text-orange-800",
            Urgency::Medium => "bg-yellow-100 text-yellow-800",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(id: u64, title: &str) -> Campaign {
        Campaign {
            id,
            title: title.to_string(),
            goal: 1000.0,
            ..Default::default()
        }
    }

    fn dated(id: u64, created: Option<&str>, end: Option<&str>, donated: f64) -> Campaign {
        Campaign {
            created_at: created.map(String::from),
            end_date: end.map(String::from),
            amount_donated: donated,
            ..campaign(id, "Cause")
        }
    }

    fn ids(list: &[&Campaign]) -> Vec<u64> {
        list.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut parks = campaign(1, "Save the Parks");
        parks.description = "Green spaces".into();
        let all = vec![parks, campaign(2, "Clean Water")];
        let query = CampaignQuery {
            search: "GREEN".into(),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&all)), vec![1]);
    }

    #[test]
    fn test_type_filter() {
        let all = vec![
            campaign(1, "Rivera for Council"),
            campaign(2, "Housing Committee"),
            campaign(3, "Clean Water"),
        ];
        let only = |filter| {
            ids(&CampaignQuery {
                filter,
                ..Default::default()
            }
            .apply(&all))
        };
        assert_eq!(only(TypeFilter::Candidates), vec![1]);
        assert_eq!(only(TypeFilter::Committees), vec![2]);
        assert_eq!(only(TypeFilter::Causes), vec![3]);
        assert_eq!(only(TypeFilter::All).len(), 3);
    }

    #[test]
    fn test_sort_orders() {
        let all = vec![
            dated(1, Some("2025-01-01"), Some("2026-06-01"), 10.0),
            dated(2, None, None, 500.0),
            dated(3, Some("2025-03-01"), Some("2026-01-01"), 50.0),
        ];
        let sorted = |sort| {
            ids(&CampaignQuery {
                sort,
                ..Default::default()
            }
            .apply(&all))
        };
        assert_eq!(sorted(SortOrder::Recent), vec![3, 1, 2]);
        assert_eq!(sorted(SortOrder::Popular), vec![2, 3, 1]);
        assert_eq!(sorted(SortOrder::Ending), vec![3, 1, 2]);
    }

    #[test]
    fn test_recent_orders_same_day_by_time() {
        let all = vec![
            dated(1, Some("2025-06-01T08:00:00Z"), None, 0.0),
            dated(2, Some("2025-06-01T20:00:00Z"), None, 0.0),
            dated(3, Some("2025-06-01"), None, 0.0),
        ];
        let query = CampaignQuery {
            sort: SortOrder::Recent,
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&all)), vec![2, 1, 3]);
    }

    #[test]
    fn test_pagination() {
        let items: Vec<u32> = (0..13).collect();
        assert_eq!(page_count(13), 3);
        assert_eq!(page_count(12), 2);
        assert_eq!(page_count(0), 0);

        let first = Page::of(&items, 1);
        assert_eq!(first.items.len(), 6);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = Page::of(&items, 3);
        assert_eq!(last.items, vec![12]);
        assert!(!last.has_next());
    }

    #[test]
    fn test_out_of_range_page_clamps() {
        let items: Vec<u32> = (0..7).collect();
        let page = Page::of(&items, 9);
        assert_eq!(page.number, 2);
        assert_eq!(page.items, vec![6]);
        assert_eq!(Page::of(&items, 0).number, 1);

        let empty: Vec<u32> = vec![];
        let page = Page::of(&empty, 4);
        assert_eq!(page.number, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_category() {
        assert_eq!(Category::of("Climate Now"), Category::Climate);
        assert_eq!(Category::of("Rural Health Care"), Category::Health);
        assert_eq!(Category::of("School Lunches"), Category::Education);
        assert_eq!(Category::of("Vote Democracy"), Category::Voting);
        assert_eq!(Category::of("Bake Sale"), Category::Default);
    }

    #[test]
    fn test_urgency() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let soon = dated(1, None, Some("2026-01-05"), 900.0);
        assert_eq!(Urgency::of(&soon, today), Urgency::Critical);

        let underfunded = dated(2, None, Some("2026-06-01"), 100.0);
        assert_eq!(Urgency::of(&underfunded, today), Urgency::Critical);

        let halfway = dated(3, None, Some("2026-01-10"), 900.0);
        assert_eq!(Urgency::of(&halfway, today), Urgency::High);

        let healthy = dated(4, None, Some("2026-06-01"), 600.0);
        assert_eq!(Urgency::of(&healthy, today), Urgency::Medium);

        let mut no_goal = dated(5, None, None, 0.0);
        no_goal.goal = 0.0;
        assert_eq!(Urgency::of(&no_goal, today), Urgency::Medium);
    }
}
