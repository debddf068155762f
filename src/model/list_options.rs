use serde::{Deserialize, Serialize};

use super::prospect::Prospect;

/// Which prospects a list shows. Fixed for the lifetime of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterType {
    None,
    Contacted,
    Uncontacted,
}

impl FilterType {
    pub const ALL: &'static [FilterType] = &[
        FilterType::None,
        FilterType::Contacted,
        FilterType::Uncontacted,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            FilterType::None => "Everyone",
            FilterType::Contacted => "Contacted people",
            FilterType::Uncontacted => "Uncontacted people",
        }
    }

    pub fn matches(&self, prospect: &Prospect) -> bool {
        match self {
            FilterType::None => true,
            FilterType::Contacted => prospect.is_contacted,
            FilterType::Uncontacted => !prospect.is_contacted,
        }
    }

    /// Parse a tab name as typed at the prompt.
    pub fn from_tab_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "everyone" | "all" | "none" => Some(FilterType::None),
            "contacted" => Some(FilterType::Contacted),
            "uncontacted" => Some(FilterType::Uncontacted),
            _ => None,
        }
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortType {
    #[default]
    Name,
    CreationDate,
}

impl SortType {
    pub const ALL: &'static [SortType] = &[SortType::Name, SortType::CreationDate];

    pub fn display_name(&self) -> &'static str {
        match self {
            SortType::Name => "By Name",
            SortType::CreationDate => "By Date",
        }
    }

    pub fn from_option_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" | "by name" => Some(SortType::Name),
            "date" | "by date" | "creation-date" => Some(SortType::CreationDate),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_follow_filter() {
        assert_eq!(FilterType::None.title(), "Everyone");
        assert_eq!(FilterType::Contacted.title(), "Contacted people");
        assert_eq!(FilterType::Uncontacted.title(), "Uncontacted people");
    }

    #[test]
    fn default_sort_is_by_name() {
        assert_eq!(SortType::default(), SortType::Name);
    }

    #[test]
    fn tab_names_parse_case_insensitively() {
        assert_eq!(FilterType::from_tab_name("Everyone"), Some(FilterType::None));
        assert_eq!(FilterType::from_tab_name(" CONTACTED "), Some(FilterType::Contacted));
        assert_eq!(FilterType::from_tab_name("me"), None);
    }

    #[test]
    fn sort_option_names_parse() {
        assert_eq!(SortType::from_option_name("date"), Some(SortType::CreationDate));
        assert_eq!(SortType::from_option_name("By Name"), Some(SortType::Name));
        assert_eq!(SortType::from_option_name("email"), None);
    }
}
