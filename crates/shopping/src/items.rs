use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[derive(
    EnumString, Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    pub fn completed(&self) -> Option<bool> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Pending => Some(false),
            StatusFilter::Completed => Some(true),
        }
    }
}

/// Ingredient lines of every block, concatenated in block order and
/// deduplicated by exact text, first occurrence wins.
pub fn collect_items<'a>(blocks: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut items = vec![];

    for line in blocks
        .into_iter()
        .flat_map(foodprep_recipe::ingredient_lines)
    {
        if seen.insert(line) {
            items.push(line.to_owned());
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_dedups_across_blocks() {
        let items = collect_items(["eggs\nmilk", "milk\nflour\neggs"]);
        assert_eq!(items, vec!["eggs", "milk", "flour"]);
    }

    #[test]
    fn test_collect_is_exact_match() {
        let items = collect_items(["2 eggs\neggs\nEggs", "  eggs  "]);
        assert_eq!(items, vec!["2 eggs", "eggs", "Eggs"]);
    }

    #[test]
    fn test_collect_empty_blocks() {
        assert!(collect_items(["", "\n \n"]).is_empty());
        assert!(collect_items(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn test_status_filter() {
        assert_eq!("pending".parse::<StatusFilter>().unwrap(), StatusFilter::Pending);
        assert!("done".parse::<StatusFilter>().is_err());
        assert_eq!(StatusFilter::default().completed(), None);
        assert_eq!(StatusFilter::Completed.completed(), Some(true));
    }
}
