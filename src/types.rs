use serde::{Deserialize, Serialize};

/// Closed set of post categories. Declaration order is the display order
/// used when grouping posts on the main page (Frontend sections render
/// before Backend sections).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Frontend,
    Backend,
}

impl Category {
    /// All categories in display-priority order.
    pub const ALL: [Category; 2] = [Category::Frontend, Category::Backend];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "frontend" => Ok(Category::Frontend),
            "backend" => Ok(Category::Backend),
            _ => Err(format!(
                "Unknown category '{s}'. Valid options: frontend, backend"
            )),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Category selection on the main page: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    /// Cycle All -> Frontend -> Backend -> All.
    pub fn next(self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::ALL[0]),
            CategoryFilter::Only(c) => {
                let idx = Category::ALL.iter().position(|x| *x == c).unwrap_or(0);
                match Category::ALL.get(idx + 1) {
                    Some(next) => CategoryFilter::Only(*next),
                    None => CategoryFilter::All,
                }
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All categories",
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

/// One blog post record. Posts are created once at startup from the catalog
/// and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    /// Display string, e.g. "May 12, 2025". Not parsed anywhere.
    pub date: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Banner image reference. Missing images degrade to an author banner.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Opaque pre-authored article text, rendered as-is with wrapping.
    #[serde(default)]
    pub body: String,
}

/// Events delivered to the app over the main channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The simulated load delay for the main page elapsed.
    CatalogReady,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parsing() {
        assert_eq!("frontend".parse::<Category>().unwrap(), Category::Frontend);
        assert_eq!("Backend".parse::<Category>().unwrap(), Category::Backend);
        assert!("fullstack".parse::<Category>().is_err());
    }

    #[test]
    fn category_filter_cycles_through_all_variants() {
        let mut filter = CategoryFilter::All;
        let mut seen = vec![filter];
        loop {
            filter = filter.next();
            if filter == CategoryFilter::All {
                break;
            }
            seen.push(filter);
        }
        // All plus one entry per category.
        assert_eq!(seen.len(), 1 + Category::ALL.len());
    }

    #[test]
    fn category_filter_matching() {
        assert!(CategoryFilter::All.matches(Category::Backend));
        assert!(CategoryFilter::Only(Category::Frontend).matches(Category::Frontend));
        assert!(!CategoryFilter::Only(Category::Frontend).matches(Category::Backend));
    }
}
