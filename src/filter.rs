use crate::types::{Category, CategoryFilter, Post};

/// Select the posts matching the current search term and category filter.
///
/// A post matches when the category filter accepts it AND the search term is
/// empty or case-insensitively appears as a substring of the title or of any
/// tag. Input order is preserved; an empty result is the "no posts found"
/// state, not an error.
pub fn filter_posts<'a>(
    posts: &'a [Post],
    search_term: &str,
    category: CategoryFilter,
) -> Vec<&'a Post> {
    let needle = search_term.to_lowercase();
    posts
        .iter()
        .filter(|post| category.matches(post.category))
        .filter(|post| {
            if needle.is_empty() {
                return true;
            }
            post.title.to_lowercase().contains(&needle)
                || post
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Partition posts into per-category groups, in the fixed display order
/// defined by `Category::ALL`. Categories with no posts are omitted so the
/// caller never renders a zero-count section header.
pub fn group_by_category<'a>(posts: &[&'a Post]) -> Vec<(Category, Vec<&'a Post>)> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let members: Vec<&Post> = posts
                .iter()
                .copied()
                .filter(|p| p.category == category)
                .collect();
            if members.is_empty() {
                None
            } else {
                Some((category, members))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str, category: Category, tags: &[&str]) -> Post {
        Post {
            id,
            title: title.into(),
            subtitle: String::new(),
            author: "A".into(),
            date: String::new(),
            category,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image_url: None,
            body: String::new(),
        }
    }

    fn sample() -> Vec<Post> {
        vec![
            post(1, "React Basics", Category::Frontend, &["react", "beginner"]),
            post(2, "Go Basics", Category::Backend, &["go"]),
            post(3, "CSS Grid Deep Dive", Category::Frontend, &["css"]),
        ]
    }

    #[test]
    fn empty_term_and_all_category_is_identity() {
        let posts = sample();
        let out = filter_posts(&posts, "", CategoryFilter::All);
        let ids: Vec<u64> = out.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn term_matches_title_or_tags_case_insensitively() {
        let posts = sample();
        // "react" hits post 1 via both title and tag, nothing else.
        let out = filter_posts(&posts, "react", CategoryFilter::All);
        assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);

        // Tag-only match, mixed case term.
        let out = filter_posts(&posts, "BeGiNnEr", CategoryFilter::All);
        assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn category_and_term_combine_with_and() {
        let posts = sample();
        let out = filter_posts(&posts, "basics", CategoryFilter::Only(Category::Backend));
        assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let posts = sample();
        let out = filter_posts(&posts, "kubernetes", CategoryFilter::All);
        assert!(out.is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let posts = sample();
        let out = filter_posts(&posts, "", CategoryFilter::Only(Category::Frontend));
        assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn grouping_is_a_partition_in_display_order() {
        let posts = sample();
        let refs: Vec<&Post> = posts.iter().collect();
        let groups = group_by_category(&refs);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, Category::Frontend);
        assert_eq!(groups[1].0, Category::Backend);

        // Every input appears exactly once across all groups.
        let mut ids: Vec<u64> = groups
            .iter()
            .flat_map(|(_, members)| members.iter().map(|p| p.id))
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_groups_are_omitted() {
        let posts = vec![
            post(1, "React Basics", Category::Frontend, &[]),
            post(3, "CSS Grid", Category::Frontend, &[]),
        ];
        let refs: Vec<&Post> = posts.iter().collect();
        let groups = group_by_category(&refs);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, Category::Frontend);
    }
}
