//! Property-style checks for the content selector: filtering, grouping and
//! suggestion selection over assorted catalog shapes.

use blogcat::filter::{filter_posts, group_by_category};
use blogcat::suggest::suggest;
use blogcat::{Catalog, Category, CategoryFilter, Post};

fn post(id: u64, title: &str, author: &str, category: Category, tags: &[&str]) -> Post {
    Post {
        id,
        title: title.into(),
        subtitle: String::new(),
        author: author.into(),
        date: String::new(),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image_url: None,
        body: String::new(),
    }
}

fn assorted_catalog() -> Vec<Post> {
    vec![
        post(1, "React Basics", "A", Category::Frontend, &["react", "beginner"]),
        post(2, "Go Basics", "A", Category::Backend, &["go"]),
        post(3, "Vue in Anger", "B", Category::Frontend, &["vue"]),
        post(4, "Queues", "C", Category::Backend, &["queues", "go"]),
        post(5, "CSS Tricks", "B", Category::Frontend, &["css"]),
        post(6, "Sharding", "D", Category::Backend, &["databases"]),
    ]
}

#[test]
fn filter_result_is_subset_satisfying_predicate() {
    let posts = assorted_catalog();
    for term in ["", "go", "REACT", "basics", "nope"] {
        for category in [
            CategoryFilter::All,
            CategoryFilter::Only(Category::Frontend),
            CategoryFilter::Only(Category::Backend),
        ] {
            let result = filter_posts(&posts, term, category);
            let needle = term.to_lowercase();
            for p in &result {
                assert!(category.matches(p.category));
                if !needle.is_empty() {
                    let hit = p.title.to_lowercase().contains(&needle)
                        || p.tags.iter().any(|t| t.to_lowercase().contains(&needle));
                    assert!(hit, "post {} should match '{}'", p.id, term);
                }
                assert!(posts.iter().any(|orig| orig.id == p.id));
            }
        }
    }
}

#[test]
fn identity_filter_returns_everything_in_order() {
    let posts = assorted_catalog();
    let result = filter_posts(&posts, "", CategoryFilter::All);
    let ids: Vec<u64> = result.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn filter_preserves_relative_order() {
    let posts = assorted_catalog();
    let result = filter_posts(&posts, "go", CategoryFilter::All);
    let ids: Vec<u64> = result.iter().map(|p| p.id).collect();
    // "go" matches Go Basics (title+tag) and Queues (tag), catalog order.
    assert_eq!(ids, vec![2, 4]);
}

#[test]
fn grouping_partitions_without_loss_or_duplication() {
    let posts = assorted_catalog();
    let refs: Vec<&Post> = posts.iter().collect();
    let groups = group_by_category(&refs);

    let mut seen: Vec<u64> = groups
        .iter()
        .flat_map(|(_, members)| members.iter().map(|p| p.id))
        .collect();
    seen.sort_unstable();
    let mut expected: Vec<u64> = posts.iter().map(|p| p.id).collect();
    expected.sort_unstable();
    assert_eq!(seen, expected);

    for (category, members) in &groups {
        assert!(!members.is_empty());
        assert!(members.iter().all(|p| p.category == *category));
    }
}

#[test]
fn grouping_omits_absent_categories() {
    let posts = vec![
        post(1, "React Basics", "A", Category::Frontend, &[]),
        post(2, "Vue in Anger", "B", Category::Frontend, &[]),
    ];
    let refs: Vec<&Post> = posts.iter().collect();
    let groups = group_by_category(&refs);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].0, Category::Frontend);
}

#[test]
fn suggestions_bounds_and_disjointness_hold_for_every_target() {
    let posts = assorted_catalog();
    for target in &posts {
        let s = suggest(target, &posts);

        assert!(s.same_author.len() <= 3);
        assert!(s.other.len() <= 3);
        assert!(s.same_author.iter().all(|p| p.id != target.id));
        assert!(s.other.iter().all(|p| p.id != target.id));

        let author_ids: std::collections::HashSet<u64> =
            s.same_author.iter().map(|p| p.id).collect();
        assert!(s.other.iter().all(|p| !author_ids.contains(&p.id)));
    }
}

#[test]
fn padding_consumes_others_front_first() {
    // Target has exactly one same-author sibling and plenty of others: the
    // author section must be padded to exactly three, in original order.
    let posts = vec![
        post(1, "t1", "A", Category::Frontend, &[]),
        post(2, "t2", "B", Category::Frontend, &[]),
        post(3, "t3", "A", Category::Backend, &[]),
        post(4, "t4", "C", Category::Backend, &[]),
        post(5, "t5", "D", Category::Frontend, &[]),
    ];
    let s = suggest(&posts[0], &posts);
    let ids: Vec<u64> = s.same_author.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 2, 4]);
    let other_ids: Vec<u64> = s.other.iter().map(|p| p.id).collect();
    assert_eq!(other_ids, vec![5]);
}

#[test]
fn tiny_catalog_yields_partial_or_empty_suggestions() {
    let posts = vec![
        post(1, "only", "A", Category::Frontend, &[]),
        post(2, "other", "B", Category::Backend, &[]),
    ];
    let s = suggest(&posts[0], &posts);
    // The lone other post is consumed as padding; nothing left below.
    assert_eq!(s.same_author.len(), 1);
    assert!(s.other.is_empty());
}

#[test]
fn builtin_catalog_suggestions_are_always_well_formed() {
    let catalog = Catalog::builtin();
    for target in catalog.posts() {
        let s = suggest(target, catalog.posts());
        // A dozen posts with recurring authors: both sections fill up.
        assert_eq!(s.same_author.len(), 3, "target {}", target.id);
        assert_eq!(s.other.len(), 3, "target {}", target.id);
    }
}
