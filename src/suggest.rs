use std::collections::HashSet;

use crate::types::Post;

/// Suggested posts shown under an article: up to three by the same author
/// (padded from the rest of the catalog when the author has too few), and up
/// to three from other authors that were not already used as padding.
#[derive(Debug, Default)]
pub struct Suggestions<'a> {
    pub same_author: Vec<&'a Post>,
    pub other: Vec<&'a Post>,
}

impl Suggestions<'_> {
    pub fn is_empty(&self) -> bool {
        self.same_author.is_empty() && self.other.is_empty()
    }
}

const MAX_PER_SECTION: usize = 3;

/// Compute the suggestion widgets for `target`.
///
/// Deterministic and order-preserving over the catalog order. The target
/// never appears in either list and the two lists are id-disjoint. Either
/// list may be shorter than three (or empty) when the catalog is small; the
/// caller omits empty sections entirely.
pub fn suggest<'a>(target: &Post, all_posts: &'a [Post]) -> Suggestions<'a> {
    let mut same_author: Vec<&Post> = Vec::new();
    let mut others: Vec<&Post> = Vec::new();
    for post in all_posts {
        if post.id == target.id {
            continue;
        }
        if post.author == target.author {
            same_author.push(post);
        } else {
            others.push(post);
        }
    }

    // Pad the author section from the front of the others list, then cap it.
    if same_author.len() < MAX_PER_SECTION {
        let needed = MAX_PER_SECTION - same_author.len();
        same_author.extend(others.iter().take(needed).copied());
    }
    same_author.truncate(MAX_PER_SECTION);

    // Anything consumed as padding must not show up again below.
    let used: HashSet<u64> = same_author.iter().map(|p| p.id).collect();
    let other: Vec<&Post> = others
        .iter()
        .copied()
        .filter(|p| !used.contains(&p.id))
        .take(MAX_PER_SECTION)
        .collect();

    Suggestions { same_author, other }
}
