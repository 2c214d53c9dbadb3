//! The post catalog: a fixed, ordered, read-only collection supplied once at
//! startup. The default set is embedded so the binary works with no
//! arguments; `--catalog <file.toml>` swaps in an external file instead of
//! compiling content into logic.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::types::{Category, Post};

#[derive(Debug, Clone)]
pub struct Catalog {
    posts: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "post", default)]
    posts: Vec<Post>,
}

impl Catalog {
    /// Wrap an already-validated ordered post collection.
    pub fn new(posts: Vec<Post>) -> Result<Self> {
        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(post.id) {
                bail!("Duplicate post id {} in catalog", post.id);
            }
            if post.title.trim().is_empty() {
                bail!("Post {} has an empty title", post.id);
            }
        }
        Ok(Self { posts })
    }

    /// Load a catalog from a TOML file with `[[post]]` tables.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let file: CatalogFile = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;
        if file.posts.is_empty() {
            bail!("Catalog file {} contains no posts", path.display());
        }
        Self::new(file.posts)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Look up a post by id. A missing id is not an error; callers treat it
    /// as "nothing to show".
    pub fn get(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// The embedded default catalog.
    pub fn builtin() -> Self {
        let posts = vec![
            post(
                1,
                "React Rendering, Demystified",
                "What actually happens between setState and the screen",
                "Maya Lindgren",
                "Jan 14, 2025",
                Category::Frontend,
                &["react", "rendering", "performance"],
                Some("banners/react-rendering.jpg"),
                "Every React update starts as a plain JavaScript object describing \
                 what the UI should look like. This article walks the path from a \
                 state change to committed DOM mutations, and shows where the \
                 common performance myths come from.\n\nWe finish with a checklist \
                 you can apply to any slow component tree before reaching for \
                 memoization.",
            ),
            post(
                2,
                "CSS Grid Beyond the Basics",
                "Named areas, subgrid, and layouts that survive content changes",
                "Maya Lindgren",
                "Feb 02, 2025",
                Category::Frontend,
                &["css", "grid", "layout"],
                Some("banners/css-grid.jpg"),
                "Grid templates read like ASCII art, and that is their superpower: \
                 the layout is visible in the stylesheet itself.\n\nThis post covers \
                 named areas, auto-placement quirks, and the subgrid cases where a \
                 nested grid finally behaves like part of its parent.",
            ),
            post(
                3,
                "Designing Rate Limiters",
                "Token buckets, sliding windows, and the failure modes in between",
                "Tomas Abadi",
                "Feb 20, 2025",
                Category::Backend,
                &["api", "rate-limiting", "reliability"],
                Some("banners/rate-limiters.jpg"),
                "A rate limiter is a promise about worst-case load. We compare the \
                 classic algorithms, then look at what happens to each one during a \
                 deploy, a clock skew incident, and a thundering herd.\n\nThe \
                 conclusion: pick the simplest limiter whose failure mode you can \
                 live with.",
            ),
            post(
                4,
                "TypeScript Narrowing Patterns",
                "Letting the compiler carry proofs for you",
                "Priya Nair",
                "Mar 03, 2025",
                Category::Frontend,
                &["typescript", "types"],
                None,
                "Discriminated unions turn runtime checks into compile-time \
                 guarantees. We build up a set of narrowing patterns, from simple \
                 tag fields to assertion functions, and discuss when each one pays \
                 its complexity budget.",
            ),
            post(
                5,
                "Postgres Indexing Field Notes",
                "What EXPLAIN taught us about our own schema",
                "Tomas Abadi",
                "Mar 18, 2025",
                Category::Backend,
                &["postgres", "databases", "performance"],
                Some("banners/postgres-indexing.jpg"),
                "Indexes are bets about future queries. This is a tour of the bets \
                 we got wrong: partial indexes that never matched, composite \
                 indexes in the wrong column order, and the migration that locked a \
                 table at noon.\n\nEach mistake comes with the EXPLAIN output that \
                 finally made it obvious.",
            ),
            post(
                6,
                "Accessible Modals, For Real This Time",
                "Focus traps, inert backgrounds, and escape hatches",
                "Priya Nair",
                "Apr 01, 2025",
                Category::Frontend,
                &["accessibility", "html", "ux"],
                Some("banners/accessible-modals.jpg"),
                "Most modal bugs are focus bugs. We implement a dialog that keeps \
                 keyboard users inside, returns focus on close, and stays usable \
                 with a screen reader, then compare it with the native dialog \
                 element.",
            ),
            post(
                7,
                "Queues Are Not Buffers",
                "Backpressure lessons from a week of incident reviews",
                "Jonah Reyes",
                "Apr 15, 2025",
                Category::Backend,
                &["queues", "backpressure", "architecture"],
                None,
                "An unbounded queue does not absorb load, it hides it. Three \
                 postmortems, one pattern: the queue grew silently until latency \
                 became unrecoverable.\n\nWe walk through bounding strategies and \
                 what to signal upstream when the bound is hit.",
            ),
            post(
                8,
                "State Machines in the Browser",
                "Replacing boolean soup with explicit states",
                "Maya Lindgren",
                "May 05, 2025",
                Category::Frontend,
                &["state-machines", "javascript", "architecture"],
                Some("banners/state-machines.jpg"),
                "isLoading, isError, isRetrying: eight booleans make 256 states, \
                 of which five are intentional. We refactor a real form flow into \
                 an explicit state machine and count the bugs that simply stop \
                 being representable.",
            ),
            post(
                9,
                "gRPC or REST, and When It Matters",
                "A decision guide that is mostly about your team",
                "Jonah Reyes",
                "May 22, 2025",
                Category::Backend,
                &["grpc", "rest", "api"],
                Some("banners/grpc-rest.jpg"),
                "The protocol choice is rarely the bottleneck. We compare the two \
                 on contract evolution, debugging ergonomics, and browser support, \
                 and give the short list of situations where the answer is \
                 actually clear-cut.",
            ),
            post(
                10,
                "The Cost of a Spinner",
                "Perceived performance and honest loading states",
                "Priya Nair",
                "Jun 09, 2025",
                Category::Frontend,
                &["ux", "performance", "loading"],
                None,
                "Users forgive slow, they do not forgive uncertain. Skeleton \
                 screens, optimistic updates, and progress that never lies: this \
                 post measures how each technique changes perceived wait time on \
                 the same underlying latency.",
            ),
            post(
                11,
                "Idempotency Keys in Practice",
                "Making retries safe at the payment boundary",
                "Tomas Abadi",
                "Jun 28, 2025",
                Category::Backend,
                &["payments", "idempotency", "reliability"],
                Some("banners/idempotency.jpg"),
                "Retries are mandatory; duplicate side effects are not. We design \
                 an idempotency-key flow end to end: key generation, storage \
                 lifetime, and the subtle races between concurrent retries.",
            ),
            post(
                12,
                "Caching Without Lying",
                "Invalidation strategies that keep pages honest",
                "Jonah Reyes",
                "Jul 16, 2025",
                Category::Backend,
                &["caching", "http", "architecture"],
                Some("banners/caching.jpg"),
                "A cache is a bet that stale is acceptable. We map invalidation \
                 strategies to the kinds of staleness each allows, from TTLs to \
                 event-driven purges, and where a CDN quietly changes the rules.",
            ),
        ];
        // Builtin content is validated by tests; construction cannot fail.
        Self::new(posts).expect("builtin catalog is valid")
    }
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: u64,
    title: &str,
    subtitle: &str,
    author: &str,
    date: &str,
    category: Category,
    tags: &[&str],
    image_url: Option<&str>,
    body: &str,
) -> Post {
    Post {
        id,
        title: title.into(),
        subtitle: subtitle.into(),
        author: author.into(),
        date: date.into(),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image_url: image_url.map(Into::into),
        body: body.into(),
    }
}
