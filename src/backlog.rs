//! Backlog summary: aggregate classified reviews per problem category.
//!
//! For each category: how many reviews selected it, their share of all reviews,
//! a rating-based sentiment split (4-5 stars positive, 1-2 negative, else neutral)
//! and the three most frequent topic words in those reviews.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::io::BufRead;
use tracing::warn;

use crate::analyze::Classifier;
use crate::decision::ClassificationResult;
use crate::lexicon::Category;

const TOP_TOPICS: usize = 3;
const MIN_TOPIC_LEN: usize = 4;

const TOPIC_STOPWORDS: &[&str] = &[
    "this", "that", "with", "have", "from", "they", "will", "been", "were", "your", "more",
    "when", "then", "than", "what", "just", "like", "also", "about", "very", "some", "into",
    "does", "dont", "cant", "which",
];

/// A review with its star rating (1-5).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatedReview {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "review")]
    pub body: String,
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedReview {
    pub review: RatedReview,
    pub result: ClassificationResult,
}

/// Rounded percentages of positive / neutral / negative ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSplit {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub category: Category,
    /// Human-readable name, see [`Category::label`].
    pub label: String,
    pub count: usize,
    /// Share of all reviews, one decimal.
    pub percentage: f64,
    pub sentiment: RatingSplit,
    pub top_topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogSummary {
    pub total_reviews: usize,
    /// Reviews with at least one selected category.
    pub problem_review_count: usize,
    /// Ordered by count, most frequent first.
    pub categories: Vec<CategoryStats>,
}

/// Read JSON-lines reviews. Blank lines are ignored; lines that do not parse
/// are logged and skipped. Only I/O errors fail.
pub fn read_rated_reviews<R: BufRead>(reader: R) -> anyhow::Result<Vec<RatedReview>> {
    let mut reviews = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading review line {}", n + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<RatedReview>(&line) {
            Ok(r) => reviews.push(r),
            Err(e) => warn!(
                target: "classifier",
                line = n + 1,
                error = %e,
                "skipping malformed review"
            ),
        }
    }
    Ok(reviews)
}

/// Classify rated reviews, keeping input order.
pub fn classify_rated(classifier: &Classifier, reviews: &[RatedReview]) -> Vec<ClassifiedReview> {
    reviews
        .iter()
        .map(|r| ClassifiedReview {
            review: r.clone(),
            result: classifier.classify(&r.title, &r.body),
        })
        .collect()
}

pub fn summarize(items: &[ClassifiedReview]) -> BacklogSummary {
    let total = items.len();
    let mut categories: Vec<CategoryStats> = Category::ALL
        .into_iter()
        .map(|cat| category_stats(cat, items, total))
        .collect();
    // stable: canonical order breaks ties
    categories.sort_by(|a, b| b.count.cmp(&a.count));

    BacklogSummary {
        total_reviews: total,
        problem_review_count: items
            .iter()
            .filter(|i| !i.result.categories.is_empty())
            .count(),
        categories,
    }
}

/// All items when `active` is empty, otherwise items selecting any active category.
pub fn filter_by_categories<'a>(
    items: &'a [ClassifiedReview],
    active: &BTreeSet<Category>,
) -> Vec<&'a ClassifiedReview> {
    items
        .iter()
        .filter(|i| active.is_empty() || i.result.categories.iter().any(|c| active.contains(c)))
        .collect()
}

fn category_stats(category: Category, items: &[ClassifiedReview], total: usize) -> CategoryStats {
    let in_cat: Vec<&ClassifiedReview> = items.iter().filter(|i| i.result.has(category)).collect();
    let count = in_cat.len();

    let percentage = if total > 0 {
        (count as f64 / total as f64 * 1000.0).round() / 10.0
    } else {
        0.0
    };

    CategoryStats {
        category,
        label: category.label().to_string(),
        count,
        percentage,
        sentiment: rating_split(&in_cat),
        top_topics: top_topics(in_cat.iter().map(|i| i.review.body.as_str())),
    }
}

fn rating_split(items: &[&ClassifiedReview]) -> RatingSplit {
    let count = items.len();
    if count == 0 {
        return RatingSplit {
            positive: 0,
            neutral: 0,
            negative: 100,
        };
    }
    let pos = items.iter().filter(|i| i.review.rating >= 4).count();
    let neg = items.iter().filter(|i| i.review.rating <= 2).count();
    let neu = count - pos - neg;
    let pct = |n: usize| (n as f64 / count as f64 * 100.0).round() as u32;
    RatingSplit {
        positive: pct(pos),
        neutral: pct(neu),
        negative: pct(neg),
    }
}

/// Most frequent lowercase ASCII words of 4+ letters, stopwords excluded.
/// Ties keep first-seen order.
pub fn top_topics<'a, I>(bodies: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut order: Vec<String> = Vec::new();
    let mut freq: HashMap<String, usize> = HashMap::new();

    for body in bodies {
        let lower = body.to_lowercase();
        for word in lower
            .split(|c: char| !c.is_ascii_lowercase())
            .filter(|w| w.len() >= MIN_TOPIC_LEN)
        {
            if TOPIC_STOPWORDS.contains(&word) {
                continue;
            }
            let n = freq.entry(word.to_string()).or_insert(0);
            if *n == 0 {
                order.push(word.to_string());
            }
            *n += 1;
        }
    }

    // stable sort keeps first-seen order among equal counts
    order.sort_by(|a, b| freq[b].cmp(&freq[a]));
    order.truncate(TOP_TOPICS);
    order
}
