//! Deterministic synthetic fixtures.
//!
//! Produces a search-API-shaped large document and a file of small
//! documents, for environments that do not ship the real fixture data.

use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde_json::{json, Value};
use tracing::info;

use crate::error::{BenchError, Result};

const WORDS: &[&str] = &[
    "rust", "json", "parser", "fast", "serde", "benchmark", "encode", "decode", "simd",
    "cache", "vector", "stream", "token", "value", "object", "array", "string", "number",
    "ユニコード", "café", "naïve", "emoji 🚀",
];

const LANGS: &[&str] = &["en", "ja", "fr", "de", "es"];

/// Seedable generator for fixture documents
pub struct FixtureGenerator {
    rng: Xoshiro256PlusPlus,
}

impl FixtureGenerator {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    fn sentence(&mut self, words: usize) -> String {
        (0..words)
            .map(|_| *WORDS.choose(&mut self.rng).unwrap_or(&"json"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn user(&mut self, id: u64) -> Value {
        let location = if self.rng.gen_bool(0.5) {
            Value::from(self.sentence(1))
        } else {
            Value::Null
        };
        json!({
            "id": id,
            "id_str": id.to_string(),
            "name": self.sentence(2),
            "screen_name": format!("user_{}", id),
            "location": location,
            "followers_count": self.rng.gen_range(0..100_000u32),
            "friends_count": self.rng.gen_range(0..5_000u32),
            "verified": self.rng.gen_bool(0.1),
            "profile_background_color": format!("{:06X}", self.rng.gen_range(0..0xFF_FFFFu32)),
        })
    }

    /// One status object, the unit both fixtures are built from
    pub fn status(&mut self, index: usize) -> Value {
        let id = 500_000_000_000_000_000u64 + index as u64;
        let word_count = self.rng.gen_range(4..16);
        let text = self.sentence(word_count);
        let hashtag_count: u32 = self.rng.gen_range(0..3);
        let hashtags: Vec<Value> = (0..hashtag_count)
            .map(|i| json!({ "text": self.sentence(1), "indices": [i * 10, i * 10 + 8] }))
            .collect();
        let user_id = self.rng.gen_range(1_000..10_000_000u64);
        let user = self.user(user_id);

        json!({
            "created_at": format!("Sun Aug 31 00:{:02}:{:02} +0000 2014", index % 60, (index * 7) % 60),
            "id": id,
            "id_str": id.to_string(),
            "text": text,
            "truncated": false,
            "entities": { "hashtags": hashtags, "symbols": [], "urls": [], "user_mentions": [] },
            "user": user,
            "geo": Value::Null,
            "coordinates": Value::Null,
            "retweet_count": self.rng.gen_range(0..1_000u32),
            "favorite_count": self.rng.gen_range(0..1_000u32),
            "score": self.rng.gen::<f64>() * 100.0,
            "favorited": false,
            "retweeted": false,
            "lang": *LANGS.choose(&mut self.rng).unwrap_or(&"en"),
        })
    }

    /// The large document: `count` statuses plus search metadata
    pub fn large_document(&mut self, count: usize) -> Value {
        let statuses: Vec<Value> = (0..count).map(|i| self.status(i)).collect();
        json!({
            "statuses": statuses,
            "search_metadata": {
                "completed_in": 0.087,
                "max_id": 505_874_924_095_815_681u64,
                "query": "%E4%B8%80",
                "count": count,
                "since_id": 0,
            }
        })
    }

    /// `count` small documents, one per element
    pub fn small_documents(&mut self, count: usize) -> Vec<Value> {
        (0..count).map(|i| self.status(i)).collect()
    }
}

/// Write both fixture files, creating parent directories as needed
pub fn write_fixtures(
    large_path: &Path,
    small_path: &Path,
    large_count: usize,
    small_count: usize,
    seed: u64,
) -> Result<()> {
    let mut generator = FixtureGenerator::with_seed(seed);

    let large = serde_json::to_string_pretty(&generator.large_document(large_count))?;
    write_file(large_path, &large)?;

    let mut lines = String::new();
    for doc in generator.small_documents(small_count) {
        lines.push_str(&serde_json::to_string(&doc)?);
        lines.push('\n');
    }
    write_file(small_path, &lines)?;

    info!(
        "Wrote fixtures {} ({} statuses) and {} ({} lines)",
        large_path.display(),
        large_count,
        small_path.display(),
        small_count
    );
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let report_err = |source| BenchError::Report {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(report_err)?;
    }
    fs::write(path, contents).map_err(report_err)
}
