use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf}
};

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::model::structures::{contest::Contest, performances::ContestPerformances, rating_summary::RatingSummary};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read or write contest data: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse contest data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No standings file for contest {slug}")]
    MissingStandings { slug: String }
}

/// Contest descriptor as it appears in `contests.json`. The per-contest
/// standings and authority files are joined in at load time; the same shape
/// is written back out as the frontend's contest index.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContestDescriptor {
    slug: String,
    name: String,
    start_time: DateTime<FixedOffset>,
    end_time: DateTime<FixedOffset>,
    rated: bool
}

/// Filesystem boundary of the processor. Reads the normalized data the
/// crawler hands over and writes the static documents the frontend serves.
///
/// Input layout, under the data directory: `contests.json`,
/// `standings/<slug>.json`, and optionally `aperfs/<slug>.json` with
/// authority-published ratings. Output layout, under the output directory:
/// `perfs/<slug>.json`, `contests/contests.json`, `ratings.json`.
pub struct DataStore {
    data_dir: PathBuf,
    out_dir: PathBuf
}

impl DataStore {
    pub fn new(data_dir: &Path, out_dir: &Path) -> DataStore {
        DataStore {
            data_dir: data_dir.to_path_buf(),
            out_dir: out_dir.to_path_buf()
        }
    }

    /// Loads every contest, joining standings and authority ratings onto the
    /// descriptors. Contests come back in `contests.json` order; the model
    /// enforces the chronological invariant itself.
    pub fn load_contests(&self) -> Result<Vec<Contest>, StoreError> {
        let raw = fs::read_to_string(self.data_dir.join("contests.json"))?;
        let descriptors: Vec<ContestDescriptor> = serde_json::from_str(&raw)?;
        info!("Loaded {} contest descriptors", descriptors.len());

        descriptors
            .into_iter()
            .map(|descriptor| {
                let standings = self.load_standings(&descriptor.slug)?;
                let authority_ratings = self.load_authority_ratings(&descriptor.slug)?;

                Ok(Contest {
                    slug: descriptor.slug,
                    name: descriptor.name,
                    start_time: descriptor.start_time,
                    end_time: descriptor.end_time,
                    rated: descriptor.rated,
                    standings,
                    authority_ratings
                })
            })
            .collect()
    }

    fn load_standings(&self, slug: &str) -> Result<Vec<String>, StoreError> {
        let path = self.data_dir.join("standings").join(format!("{slug}.json"));
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::MissingStandings { slug: slug.to_string() })
            }
            Err(e) => return Err(StoreError::Io(e))
        };

        Ok(serde_json::from_str(&raw)?)
    }

    /// Authority ratings are optional per contest; a missing file simply
    /// means the authority never published for that round.
    fn load_authority_ratings(&self, slug: &str) -> Result<Option<HashMap<String, f64>>, StoreError> {
        let path = self.data_dir.join("aperfs").join(format!("{slug}.json"));
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e))
        }
    }

    /// Writes one round's performance document.
    pub fn write_performances(&self, slug: &str, performances: &ContestPerformances) -> Result<(), StoreError> {
        let dir = self.out_dir.join("perfs");
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{slug}.json")), serde_json::to_string(performances)?)?;

        Ok(())
    }

    /// Writes the contest index the frontend lists, newest round first.
    pub fn write_contest_index(&self, contests: &[Contest]) -> Result<(), StoreError> {
        let dir = self.out_dir.join("contests");
        fs::create_dir_all(&dir)?;

        let entries: Vec<ContestDescriptor> = contests
            .iter()
            .sorted_by(|a, b| b.end_time.cmp(&a.end_time).then_with(|| a.slug.cmp(&b.slug)))
            .map(|contest| ContestDescriptor {
                slug: contest.slug.clone(),
                name: contest.name.clone(),
                start_time: contest.start_time,
                end_time: contest.end_time,
                rated: contest.rated
            })
            .collect();

        fs::write(dir.join("contests.json"), serde_json::to_string(&entries)?)?;

        Ok(())
    }

    /// Writes the final per-user rating map.
    pub fn write_ratings(&self, summaries: &IndexMap<String, RatingSummary>) -> Result<(), StoreError> {
        fs::create_dir_all(&self.out_dir)?;
        fs::write(self.out_dir.join("ratings.json"), serde_json::to_string(summaries)?)?;

        Ok(())
    }
}
