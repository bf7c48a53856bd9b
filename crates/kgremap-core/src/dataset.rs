//! Dataset assembly: two mappings + three triple splits → one [`Dataset`].

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::mapping::load_mapping;
use crate::triples::{load_triples, Triple};

pub const ENTITY_FILENAME: &str = "entity2id.txt";
pub const RELATION_FILENAME: &str = "relation2id.txt";
pub const TEST_FILENAME: &str = "test.txt";
pub const TRAIN_FILENAME: &str = "train.txt";
pub const VALID_FILENAME: &str = "valid.txt";

/// Where the five input files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLayout {
    pub entities: PathBuf,
    pub relations: PathBuf,
    pub test: PathBuf,
    pub train: PathBuf,
    pub valid: PathBuf,
}

impl DatasetLayout {
    /// The standard file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            entities: dir.join(ENTITY_FILENAME),
            relations: dir.join(RELATION_FILENAME),
            test: dir.join(TEST_FILENAME),
            train: dir.join(TRAIN_FILENAME),
            valid: dir.join(VALID_FILENAME),
        }
    }
}

/// The converted dataset. Field names are the keys of the output object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub entities: Vec<String>,
    pub relations: Vec<String>,
    pub train_subs: Vec<Triple>,
    pub valid_subs: Vec<Triple>,
    pub test_subs: Vec<Triple>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSummary {
    pub entities: usize,
    pub relations: usize,
    pub train: usize,
    pub valid: usize,
    pub test: usize,
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entities={} relations={} train={} valid={} test={}",
            self.entities, self.relations, self.train, self.valid, self.test
        )
    }
}

impl Dataset {
    /// Read mappings first (entities, relations), then the test, train and
    /// valid splits. The first failure aborts the whole build.
    pub fn build(layout: &DatasetLayout) -> Result<Self> {
        let entity_map = load_mapping(&layout.entities)?;
        let relation_map = load_mapping(&layout.relations)?;

        let test_subs = load_triples(&layout.test, &entity_map, &relation_map)?;
        let train_subs = load_triples(&layout.train, &entity_map, &relation_map)?;
        let valid_subs = load_triples(&layout.valid, &entity_map, &relation_map)?;

        let dataset = Dataset {
            entities: entity_map.into_ids(),
            relations: relation_map.into_ids(),
            train_subs,
            valid_subs,
            test_subs,
        };
        tracing::info!(summary = %dataset.summary(), "built dataset");
        Ok(dataset)
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            entities: self.entities.len(),
            relations: self.relations.len(),
            train: self.train_subs.len(),
            valid: self.valid_subs.len(),
            test: self.test_subs.len(),
        }
    }

    /// Long-form entity id → position in `entities`.
    pub fn entity_index(&self) -> HashMap<&str, usize> {
        position_index(&self.entities)
    }

    /// Long-form relation id → position in `relations`.
    pub fn relation_index(&self) -> HashMap<&str, usize> {
        position_index(&self.relations)
    }
}

fn position_index(ids: &[String]) -> HashMap<&str, usize> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect()
}

/// Build the dataset from the standard file names in `dir`.
pub fn build_dataset(dir: &Path) -> Result<Dataset> {
    Dataset::build(&DatasetLayout::in_dir(dir))
}
