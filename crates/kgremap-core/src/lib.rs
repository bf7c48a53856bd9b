//! kgremap: KB2E → HolE dataset conversion.
//!
//! Input is a directory of five tab-separated files:
//!
//! ```text
//! entity2id.txt     longEntityId    shortEntityId
//! relation2id.txt   longRelationId  shortRelationId
//! train.txt         longHeadId      longTailId      longRelationId
//! valid.txt         (same as train.txt)
//! test.txt          (same as train.txt)
//! ```
//!
//! The mapping files define the dense index of every long-form identifier;
//! the triple files are rewritten against those indices. The result is a
//! single [`Dataset`] with `entities`, `relations`, `train_subs`,
//! `valid_subs` and `test_subs`, ready for [`sink::write_dataset`].
//!
//! ```no_run
//! use std::path::Path;
//!
//! let ds = kgremap_core::build_dataset(Path::new("data/FB15k"))?;
//! kgremap_core::sink::write_dataset(&ds, Path::new("fb15k.json"))?;
//! # Ok::<(), kgremap_core::RemapError>(())
//! ```

pub mod dataset;
pub mod error;
pub mod mapping;
pub mod sink;
pub mod triples;

mod tsv;

pub use dataset::{build_dataset, Dataset, DatasetLayout, DatasetSummary};
pub use error::{IdKind, RemapError, Result};
pub use mapping::{load_mapping, IdMapping};
pub use sink::{read_dataset, write_dataset, OutputFormat};
pub use triples::{load_triples, read_triples, Triple};
