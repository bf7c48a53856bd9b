//! `train.txt` / `valid.txt` / `test.txt` loading.
//!
//! Each line is `head\ttail\trelation` in long form. The positional order is
//! head, tail, relation (not subject, predicate, object) and is kept as-is in
//! the output.

use std::io::BufRead;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IdKind, Result};
use crate::mapping::IdMapping;
use crate::tsv;

/// One labelled edge, as dense indices. Serialized as `[head, tail, relation]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32, u32)", into = "(u32, u32, u32)")]
pub struct Triple {
    pub head: u32,
    pub tail: u32,
    pub relation: u32,
}

impl Triple {
    pub fn new(head: u32, tail: u32, relation: u32) -> Self {
        Self {
            head,
            tail,
            relation,
        }
    }
}

impl From<(u32, u32, u32)> for Triple {
    fn from((head, tail, relation): (u32, u32, u32)) -> Self {
        Self::new(head, tail, relation)
    }
}

impl From<Triple> for (u32, u32, u32) {
    fn from(t: Triple) -> Self {
        (t.head, t.tail, t.relation)
    }
}

/// Translate every line of `reader` into a [`Triple`], in order.
pub fn read_triples<R: BufRead>(
    reader: R,
    source: &Path,
    entities: &IdMapping,
    relations: &IdMapping,
) -> Result<Vec<Triple>> {
    let mut out = Vec::new();
    tsv::for_each_line(reader, source, |line_no, line| {
        let [head, tail, relation] = tsv::split_fields::<3>(line, source, line_no)?;
        out.push(Triple {
            head: entities.resolve(head, IdKind::Entity, source, line_no)?,
            tail: entities.resolve(tail, IdKind::Entity, source, line_no)?,
            relation: relations.resolve(relation, IdKind::Relation, source, line_no)?,
        });
        Ok(())
    })?;
    Ok(out)
}

/// Load a three-column triple file against already-built mappings.
pub fn load_triples(path: &Path, entities: &IdMapping, relations: &IdMapping) -> Result<Vec<Triple>> {
    let reader = tsv::open(path)?;
    let triples = read_triples(reader, path, entities, relations)?;
    tracing::debug!(path = %path.display(), triples = triples.len(), "loaded triples");
    Ok(triples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemapError;

    fn mappings() -> (IdMapping, IdMapping) {
        let entities =
            IdMapping::from_reader("e1\t0\ne2\t1\ne3\t2\n".as_bytes(), Path::new("entity2id.txt"))
                .unwrap();
        let relations =
            IdMapping::from_reader("r1\t0\nr2\t1\n".as_bytes(), Path::new("relation2id.txt"))
                .unwrap();
        (entities, relations)
    }

    fn read(text: &str) -> Result<Vec<Triple>> {
        let (e, r) = mappings();
        read_triples(text.as_bytes(), Path::new("train.txt"), &e, &r)
    }

    #[test]
    fn head_tail_relation_positional_order() {
        let triples = read("e3\te1\tr2\n").unwrap();
        assert_eq!(triples, vec![Triple::new(2, 0, 1)]);
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let triples = read("e2\te1\tr1\ne1\te2\tr1\ne2\te1\tr1\n").unwrap();
        assert_eq!(
            triples,
            vec![
                Triple::new(1, 0, 0),
                Triple::new(0, 1, 0),
                Triple::new(1, 0, 0)
            ]
        );
    }

    #[test]
    fn relation_looked_up_in_relation_table() {
        // `e1` is an entity, not a relation.
        let err = read("e1\te2\te1\n").unwrap_err();
        match err {
            RemapError::Lookup { kind, id, line, .. } => {
                assert_eq!(kind, IdKind::Relation);
                assert_eq!(id, "e1");
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_tail_entity() {
        let err = read("e1\te2\tr1\ne1\tghost\tr1\n").unwrap_err();
        assert!(matches!(
            err,
            RemapError::Lookup {
                kind: IdKind::Entity,
                line: 2,
                ..
            }
        ));
    }

    #[test]
    fn two_field_line_is_format_error() {
        let err = read("e1\te2\n").unwrap_err();
        assert!(matches!(
            err,
            RemapError::Format {
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn non_numeric_short_id_is_parse_error() {
        let entities =
            IdMapping::from_reader("e1\tzero\n".as_bytes(), Path::new("entity2id.txt")).unwrap();
        let (_, relations) = mappings();
        let err = read_triples(
            "e1\te1\tr1\n".as_bytes(),
            Path::new("valid.txt"),
            &entities,
            &relations,
        )
        .unwrap_err();
        match err {
            RemapError::Parse { value, path, .. } => {
                assert_eq!(value, "zero");
                assert_eq!(path, Path::new("valid.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn serializes_as_sequence() {
        let json = serde_json::to_string(&Triple::new(3, 4, 5)).unwrap();
        assert_eq!(json, "[3,4,5]");
        let back: Triple = serde_json::from_str("[3,4,5]").unwrap();
        assert_eq!(back, Triple::new(3, 4, 5));
    }
}
