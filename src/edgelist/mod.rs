use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::{Path, PathBuf},
};

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::{debug, trace};

use crate::routing::{Graph, adapters::EdgeRecord};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read edge list: {0}")]
    Read(#[from] io::Error),

    #[error("invalid line {line}: {text}\nexpected: Node1 Node2 Distance [Time]")]
    MalformedLine { line: usize, text: String },

    #[error("invalid number {token:?} on line {line}: {text}")]
    InvalidNumber {
        line: usize,
        text: String,
        token: String,
    },
}

/// A fully parsed edge list file.
///
/// Each significant line is either `A B distance time` or `A B weight`, where
/// the single weight serves as both distance and time. Blank lines and lines
/// starting with `#` are ignored.
#[derive(Debug, Default)]
pub struct EdgeList {
    pub records: Vec<EdgeRecord>,
}

impl EdgeList {
    /// Reads a plain or gzip-compressed (`.gz`) edge list from disk.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let is_gzip = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

        if is_gzip {
            debug!(?path, "decompressing gzip edge list");
            Self::from_reader(GzDecoder::new(file))
        } else {
            Self::from_reader(file)
        }
    }

    /// Parse from any reader. Nothing is returned unless every line is valid.
    pub fn from_reader<R: Read>(r: R) -> Result<Self, LoadError> {
        let reader = BufReader::new(r);
        let mut records = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(record) = parse_line(i + 1, &line)? {
                records.push(record);
            }
        }

        debug!(edges = records.len(), "parsed edge list");
        Ok(Self { records })
    }
}

pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph, LoadError> {
    let edges = EdgeList::read(path)?;
    Graph::from_source(&edges)
}

fn parse_line(line_no: usize, raw: &str) -> Result<Option<EdgeRecord>, LoadError> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        trace!(line = line_no, "skipping blank or comment line");
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    // `inf` and `nan` parse as f64 but are not usable weights
    let number = |token: &str| {
        token
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .ok_or_else(|| LoadError::InvalidNumber {
                line: line_no,
                text: line.to_owned(),
                token: token.to_owned(),
            })
    };

    let (from, to, distance, time) = match tokens.as_slice() {
        [a, b, distance, time] => (a, b, number(*distance)?, number(*time)?),
        [a, b, weight] => {
            let weight = number(*weight)?;
            (a, b, weight, weight)
        }
        _ => {
            return Err(LoadError::MalformedLine {
                line: line_no,
                text: line.to_owned(),
            });
        }
    };

    Ok(Some(EdgeRecord {
        from: from.to_string(),
        to: to.to_string(),
        distance,
        time,
    }))
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use flate2::{Compression, write::GzEncoder};

    use super::*;
    use crate::routing::{WeightMode, dijkstra};

    fn parse(input: &str) -> Result<EdgeList, LoadError> {
        EdgeList::from_reader(Cursor::new(input))
    }

    fn graph(input: &str) -> Graph {
        Graph::from_source(&parse(input).unwrap()).unwrap()
    }

    #[test]
    fn four_token_lines_carry_distance_and_time() {
        let g = graph("A B 5 10\nB C 3 4\n");
        let a = g.node_index("A").unwrap();
        let b = g.node_index("B").unwrap();

        assert_eq!(g.size(), 3);
        assert_eq!(g.edge_weight(a, b, WeightMode::ByDistance), 5.0);
        assert_eq!(g.edge_weight(a, b, WeightMode::ByTime), 10.0);

        let result = dijkstra::solve(&g, "A", "C", WeightMode::ByDistance).unwrap();
        assert_eq!(result.total_cost(), 8.0);
    }

    #[test]
    fn three_token_line_uses_weight_for_both() {
        let g = graph("A B 7");
        let a = g.node_index("A").unwrap();
        let b = g.node_index("B").unwrap();

        assert_eq!(g.edge_weight(a, b, WeightMode::ByDistance), 7.0);
        assert_eq!(g.edge_weight(a, b, WeightMode::ByTime), 7.0);
    }

    #[test]
    fn skips_comments_blank_lines_and_extra_whitespace() {
        let list = parse("# header\n\n   \n  A\tB   1.5  2.5  \n# B C 1\n").unwrap();
        assert_eq!(
            list.records,
            vec![EdgeRecord {
                from: "A".into(),
                to: "B".into(),
                distance: 1.5,
                time: 2.5,
            }]
        );
    }

    #[test]
    fn wrong_token_count_reports_line_number_and_text() {
        let err = parse("# comment\nA B 1\nA B\n").unwrap_err();
        match err {
            LoadError::MalformedLine { line, text } => {
                assert_eq!(line, 3);
                assert_eq!(text, "A B");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(matches!(
            parse("A B 1 2 3").unwrap_err(),
            LoadError::MalformedLine { line: 1, .. }
        ));
    }

    #[test]
    fn non_numeric_weight_fails_the_whole_load() {
        let err = parse("A B 1 2\nB C fast 4\nC D 1 1\n").unwrap_err();
        match err {
            LoadError::InvalidNumber { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "fast");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_weights_are_rejected() {
        for input in ["A B nan\nB C 1", "A B 1 inf", "A B -infinity 2", "A B NaN 1"] {
            assert!(
                matches!(parse(input), Err(LoadError::InvalidNumber { line: 1, .. })),
                "{input:?} should not load"
            );
        }
    }

    #[test]
    fn building_a_graph_borrows_the_records() {
        let list = parse("A B 1 2\nB C 3 4\n").unwrap();
        let g = Graph::from_source(&list).unwrap();
        assert_eq!(g.edge_count(), list.records.len());
        assert_eq!(list.records[1].from, "B");
    }

    #[test]
    fn reads_gzip_files() {
        let path = std::env::temp_dir().join(format!(
            "dual_weight_routes_{}_edges.txt.gz",
            std::process::id()
        ));
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"A B 5 10\nB C 3 4\n").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let g = load_graph(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(g.size(), 3);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = EdgeList::read("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
