//! PACE 2017 text formats
//!
//! # Format
//!
//! Graphs (`.gr`):
//! ```text
//! c comment
//! p tw <vertices> <edges>
//! 1 2
//! 2 3
//! ```
//!
//! Tree decompositions (`.td`):
//! ```text
//! s td <bags> <max bag size> <vertices>
//! b 1 1 2
//! b 2 2 3
//! 1 2
//! ```
//!
//! Vertex and bag ids are 1-based in both formats.

use super::UndirectedGraph;
use crate::algorithms::TreeDecomposition;
use anyhow::{bail, Context, Result};
use std::fmt;
use std::io::{BufRead, Write};

impl UndirectedGraph {
    /// Read a graph in PACE `.gr` format
    ///
    /// The `p` line declares vertices `1..=n`; every following line is one
    /// edge. Construction is strict: self-loops and repeated edges are errors.
    ///
    /// # Errors
    ///
    /// Returns error if the `p` line is missing or malformed, an edge appears
    /// before it, a line does not parse, or an edge is invalid
    ///
    /// # Example
    ///
    /// ```
    /// use chordal_td::UndirectedGraph;
    ///
    /// let text = "c square\np tw 4 4\n1 2\n2 3\n3 4\n4 1\n";
    /// let graph = UndirectedGraph::read_pace(text.as_bytes()).unwrap();
    /// assert_eq!(graph.num_vertices(), 4);
    /// assert_eq!(graph.num_edges(), 4);
    /// ```
    pub fn read_pace<R: BufRead>(reader: R) -> Result<Self> {
        let mut graph: Option<Self> = None;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.context("Failed to read PACE input")?;
            let fields: Vec<&str> = line.split_whitespace().collect();

            match fields.as_slice() {
                [] | ["c", ..] => {}
                ["p", "tw", n, _m] => {
                    if graph.is_some() {
                        bail!("line {}: duplicate p-line", line_no + 1);
                    }
                    let n: u32 = n
                        .parse()
                        .with_context(|| format!("line {}: bad vertex count", line_no + 1))?;
                    graph = Some(Self::with_vertices(1..=n)?);
                }
                [u, v] => {
                    let Some(g) = graph.as_mut() else {
                        bail!("line {}: edge before the p-line", line_no + 1);
                    };
                    let u: u32 = u
                        .parse()
                        .with_context(|| format!("line {}: bad endpoint", line_no + 1))?;
                    let v: u32 = v
                        .parse()
                        .with_context(|| format!("line {}: bad endpoint", line_no + 1))?;
                    if !g.add_edge(u, v)? {
                        bail!("line {}: repeated edge {u}-{v}", line_no + 1);
                    }
                }
                _ => bail!("line {}: unrecognised line {line:?}", line_no + 1),
            }
        }

        graph.context("PACE input has no p-line")
    }
}

/// PACE `.td` rendering of a decomposition, see [`TreeDecomposition::pace`]
#[derive(Debug, Clone, Copy)]
pub struct PaceTd<'a> {
    decomposition: &'a TreeDecomposition,
    num_vertices: usize,
}

impl fmt::Display for PaceTd<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let td = self.decomposition;
        writeln!(
            f,
            "s td {} {} {}",
            td.num_bags(),
            td.max_bag_size(),
            self.num_vertices
        )?;

        for (i, bag) in td.bags().iter().enumerate() {
            write!(f, "b {}", i + 1)?;
            for v in bag {
                write!(f, " {v}")?;
            }
            writeln!(f)?;
        }

        for (a, b) in td.one_based_edges() {
            writeln!(f, "{a} {b}")?;
        }
        Ok(())
    }
}

impl TreeDecomposition {
    /// PACE `.td` view for formatting
    ///
    /// `num_vertices` is the vertex count of the decomposed graph, reported in
    /// the `s` line.
    #[must_use]
    pub const fn pace(&self, num_vertices: usize) -> PaceTd<'_> {
        PaceTd {
            decomposition: self,
            num_vertices,
        }
    }

    /// Render in PACE `.td` format
    #[must_use]
    pub fn to_pace_string(&self, num_vertices: usize) -> String {
        self.pace(num_vertices).to_string()
    }

    /// Write in PACE `.td` format
    ///
    /// # Errors
    ///
    /// Returns error if the writer fails
    pub fn write_pace<W: Write>(&self, mut writer: W, num_vertices: usize) -> Result<()> {
        write!(writer, "{}", self.pace(num_vertices))
            .context("Failed to write tree decomposition")?;
        writer.flush().context("Failed to flush tree decomposition")?;
        Ok(())
    }
}
