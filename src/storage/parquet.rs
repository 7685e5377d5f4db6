//! Parquet I/O for tree decomposition persistence
//!
//! # Format
//!
//! A decomposition is stored as two Parquet files:
//! - `{path}_bags.parquet`: (bag, vertex), one row per membership; an empty
//!   bag is one row with a null vertex
//! - `{path}_tree_edges.parquet`: (source, target), 0-based bag indices

use crate::algorithms::TreeDecomposition;
use anyhow::{bail, Context, Result};
use arrow::array::{Array, UInt32Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::arrow_writer::ArrowWriter;
use parquet::file::properties::WriterProperties;
use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

impl TreeDecomposition {
    /// Write decomposition to Parquet files
    ///
    /// Creates two files:
    /// - `{path}_bags.parquet`: bag membership (bag, vertex)
    /// - `{path}_tree_edges.parquet`: tree edges (source, target)
    ///
    /// # Errors
    ///
    /// Returns error if file I/O fails or Arrow conversion fails
    #[allow(clippy::unused_async)] // Async API for future I/O operations
    pub async fn write_parquet<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let base_path = path.as_ref();

        self.write_bags_parquet(base_path)?;
        self.write_tree_edges_parquet(base_path)?;

        Ok(())
    }

    /// Read decomposition from Parquet files
    ///
    /// # Errors
    ///
    /// Returns error if files don't exist, Arrow conversion fails, or bag
    /// indices are not contiguous from 0
    #[allow(clippy::unused_async)] // Async API for future I/O operations
    pub async fn read_parquet<P: AsRef<Path>>(path: P) -> Result<Self> {
        let base_path = path.as_ref();

        let bags = Self::read_bags_parquet(base_path)?;
        let edges = Self::read_tree_edges_parquet(base_path)?;

        if let Some(&(a, b)) = edges.iter().find(|&&(a, b)| a >= bags.len() || b >= bags.len()) {
            bail!("Tree edge ({a}, {b}) refers to a missing bag");
        }

        Ok(Self::from_parts(bags, edges))
    }

    fn write_bags_parquet(&self, base_path: &Path) -> Result<()> {
        let bags_path = format!("{}_bags.parquet", base_path.display());

        let mut bag_ids = Vec::new();
        let mut vertices = Vec::new();

        for (i, bag) in self.bags().iter().enumerate() {
            let bag_id = u32::try_from(i).context("Too many bags for a u32 index")?;
            if bag.is_empty() {
                bag_ids.push(bag_id);
                vertices.push(None);
            }
            for &v in bag {
                bag_ids.push(bag_id);
                vertices.push(Some(v));
            }
        }

        let schema = Arc::new(Schema::new(vec![
            Field::new("bag", DataType::UInt32, false),
            Field::new("vertex", DataType::UInt32, true),
        ]));

        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(UInt32Array::from(bag_ids)),
                Arc::new(UInt32Array::from(vertices)),
            ],
        )
        .context("Failed to create bags RecordBatch")?;

        write_batch(&bags_path, schema, &batch)
    }

    fn write_tree_edges_parquet(&self, base_path: &Path) -> Result<()> {
        let edges_path = format!("{}_tree_edges.parquet", base_path.display());

        let mut sources = Vec::with_capacity(self.edges().len());
        let mut targets = Vec::with_capacity(self.edges().len());
        for &(a, b) in self.edges() {
            sources.push(u32::try_from(a).context("Bag index exceeds u32")?);
            targets.push(u32::try_from(b).context("Bag index exceeds u32")?);
        }

        let schema = Arc::new(Schema::new(vec![
            Field::new("source", DataType::UInt32, false),
            Field::new("target", DataType::UInt32, false),
        ]));

        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(UInt32Array::from(sources)),
                Arc::new(UInt32Array::from(targets)),
            ],
        )
        .context("Failed to create tree edges RecordBatch")?;

        write_batch(&edges_path, schema, &batch)
    }

    fn read_bags_parquet(base_path: &Path) -> Result<Vec<BTreeSet<u32>>> {
        let bags_path = format!("{}_bags.parquet", base_path.display());

        let file = File::open(&bags_path).with_context(|| format!("Failed to open {bags_path}"))?;
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

        let mut bags: Vec<BTreeSet<u32>> = Vec::new();

        for batch_result in reader {
            let batch: RecordBatch = batch_result?;

            let bag_ids = batch
                .column(0)
                .as_any()
                .downcast_ref::<UInt32Array>()
                .context("Invalid bag column type")?;

            let vertices = batch
                .column(1)
                .as_any()
                .downcast_ref::<UInt32Array>()
                .context("Invalid vertex column type")?;

            for i in 0..batch.num_rows() {
                let bag = bag_ids.value(i) as usize;
                if bag > bags.len() {
                    bail!("Bag index {bag} skips bag {}", bags.len());
                }
                if bag == bags.len() {
                    bags.push(BTreeSet::new());
                }
                if vertices.is_valid(i) {
                    bags[bag].insert(vertices.value(i));
                }
            }
        }

        Ok(bags)
    }

    fn read_tree_edges_parquet(base_path: &Path) -> Result<Vec<(usize, usize)>> {
        let edges_path = format!("{}_tree_edges.parquet", base_path.display());

        let file =
            File::open(&edges_path).with_context(|| format!("Failed to open {edges_path}"))?;
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

        let mut edges = Vec::new();

        for batch_result in reader {
            let batch: RecordBatch = batch_result?;

            let sources = batch
                .column(0)
                .as_any()
                .downcast_ref::<UInt32Array>()
                .context("Invalid source column type")?;

            let targets = batch
                .column(1)
                .as_any()
                .downcast_ref::<UInt32Array>()
                .context("Invalid target column type")?;

            for i in 0..batch.num_rows() {
                edges.push((sources.value(i) as usize, targets.value(i) as usize));
            }
        }

        Ok(edges)
    }
}

fn write_batch(path: &str, schema: Arc<Schema>, batch: &RecordBatch) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {path}"))?;

    let props = WriterProperties::builder()
        .set_compression(parquet::basic::Compression::ZSTD(
            parquet::basic::ZstdLevel::try_new(3)?,
        ))
        .build();

    let mut writer = ArrowWriter::try_new(file, schema, Some(props))?;
    writer.write(batch)?;
    writer.close()?;

    Ok(())
}
