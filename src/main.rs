use anyhow::Context;
use tracing::{info, warn};

use voc_seg_rs::logger;
use voc_seg_rs::segmentation::{DataSplit, DatasetConfig, PascalVocDataset};

fn main() -> anyhow::Result<()> {
    logger::init();

    let mut args = std::env::args().skip(1);
    let root = args
        .next()
        .context("usage: voc_seg_rs <VOC2012 dir> [train|val|trainval] [index]")?;
    let split: DataSplit = args.next().as_deref().unwrap_or("train").parse()?;
    let index: usize = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid example index '{s}'"))?,
        None => 0,
    };

    let config = DatasetConfig::pascal_voc_2012();
    let dataset = PascalVocDataset::new(&root, split, config)
        .with_context(|| format!("failed to open dataset at {root}"))?;

    info!("Dataset opened: {} examples in '{}'", dataset.len(), split);
    if dataset.is_empty() {
        warn!("Split '{}' lists no examples", split);
        return Ok(());
    }

    let (datum, label) = dataset
        .get_example(index)
        .with_context(|| format!("failed to load example {index}"))?;

    let (c, h, w) = datum.shape();
    info!("Datum shape: {}x{}x{}", c, h, w);

    let histogram = label.class_histogram(dataset.label_names().len());
    for (name, count) in dataset.label_names().iter().zip(histogram) {
        if count > 0 {
            info!("{:<14} {:>8} px", name, count);
        }
    }
    info!("{:<14} {:>8} px", "unlabeled", label.unlabeled_count());

    Ok(())
}
