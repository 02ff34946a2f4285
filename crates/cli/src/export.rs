//! Per-shell table export (CSV or Parquet, chosen by file extension).

use std::fs::{self, File};
use std::path::Path;

use anyhow::{bail, Context, Result};
use nmo::prelude::*;
use nmo::report::divergence_deg;
use polars::prelude::*;

/// One row per shell, outermost first.
pub fn shells_frame(shells: &[MirrorShell], focal: FocalPair) -> PolarsResult<DataFrame> {
    let col = |f: fn(&MirrorShell) -> f64| shells.iter().map(f).collect::<Vec<f64>>();
    let mirror: Vec<u32> = shells.iter().map(|s| s.index as u32).collect();
    let divergence: Vec<f64> = shells.iter().map(|s| divergence_deg(s.b, focal)).collect();
    df!(
        "mirror" => mirror,
        "b" => col(|s| s.b),
        "anchor_z" => col(|s| s.anchor.x),
        "anchor_r" => col(|s| s.anchor.y),
        "r_trailing" => col(|s| s.r_trailing),
        "k1" => col(|s| s.profile.k1),
        "k2" => col(|s| s.profile.k2),
        "k3" => col(|s| s.profile.k3),
        "a" => col(|s| s.profile.a),
        "divergence_deg" => divergence
    )
}

pub fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("csv") => {
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(df)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Some("parquet") => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            ParquetWriter::new(file)
                .finish(df)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        _ => bail!(
            "unsupported output format for {} (use .csv or .parquet)",
            path.display()
        ),
    }
    tracing::info!(path = %path.display(), rows = df.height(), "wrote shell table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn shells(number: usize) -> (Vec<MirrorShell>, FocalPair) {
        let inputs = nmo::api::chain_inputs(number, 0.0, 0.02, -0.05, -0.6, 0.6, -0.05, 0.05);
        (solve_shells(&inputs, ChainCfg::default()).unwrap(), inputs.focal)
    }

    #[test]
    fn frame_has_one_row_per_shell() {
        let (shells, focal) = shells(5);
        let df = shells_frame(&shells, focal).unwrap();
        assert_eq!(df.shape(), (5, 10));
    }

    #[test]
    fn csv_round_trip_keeps_b() {
        let (shells, focal) = shells(4);
        let mut df = shells_frame(&shells, focal).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/shells.csv");
        write_frame(&mut df, &path).unwrap();

        let back = LazyCsvReader::new(&path)
            .with_infer_schema_length(Some(100))
            .finish()
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(back.height(), 4);
        let b = back.column("b").unwrap().f64().unwrap();
        assert!((b.get(0).unwrap() - shells[0].b).abs() < 1e-12);
    }

    #[test]
    fn parquet_written() {
        let (shells, focal) = shells(3);
        let mut df = shells_frame(&shells, focal).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("shells.parquet");
        write_frame(&mut df, &path).unwrap();
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn unknown_extension_rejected() {
        let (shells, focal) = shells(2);
        let mut df = shells_frame(&shells, focal).unwrap();
        let dir = tempdir().unwrap();
        assert!(write_frame(&mut df, &dir.path().join("shells.txt")).is_err());
    }
}
