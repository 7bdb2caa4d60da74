// Gathers bucket sizes and renders the report table
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use crate::common::{
    sort_by_size,
    BucketLister,
    BucketSize,
    BucketSizer,
    BucketSizes,
    ClientConfig,
    HumanSize,
    SizeError,
    SizeUnit,
};
use futures::stream::{
    self,
    StreamExt,
    TryStreamExt,
};
use std::io::Write;
use tracing::{
    debug,
    info,
    warn,
};

const NAME_WIDTH: usize = 60;
const SIZE_WIDTH: usize = 25;
const RULE_WIDTH: usize = 90;

/// Fetch the size of every bucket `lister` finds, using `sizer`.
///
/// Up to `concurrency` sizes are fetched at once. The returned sizes are
/// sorted largest first.
///
/// Buckets without recent datapoints are omitted, as are buckets whose
/// request failed for any reason other than authentication. An authentication
/// failure aborts the whole run.
pub async fn bucket_sizes<L, S>(
    lister:      &L,
    sizer:       &S,
    concurrency: usize,
) -> Result<BucketSizes>
where
    L: BucketLister + Sync,
    S: BucketSizer + Sync,
{
    let buckets = lister.buckets()
        .await
        .context("Failed to list buckets")?;

    info!("Fetching sizes for {} buckets", buckets.len());

    // The first fatal error ends the stream, so no further requests are
    // started once our credentials have been rejected.
    let mut sizes: BucketSizes = stream::iter(buckets)
        .map(|bucket| async move {
            match sizer.bucket_size(&bucket).await {
                Ok(average_bytes) => Ok(Some(BucketSize {
                    name: bucket.name,
                    average_bytes,
                })),
                Err(err) if err.is_fatal() => {
                    Err(err)
                        .with_context(|| format!("Failed to size '{}'", bucket.name))
                },
                Err(SizeError::NoData(_)) => {
                    debug!(
                        "No datapoints for '{}' (bucket region: {:?})",
                        bucket.name,
                        bucket.region,
                    );

                    Ok(None)
                },
                Err(err) => {
                    warn!("Skipping '{}': {}", bucket.name, err);

                    Ok(None)
                },
            }
        })
        .buffer_unordered(concurrency.max(1))
        .try_collect::<Vec<Option<BucketSize>>>()
        .await?
        .into_iter()
        .flatten()
        .collect();

    sort_by_size(&mut sizes);

    Ok(sizes)
}

/// Write the report table for `sizes` to `out`.
pub fn render<W: Write>(
    out:     &mut W,
    profile: &str,
    region:  &str,
    unit:    &SizeUnit,
    sizes:   &[BucketSize],
) -> std::io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "Profile/Account: {}\t\tRegion: {}", profile, region)?;
    writeln!(
        out,
        "{:<name$}{:>size$}",
        "Bucket",
        "Size in Bytes",
        name = NAME_WIDTH,
        size = SIZE_WIDTH,
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for size in sizes {
        writeln!(
            out,
            "{:<name$}{:>size$}",
            size.name,
            size.average_bytes.humansize(unit),
            name = NAME_WIDTH,
            size = SIZE_WIDTH,
        )?;
    }

    Ok(())
}

/// Produce the full report for `config` and write it to `out`.
///
/// Nothing is written unless every bucket was processed without a fatal
/// error.
pub async fn run<L, S, W>(
    config: &ClientConfig,
    lister: &L,
    sizer:  &S,
    mut out: W,
) -> Result<()>
where
    L: BucketLister + Sync,
    S: BucketSizer + Sync,
    W: Write,
{
    let sizes = bucket_sizes(lister, sizer, config.concurrency)
        .await
        .with_context(|| {
            format!(
                "Failed to report bucket sizes for profile '{}' in '{}'",
                config.profile_name(),
                config.region.name(),
            )
        })?;

    render(
        &mut out,
        config.profile_name(),
        config.region.name(),
        &config.unit,
        &sizes,
    )
    .context("Failed to write report")?;

    out.flush().context("Failed to flush report")?;

    Ok(())
}
