// Definition of a bucket and its reported size
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Represents an S3 bucket.
///
/// This will always have a `name` and optionally the region S3 reported the
/// bucket as living in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bucket {
    /// Name of the bucket.
    pub name: String,

    /// Region reported by `ListBuckets`, if any.
    pub region: Option<String>,
}

impl Bucket {
    /// Return a new `Bucket` with the given `name` and no region.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:   name.into(),
            region: None,
        }
    }
}

/// Convenience type for a list of `Bucket`.
pub type Buckets = Vec<Bucket>;

/// The most recent average size of a bucket, as reported by CloudWatch.
#[derive(Clone, Debug, PartialEq)]
pub struct BucketSize {
    /// Name of the bucket.
    pub name: String,

    /// Average `BucketSizeBytes` of the latest datapoint.
    pub average_bytes: f64,
}

/// Convenience type for a list of `BucketSize`.
pub type BucketSizes = Vec<BucketSize>;

/// Sort `sizes` largest first.
///
/// Buckets of equal size are ordered by name so the output is stable.
pub fn sort_by_size(sizes: &mut BucketSizes) {
    sizes.sort_by(|a, b| {
        b.average_bytes
            .total_cmp(&a.average_bytes)
            .then_with(|| a.name.cmp(&b.name))
    });
}
