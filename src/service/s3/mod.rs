mod exists;

use aws_sdk_s3 as s3;
use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockS3Client as S3;
#[cfg(not(test))]
pub use S3Client as S3;

#[derive(Clone, Debug)]
pub struct S3Client {
    /// Inner S3 client
    inner: s3::Client,
}

#[cfg_attr(test, automock)]
impl S3Client {
    pub fn new(inner: s3::Client) -> Self {
        Self { inner }
    }

    /// Checks if a given key exists in the bucket.
    ///
    /// The caller contract is a plain boolean: lookups that fail for any
    /// reason other than a definitive not-found are also reported as absent.
    #[tracing::instrument(skip(self))]
    pub async fn exists(&self, bucket: &str, key: &str) -> bool {
        match exists::exists(&self.inner, bucket, key).await {
            Ok(exists) => exists,
            Err(e) => {
                tracing::warn!(error=?e, "existence check failed, reporting object as absent");
                false
            }
        }
    }
}
