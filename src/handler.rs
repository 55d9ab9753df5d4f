use lambda_runtime::{Error, LambdaEvent, tracing};

use crate::{
    model::{CheckFileRequest, CheckFileResponse, FileExistsBody},
    service,
};

/// Handles an existence check request.
///
/// Every outcome is reported as a structured response, so this function never
/// returns `Err` and no invocation fails at the platform boundary.
#[tracing::instrument(skip(s3_client, event))]
pub async fn handler(
    s3_client: &service::s3::S3,
    event: LambdaEvent<CheckFileRequest>,
) -> Result<CheckFileResponse, Error> {
    let request = event.payload;
    tracing::trace!(request=?request, "processing request");

    let validated = match request.validated() {
        Ok(validated) => validated,
        Err(missing) => {
            tracing::error!(field = missing.0, "missing required field");
            return Ok(CheckFileResponse::bad_request(&missing.to_string()));
        }
    };

    let file_exists = s3_client.exists(validated.bucket, validated.file_key).await;

    tracing::info!(
        bucket = validated.bucket,
        file_key = validated.file_key,
        file_exists,
        "existence check complete"
    );

    let body = FileExistsBody {
        file_exists,
        bucket: validated.bucket.to_string(),
        file_key: validated.file_key.to_string(),
    };

    let response = match serde_json::to_string(&body) {
        Ok(encoded) => CheckFileResponse::ok(encoded),
        Err(e) => {
            tracing::error!(error=?e, "unable to encode response body");
            CheckFileResponse::internal_error(&format!("Unexpected error: {e}"))
        }
    };

    tracing::trace!(response=?response, "returning response");

    Ok(response)
}

#[cfg(test)]
mod tests {
    use lambda_runtime::{Context, LambdaEvent};

    use super::*;
    use crate::service::s3::S3;

    fn event(bucket: Option<&str>, file_key: Option<&str>) -> LambdaEvent<CheckFileRequest> {
        LambdaEvent {
            payload: CheckFileRequest {
                bucket: bucket.map(str::to_string),
                file_key: file_key.map(str::to_string),
            },
            context: Context::default(),
        }
    }

    #[tokio::test]
    async fn reports_existing_file() {
        let mut s3 = S3::default();
        s3.expect_exists()
            .withf(|bucket, key| bucket == "test-bucket" && key == "test-file.txt")
            .returning(|_, _| true);

        let response = handler(&s3, event(Some("test-bucket"), Some("test-file.txt")))
            .await
            .unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers.content_type, "application/json");
        let body: FileExistsBody = serde_json::from_str(&response.body).unwrap();
        assert!(body.file_exists);
        assert_eq!(body.bucket, "test-bucket");
        assert_eq!(body.file_key, "test-file.txt");
    }

    #[tokio::test]
    async fn reports_absent_file() {
        let mut s3 = S3::default();
        s3.expect_exists()
            .withf(|bucket, key| bucket == "test-bucket" && key == "nonexistent.txt")
            .returning(|_, _| false);

        let response = handler(&s3, event(Some("test-bucket"), Some("nonexistent.txt")))
            .await
            .unwrap();

        assert_eq!(response.status_code, 200);
        let body: FileExistsBody = serde_json::from_str(&response.body).unwrap();
        assert!(!body.file_exists);
        assert_eq!(body.bucket, "test-bucket");
        assert_eq!(body.file_key, "nonexistent.txt");
    }

    #[tokio::test]
    async fn rejects_missing_bucket() {
        let mut s3 = S3::default();
        s3.expect_exists().never();

        let response = handler(&s3, event(None, Some("test.txt"))).await.unwrap();

        assert_eq!(response.status_code, 400);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], "Missing required field: 'bucket'");
    }

    #[tokio::test]
    async fn rejects_missing_file_key() {
        let mut s3 = S3::default();
        s3.expect_exists().never();

        let response = handler(&s3, event(Some("test-bucket"), None)).await.unwrap();

        assert_eq!(response.status_code, 400);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], "Missing required field: 'file_key'");
    }

    #[tokio::test]
    async fn rejects_empty_event() {
        let mut s3 = S3::default();
        s3.expect_exists().never();

        let response = handler(&s3, event(None, None)).await.unwrap();

        assert_eq!(response.status_code, 400);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], "Missing required field: 'bucket'");
    }

    #[tokio::test]
    async fn repeated_requests_get_identical_responses() {
        let mut s3 = S3::default();
        s3.expect_exists().times(2).returning(|_, _| true);

        let first = handler(&s3, event(Some("test-bucket"), Some("test-file.txt")))
            .await
            .unwrap();
        let second = handler(&s3, event(Some("test-bucket"), Some("test-file.txt")))
            .await
            .unwrap();

        assert_eq!(first.status_code, second.status_code);
        assert_eq!(first.body, second.body);
    }
}
