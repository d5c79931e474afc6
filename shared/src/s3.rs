use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;

use atelier_atoms::ApiError;

/// File extension for the MIME types the upload surface accepts
fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "bin",
    }
}

/// Media Upload Gateway: push a byte buffer to object storage and
/// return its durable URL. Keys are namespaced under the given folder,
/// e.g. designers/logos/{uuid}.png
pub async fn upload(
    client: &S3Client,
    bucket_name: &str,
    bytes: Vec<u8>,
    content_type: &str,
    folder: &str,
) -> Result<String, ApiError> {
    let key = format!(
        "{}/{}.{}",
        folder,
        uuid::Uuid::new_v4(),
        extension_for(content_type)
    );

    client
        .put_object()
        .bucket(bucket_name)
        .key(&key)
        .content_type(content_type)
        .body(ByteStream::from(bytes))
        .send()
        .await
        .map_err(|e| {
            tracing::error!("S3 put_object failed for key {}: {}", key, e);
            ApiError::Upload(format!("S3 put_object error: {}", e))
        })?;

    Ok(format!("https://{}.s3.amazonaws.com/{}", bucket_name, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_follow_mime_types() {
        assert_eq!(extension_for("image/png"), "png");
        assert_eq!(extension_for("image/jpeg"), "jpg");
        assert_eq!(extension_for("image/jpg"), "jpg");
        assert_eq!(extension_for("application/octet-stream"), "bin");
    }
}
