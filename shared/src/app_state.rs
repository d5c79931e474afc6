use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_s3::Client as S3Client;

/// Store and gateway handles, built once at startup and passed into the
/// handler. Nothing here is ambient global state.
pub struct AppState {
    pub dynamo_client: DynamoClient,
    pub s3_client: S3Client,
}

impl AppState {
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;

        Self {
            dynamo_client: DynamoClient::new(&config),
            s3_client: S3Client::new(&config),
        }
    }
}
