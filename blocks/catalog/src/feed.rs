use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{http::StatusCode, Body, Error, Response};
use std::collections::HashMap;

use atelier_atoms::designers::model::Designer;
use atelier_atoms::http::{error_response, json_response};
use atelier_atoms::products::model::Product;
use atelier_atoms::videos::model::Video;
use atelier_atoms::{designers, products, videos};

use crate::types::VideoFeedItem;

/// Populate approved videos with their tagged products and owning
/// designer, newest first. Unapproved entries never reach the feed.
pub fn join_feed(
    videos: Vec<Video>,
    product_index: &HashMap<String, Product>,
    designer_index: &HashMap<String, Designer>,
) -> Vec<VideoFeedItem> {
    let mut items: Vec<VideoFeedItem> = videos
        .into_iter()
        .filter(|v| v.is_approved)
        .map(|video| {
            let products = video
                .product_ids
                .iter()
                .filter_map(|id| product_index.get(id))
                .cloned()
                .collect();
            let designer = video
                .designer_id
                .as_ref()
                .and_then(|id| designer_index.get(id))
                .cloned();
            VideoFeedItem {
                video,
                designer,
                products,
            }
        })
        .collect();

    items.sort_by(|a, b| b.video.created_at.cmp(&a.video.created_at));
    items
}

/// GET /videos - approved videos with product and designer population
/// (Backend Join)
pub async fn video_feed(
    client: &DynamoClient,
    table_name: &str,
) -> Result<Response<Body>, Error> {
    // 1. Fetch videos, products and designers in parallel
    let (videos_result, products_result, designers_result) = tokio::join!(
        videos::service::load_videos(client, table_name),
        products::service::load_products(client, table_name),
        designers::service::load_designers(client, table_name)
    );

    let all_videos = match videos_result {
        Ok(v) => v,
        Err(e) => {
            tracing::error!("Failed to load videos: {}", e);
            return error_response("Failed to fetch videos", &e);
        }
    };
    let all_products = match products_result {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Failed to load products: {}", e);
            return error_response("Failed to fetch videos", &e);
        }
    };
    let all_designers = match designers_result {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("Failed to load designers: {}", e);
            return error_response("Failed to fetch videos", &e);
        }
    };

    // 2. Index relations by id
    let product_index: HashMap<String, Product> = all_products
        .into_iter()
        .map(|p| (p.product_id.clone(), p))
        .collect();
    let designer_index: HashMap<String, Designer> = all_designers
        .into_iter()
        .map(|d| (d.designer_id.clone(), d))
        .collect();

    // 3. Attach and return
    let items = join_feed(all_videos, &product_index, &designer_index);

    json_response(
        StatusCode::OK,
        serde_json::json!({"message": "Videos fetched successfully", "videos": items}),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_atoms::videos::model::VideoType;

    fn video(id: &str, created_at: &str, approved: bool, product_ids: Vec<&str>) -> Video {
        Video {
            video_id: id.to_string(),
            user_id: "u1".to_string(),
            designer_id: Some("d1".to_string()),
            product_ids: product_ids.into_iter().map(String::from).collect(),
            type_of_video: VideoType::ProductVideo,
            video_urls: vec!["https://cdn.example.com/v.mp4".to_string()],
            is_approved: approved,
            likes: 0,
            liked_by: vec![],
            comments: vec![],
            created_at: created_at.to_string(),
            updated_at: None,
        }
    }

    fn product(id: &str) -> Product {
        Product {
            product_id: id.to_string(),
            designer_id: "d1".to_string(),
            product_name: "Oak chair".to_string(),
            price_cents: 14900,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn feed_filters_unapproved_and_sorts_newest_first() {
        let videos = vec![
            video("old", "2024-01-01T00:00:00+00:00", true, vec![]),
            video("pending", "2024-06-01T00:00:00+00:00", false, vec![]),
            video("new", "2024-03-01T00:00:00+00:00", true, vec![]),
        ];

        let items = join_feed(videos, &HashMap::new(), &HashMap::new());
        let order: Vec<&str> = items.iter().map(|i| i.video.video_id.as_str()).collect();

        assert_eq!(order, vec!["new", "old"]);
    }

    #[test]
    fn feed_resolves_tagged_products() {
        let product_index = HashMap::from([("p1".to_string(), product("p1"))]);
        let videos = vec![video(
            "v1",
            "2024-01-01T00:00:00+00:00",
            true,
            vec!["p1", "missing"],
        )];

        let items = join_feed(videos, &product_index, &HashMap::new());

        assert_eq!(items[0].products.len(), 1);
        assert_eq!(items[0].products[0].product_id, "p1");
    }
}
