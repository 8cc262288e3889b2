// Turns request-body rejections on the execute route into error envelopes

use crate::tools::ToolResponse;
use tracing::debug;
use warp::http::StatusCode;
use warp::Rejection;

pub async fn body_rejection_handler(rejection: Rejection) -> Result<impl warp::Reply, Rejection> {
    let (status, message) = if let Some(e) = rejection.find::<warp::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, format!("invalid request body: {}", e))
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            "invalid request body: payload too large".to_string(),
        )
    } else if rejection.find::<warp::reject::LengthRequired>().is_some() {
        (
            StatusCode::LENGTH_REQUIRED,
            "invalid request body: content length required".to_string(),
        )
    } else if rejection.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "invalid request body: expected application/json".to_string(),
        )
    } else {
        return Err(rejection);
    };

    debug!(%status, "{}", message);
    Ok(warp::reply::with_status(
        warp::reply::json(&ToolResponse::error(message)),
        status,
    ))
}
