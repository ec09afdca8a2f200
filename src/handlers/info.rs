// GET /v1/models/info and GET /health handlers

use std::convert::Infallible;

use crate::models::{ModelInfo, ModelListResponse, DEFAULT_MODEL_ID};

pub async fn model_info_handler() -> Result<impl warp::Reply, Infallible> {
    let response = ModelListResponse {
        data: vec![ModelInfo::new(DEFAULT_MODEL_ID)],
    };

    Ok(warp::reply::json(&response))
}

pub async fn health_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(
        &serde_json::json!({"status": "healthy"}),
    ))
}
