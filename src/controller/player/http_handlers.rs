use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use super::data_service::{get_player_stats, stats_source_for};
use crate::args::Args;

pub const MIN_NAME_LEN: usize = 2;

#[derive(Deserialize)]
pub struct PlayerStatsRequest {
    #[serde(rename = "playerName")]
    pub player_name: String,
}

pub async fn player_stats(
    payload: web::Json<PlayerStatsRequest>,
    args: Data<Args>,
) -> impl Responder {
    let player_name = payload.player_name.trim();
    if player_name.chars().count() < MIN_NAME_LEN {
        return HttpResponse::BadRequest()
            .json(json!({"error": "Player name must be at least 2 characters."}));
    }

    let source = stats_source_for(args.stats_source);
    let result = get_player_stats(&args.player_data, source.as_ref(), player_name).await;
    HttpResponse::Ok().json(json!({"data": result}))
}
