use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};

use cric_stats::args;
use cric_stats::controller::{live, news, player, schedule, videos};
use cric_stats::view::index::{DEFAULT_INDEX_TITLE, render_index_template};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let args = args::args_checks();
    let bind = args.bind.clone();
    let args_for_web = args.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(args_for_web.clone()))
            .route("/", web::get().to(index))
            .route("/player", web::post().to(player::player_stats))
            .route("/schedule", web::post().to(schedule::schedule))
            .route("/news", web::get().to(news::news))
            .route("/scores", web::get().to(live::scores))
            .route("/videos", web::get().to(videos::videos))
            .route("/health", web::get().to(HttpResponse::Ok))
    })
    .bind(bind.as_str())?
    .run()
    .await?;
    Ok(())
}

async fn index() -> impl Responder {
    let markup = render_index_template(DEFAULT_INDEX_TITLE);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
