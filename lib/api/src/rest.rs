use crate::view::{ItemCard, ItemDetail};
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use wisata_core::{Error, Recommender};

/// Cards shown on the popular listing
pub const POPULAR_LIMIT: usize = 8;

/// Shared, read-only state handed to every worker
#[derive(Debug, Clone)]
pub struct ApiState {
    pub recommender: Arc<Recommender>,
    /// Curated names for `/popular`
    pub popular: Vec<String>,
}

impl ApiState {
    pub fn new(recommender: Arc<Recommender>, popular: Vec<String>) -> Self {
        Self { recommender, popular }
    }
}

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
    limit: Option<usize>,
}

#[derive(Serialize)]
struct SearchResponse {
    query: String,
    matched: bool,
    results: Vec<ItemCard>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(state: ApiState, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .configure(|cfg| Self::configure(cfg, state.clone()))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    /// Register routes and state on an app
    pub fn configure(cfg: &mut web::ServiceConfig, state: ApiState) {
        cfg.app_data(web::Data::new(state))
            .route("/items", web::get().to(list_items))
            .route("/items/{name}", web::get().to(get_item))
            .route("/popular", web::get().to(popular_items))
            .route("/search", web::get().to(search_items));
    }
}

async fn list_items(state: web::Data<ApiState>) -> ActixResult<HttpResponse> {
    let cards: Vec<ItemCard> = state
        .recommender
        .corpus()
        .items()
        .iter()
        .map(ItemCard::from_item)
        .collect();
    Ok(HttpResponse::Ok().json(cards))
}

async fn popular_items(state: web::Data<ApiState>) -> ActixResult<HttpResponse> {
    let cards: Vec<ItemCard> = state
        .recommender
        .corpus()
        .popular(&state.popular, POPULAR_LIMIT)
        .into_iter()
        .map(ItemCard::from_item)
        .collect();
    Ok(HttpResponse::Ok().json(cards))
}

async fn get_item(
    state: web::Data<ApiState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let name = path.into_inner();
    let recommender = &state.recommender;

    let item = match recommender.corpus().find(&name) {
        Some(item) => item,
        None => {
            return Ok(HttpResponse::NotFound().json(serde_json::json!({
                "error": Error::ItemNotFound(name).to_string()
            })));
        }
    };

    match recommender.recommend_by_item(&name, recommender.top_k()) {
        Ok(recs) => {
            let cards = recs.iter().map(ItemCard::from).collect();
            Ok(HttpResponse::Ok().json(ItemDetail::new(item, cards)))
        }
        Err(e) => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

async fn search_items(
    state: web::Data<ApiState>,
    params: web::Query<SearchParams>,
) -> ActixResult<HttpResponse> {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Query parameter 'q' must not be empty"
        })));
    }

    let limit = params.limit.unwrap_or_else(|| state.recommender.top_k());
    let results: Vec<ItemCard> = state
        .recommender
        .recommend_by_query(query, limit)
        .iter()
        .map(ItemCard::from)
        .collect();

    debug!(query, matched = results.len(), "search");
    Ok(HttpResponse::Ok().json(SearchResponse {
        query: query.to_string(),
        matched: !results.is_empty(),
        results,
    }))
}
