use actix_web::{web, HttpResponse};

use crate::quotes::QuoteRetriever;

/// GET /api/quotes
/// Returns one quote. Never errors: upstream failures degrade through the
/// cache and static fallback tiers, with the tier reported in
/// `X-Quote-Source` and the cache population in `X-Cache-Size`.
pub async fn get_quote(retriever: web::Data<QuoteRetriever>) -> HttpResponse {
    let (quote, source) = retriever.get_one().await;
    let cache_size = retriever.cache_size();

    let mut response = HttpResponse::Ok();
    response.insert_header(("X-Quote-Source", source.as_str()));
    if cache_size > 0 {
        response.insert_header(("X-Cache-Size", cache_size.to_string()));
    }

    response.json(quote)
}

/// Configure quote routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/quotes").route("", web::get().to(get_quote)));
}
