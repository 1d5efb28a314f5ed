// src/router.rs

use axum::{
    routing::get,
    Router,
};

use crate::{config::AppState, handlers};

pub fn app_router(app_state: AppState) -> Router {
    let store_routes = Router::new()
        .route("/"
               ,get(handlers::stores::list_stores)
               .post(handlers::stores::create_store)
        )
        .route("/{store_id}"
               ,get(handlers::stores::get_store)
               .patch(handlers::stores::update_store)
               .delete(handlers::stores::delete_store)
        )
        .route("/{store_id}/billboards"
               ,get(handlers::billboards::list_billboards)
               .post(handlers::billboards::create_billboard)
        )
        .route("/{store_id}/billboards/{billboard_id}"
               ,get(handlers::billboards::get_billboard)
               .patch(handlers::billboards::update_billboard)
               .delete(handlers::billboards::delete_billboard)
        )
        .route("/{store_id}/dashboard/summary"
               ,get(handlers::dashboard::get_summary)
        )
        .route("/{store_id}/dashboard/sales-count"
               ,get(handlers::dashboard::get_sales_count)
        )
        .route("/{store_id}/dashboard/revenue-graph"
               ,get(handlers::dashboard::get_revenue_graph)
        );

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/stores", store_routes)
        .with_state(app_state)
}
