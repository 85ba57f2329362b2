//! GraphQL HTTP and WebSocket routes for /graphql and /graphql/ws.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLProtocol, GraphQLRequest, GraphQLResponse, GraphQLWebSocket};
use axum::Router;
use axum::extract::{State, WebSocketUpgrade};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::app::AppState;

pub struct GraphqlService;

impl GraphqlService {
    /// Return a router with /graphql and /graphql/ws. Merge this into the app and call
    /// `.with_state(state)` on the combined router so handlers receive [AppState].
    pub fn router() -> Router<AppState> {
        Router::new()
            .route("/graphql", get(graphiql).post(graphql_handler))
            .route("/graphql/ws", get(graphql_ws_handler))
    }
}

/// GraphiQL interactive playground (only for browsers)
async fn graphiql(headers: HeaderMap) -> impl IntoResponse {
    let accepts_html = headers
        .get(axum::http::header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/html"))
        .unwrap_or(false);

    if accepts_html {
        axum::response::Html(
            GraphiQLSource::build()
                .endpoint("/graphql")
                .subscription_endpoint("/graphql/ws")
                .finish(),
        )
        .into_response()
    } else {
        (
            axum::http::StatusCode::METHOD_NOT_ALLOWED,
            axum::Json(serde_json::json!({
                "error": "GET requests are not supported for GraphQL queries. Use POST with Content-Type: application/json"
            })),
        )
            .into_response()
    }
}

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    let request = req.into_inner();
    tracing::debug!(operation = ?request.operation_name, "GraphQL request");
    state.schema.execute(request).await.into()
}

async fn graphql_ws_handler(
    State(state): State<AppState>,
    protocol: GraphQLProtocol,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.protocols(["graphql-transport-ws", "graphql-ws"])
        .on_upgrade(move |socket| {
            tracing::debug!("Subscription connection opened");
            GraphQLWebSocket::new(socket, state.schema.clone(), protocol).serve()
        })
}
