use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;

use crate::store::SharedStore;

mod dataloader;
mod loaders;
mod schema;

use dataloader::DataLoader;
use loaders::LoadBookCounts;
pub use schema::{LibrarySchema, build_schema};

#[derive(Clone)]
pub struct AppState {
    schema: LibrarySchema,
    store: SharedStore,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self {
            schema: build_schema(store.clone()),
            store,
        }
    }

    /// Runs one GraphQL request with a fresh book count loader.
    pub async fn execute(&self, req: async_graphql::Request) -> async_graphql::Response {
        let load_book_counts = DataLoader::new(LoadBookCounts::new(self.store.clone()));
        let req = req.data(load_book_counts.clone());

        load_book_counts.wrap(self.schema.execute(req)).await
    }
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().finish())
}

#[axum::debug_handler]
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.execute(req.into_inner()).await.into()
}

pub fn make_app(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(graphiql).post(graphql_handler))
        .with_state(AppState::new(store))
}
