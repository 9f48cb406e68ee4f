// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::CreateArticleCommand,
    dto::ArticleDto,
    queries::articles::{GetArticleByIdQuery, SearchArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

const CURRENCY_CODE_LENGTH: usize = 3;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Case-insensitive fragment of the name or description.
    #[serde(default)]
    pub search_or_description_name: Option<String>,
    /// Exact category, compared case-insensitively.
    #[serde(default)]
    pub search_category: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    #[schema(example = 17.89)]
    pub price: Decimal,
    #[serde(default)]
    #[schema(example = "NOK")]
    pub currency: Option<String>,
}

impl CreateArticleRequest {
    /// Shape checks only; business rules live in the command service.
    fn into_command(self) -> HttpResult<CreateArticleCommand> {
        if self.name.trim().is_empty() {
            return Err(HttpError::bad_request("Article name is required."));
        }
        if self.description.trim().is_empty() {
            return Err(HttpError::bad_request("Article description is required."));
        }
        if self
            .currency
            .as_deref()
            .is_some_and(|c| c.chars().count() != CURRENCY_CODE_LENGTH)
        {
            return Err(HttpError::bad_request(
                "Article currency must be exactly 3 characters long.",
            ));
        }

        Ok(CreateArticleCommand {
            name: self.name,
            description: self.description,
            category: self.category,
            price: self.price,
            currency: self.currency,
        })
    }
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, [(header::HeaderName, String); 1], Json<ArticleDto>)> {
    let Json(request) = payload.map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;
    let command = request.into_command()?;

    let created = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http(StatusCode::BAD_REQUEST)?;

    let location = format!("/api/articles/{}", created.article_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    id: Result<Path<i64>, PathRejection>,
) -> HttpResult<Json<ArticleDto>> {
    let Path(id) = id.map_err(|rejection| HttpError::not_found(rejection.body_text()))?;

    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http(StatusCode::NOT_FOUND)
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Matching articles.", body = [ArticleDto]),
        (status = 404, description = "Articles could not be read.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let query = SearchArticlesQuery {
        name_or_description: params.search_or_description_name,
        category: params.search_category,
    };
    let queries = &state.services.article_queries;

    let result = if query.has_filters() {
        tracing::info!(
            name_or_description = ?query.name_or_description,
            category = ?query.category,
            "getting articles with filters"
        );
        queries.search_articles(query).await
    } else {
        tracing::info!("getting all articles without filters");
        queries.list_articles().await
    };

    result.into_http(StatusCode::NOT_FOUND).map(Json)
}
