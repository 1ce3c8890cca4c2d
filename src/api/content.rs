use axum::extract::{FromRef, Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Serialize;

use crate::api::extract::JsonBody;
use crate::api::response::ApiResponse;
use crate::app::AppState;
use crate::auth::middleware::AdminSession;
use crate::content::pagination::{ListParams, PageQuery};
use crate::content::service::ContentService;
use crate::error::AppError;
use crate::models::{ContentKind, ContentView, SubCollection};

type JsonResult<D> = Result<Json<ApiResponse<D>>, AppError>;

/// A sub-list item together with the document version it now belongs to.
#[derive(Debug, Serialize)]
pub struct ItemChange<T: ContentKind, I: Serialize> {
    pub item: I,
    pub document: ContentView<T>,
}

/// The uniform route surface of one content type, to be nested under its root.
///
/// `GET /active` is public; everything else requires an admin session.
pub fn content_routes<T: ContentKind>() -> Router<AppState>
where
    ContentService<T>: FromRef<AppState>,
{
    Router::new()
        .route("/", get(list_handler::<T>).post(create_handler::<T>))
        .route("/active", get(active_handler::<T>))
        .route(
            "/{id}",
            get(get_handler::<T>)
                .put(update_handler::<T>)
                .delete(delete_handler::<T>),
        )
        .route("/{id}/activate", post(activate_handler::<T>))
}

/// Item-level routes for one sub-list of a content type.
pub fn sub_routes<T, S>() -> Router<AppState>
where
    T: ContentKind,
    S: SubCollection<T>,
    ContentService<T>: FromRef<AppState>,
{
    Router::new()
        .route(&format!("/{{id}}/{}", S::PATH), post(add_item_handler::<T, S>))
        .route(
            &format!("/{{id}}/{}/{{item_id}}", S::PATH),
            put(update_item_handler::<T, S>).delete(remove_item_handler::<T, S>),
        )
}

/// Axum handler for `GET /api/<type>`.
pub async fn list_handler<T: ContentKind>(
    State(service): State<ContentService<T>>,
    _admin: AdminSession,
    Query(params): Query<ListParams>,
) -> JsonResult<Vec<ContentView<T>>> {
    let query = PageQuery::try_from(params)?;
    let page = service.list_versions(query).await?;
    let items = page.items.into_iter().map(ContentView::from).collect();
    Ok(Json(ApiResponse::paginated(items, page.info)))
}

/// Axum handler for `GET /api/<type>/active` (public).
pub async fn active_handler<T: ContentKind>(
    State(service): State<ContentService<T>>,
) -> JsonResult<ContentView<T>> {
    let doc = service.get_active().await?;
    Ok(Json(ApiResponse::ok(doc.into())))
}

/// Axum handler for `GET /api/<type>/{id}`.
pub async fn get_handler<T: ContentKind>(
    State(service): State<ContentService<T>>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> JsonResult<ContentView<T>> {
    let doc = service.get_by_id(&id).await?;
    Ok(Json(ApiResponse::ok(doc.into())))
}

/// Axum handler for `POST /api/<type>`.
pub async fn create_handler<T: ContentKind>(
    State(service): State<ContentService<T>>,
    admin: AdminSession,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<ApiResponse<ContentView<T>>>), AppError> {
    let doc = service.create(body, admin.username()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(doc.into()).with_message(format!("{} created successfully", T::LABEL))),
    ))
}

/// Axum handler for `PUT /api/<type>/{id}`.
pub async fn update_handler<T: ContentKind>(
    State(service): State<ContentService<T>>,
    admin: AdminSession,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> JsonResult<ContentView<T>> {
    let doc = service.update(&id, body, admin.username()).await?;
    Ok(Json(
        ApiResponse::ok(doc.into()).with_message(format!("{} updated successfully", T::LABEL)),
    ))
}

/// Axum handler for `POST /api/<type>/{id}/activate`.
pub async fn activate_handler<T: ContentKind>(
    State(service): State<ContentService<T>>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> JsonResult<ContentView<T>> {
    let doc = service.activate_version(&id).await?;
    Ok(Json(
        ApiResponse::ok(doc.into()).with_message(format!("{} activated successfully", T::LABEL)),
    ))
}

/// Axum handler for `DELETE /api/<type>/{id}`. The active version cannot be deleted.
pub async fn delete_handler<T: ContentKind>(
    State(service): State<ContentService<T>>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> JsonResult<()> {
    service.delete(&id).await?;
    Ok(Json(ApiResponse::message(format!("{} deleted successfully", T::LABEL))))
}

/// Axum handler for `POST /api/<type>/{id}/<sub>`.
pub async fn add_item_handler<T: ContentKind, S: SubCollection<T>>(
    State(service): State<ContentService<T>>,
    admin: AdminSession,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<ApiResponse<ItemChange<T, S::Item>>>), AppError> {
    let (doc, item) = service.add_item::<S>(&id, body, admin.username()).await?;
    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::ok(ItemChange {
                item,
                document: doc.into(),
            })
            .with_message(format!("{} added successfully", S::LABEL)),
        ),
    ))
}

/// Axum handler for `PUT /api/<type>/{id}/<sub>/{item_id}`.
pub async fn update_item_handler<T: ContentKind, S: SubCollection<T>>(
    State(service): State<ContentService<T>>,
    admin: AdminSession,
    Path((id, item_id)): Path<(String, String)>,
    JsonBody(body): JsonBody,
) -> JsonResult<ItemChange<T, S::Item>> {
    let (doc, item) = service
        .update_item::<S>(&id, &item_id, body, admin.username())
        .await?;
    Ok(Json(
        ApiResponse::ok(ItemChange {
            item,
            document: doc.into(),
        })
        .with_message(format!("{} updated successfully", S::LABEL)),
    ))
}

/// Axum handler for `DELETE /api/<type>/{id}/<sub>/{item_id}`.
pub async fn remove_item_handler<T: ContentKind, S: SubCollection<T>>(
    State(service): State<ContentService<T>>,
    admin: AdminSession,
    Path((id, item_id)): Path<(String, String)>,
) -> JsonResult<ContentView<T>> {
    let doc = service.remove_item::<S>(&id, &item_id, admin.username()).await?;
    Ok(Json(
        ApiResponse::ok(doc.into()).with_message(format!("{} removed successfully", S::LABEL)),
    ))
}
