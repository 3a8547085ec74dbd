//! 控制器
//!
//! HTTP 动词到服务调用的映射，以及领域结果到状态码的转换

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Serialize, de::DeserializeOwned};
use storefront_domain_core::{Entity, EntityId};
use tracing::info;

use crate::error::ApiError;
use crate::service::EntityService;

/// CRUD 路由构建器
///
/// ```ignore
/// let router = CrudRouter::new("/api/product", service)
///     .not_found_when_empty()
///     .into_router();
/// ```
pub struct CrudRouter<T: Entity> {
    base_path: String,
    service: Arc<dyn EntityService<T>>,
    not_found_when_empty: bool,
}

impl<T> CrudRouter<T>
where
    T: Entity + Serialize + DeserializeOwned,
{
    /// `base_path` 必须以 `/` 开头且不以 `/` 结尾，如 `/api/order`
    pub fn new(base_path: impl Into<String>, service: Arc<dyn EntityService<T>>) -> Self {
        Self {
            base_path: base_path.into(),
            service,
            not_found_when_empty: false,
        }
    }

    /// 列表为空时返回 404 而不是 200 + `[]`
    pub fn not_found_when_empty(mut self) -> Self {
        self.not_found_when_empty = true;
        self
    }

    pub fn into_router(self) -> Router {
        let state = CrudState {
            service: self.service,
            base_path: Arc::from(self.base_path.as_str()),
            not_found_when_empty: self.not_found_when_empty,
        };

        let collection = get(list::<T>).post(create::<T>);

        // 集合路由同时接受带尾斜杠的形式
        Router::new()
            .route(&self.base_path, collection.clone())
            .route(&format!("{}/", self.base_path), collection)
            .route(
                &format!("{}/{{id}}", self.base_path),
                get(get_one::<T>).put(update::<T>).delete(delete::<T>),
            )
            .with_state(state)
    }
}

struct CrudState<T: Entity> {
    service: Arc<dyn EntityService<T>>,
    base_path: Arc<str>,
    not_found_when_empty: bool,
}

impl<T: Entity> Clone for CrudState<T> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            base_path: self.base_path.clone(),
            not_found_when_empty: self.not_found_when_empty,
        }
    }
}

async fn list<T>(State(state): State<CrudState<T>>) -> Result<Json<Vec<T>>, ApiError>
where
    T: Entity + Serialize,
{
    let items = state.service.get_all().await?;
    if items.is_empty() && state.not_found_when_empty {
        return Err(ApiError::NotFound);
    }
    Ok(Json(items))
}

async fn get_one<T>(
    State(state): State<CrudState<T>>,
    Path(id): Path<EntityId>,
) -> Result<Json<T>, ApiError>
where
    T: Entity + Serialize,
{
    state
        .service
        .get(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn create<T>(
    State(state): State<CrudState<T>>,
    Json(entity): Json<T>,
) -> Result<Response, ApiError>
where
    T: Entity + Serialize + DeserializeOwned,
{
    let created = state.service.add(entity).await?;
    info!(kind = T::KIND, id = created.id(), "Entity created");

    let location = format!("{}/{}", state.base_path, created.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

async fn update<T>(
    State(state): State<CrudState<T>>,
    Path(id): Path<EntityId>,
    Json(entity): Json<T>,
) -> Result<StatusCode, ApiError>
where
    T: Entity + DeserializeOwned,
{
    if state.service.get(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }
    if entity.id() != id {
        return Err(ApiError::BadRequest);
    }
    // 预检查与更新之间实体可能已被删除
    if !state.service.update(entity).await? {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn delete<T>(
    State(state): State<CrudState<T>>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, ApiError>
where
    T: Entity,
{
    if state.service.get(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }
    if !state.service.delete(id).await? {
        return Err(ApiError::NotFound);
    }
    info!(kind = T::KIND, id, "Entity deleted");
    Ok(StatusCode::NO_CONTENT)
}
