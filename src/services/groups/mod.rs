pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::groups::requests::CreateGroupRequest;
use crate::storage::Storage;

pub struct GroupService {
    storage: Option<Arc<dyn Storage>>,
}

impl GroupService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 创建分组
    pub async fn create_group(
        &self,
        request: &HttpRequest,
        req: CreateGroupRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_group(self, request, req).await
    }

    /// 列出分组
    pub async fn list_groups(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_groups(self, request).await
    }
}
