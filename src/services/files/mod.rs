pub mod get;
pub mod register;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::files::requests::RegisterFileRequest;
use crate::storage::Storage;

pub struct FileService {
    storage: Option<Arc<dyn Storage>>,
}

impl FileService {
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

    /// 注册文件元数据，返回带 token 的记录
    pub async fn register_file(
        &self,
        request: &HttpRequest,
        req: RegisterFileRequest,
    ) -> ActixResult<HttpResponse> {
        register::register_file(self, request, req).await
    }

    /// 按 token 查询文件元数据
    pub async fn get_file(&self, request: &HttpRequest, token: &str) -> ActixResult<HttpResponse> {
        get::get_file(self, request, token).await
    }
}
