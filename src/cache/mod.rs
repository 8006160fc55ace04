//! 对象缓存层
//!
//! 通过运行时注册表选择后端：`moka`（进程内）或 `redis`。
//! 用于认证用户等热点对象的短 TTL 缓存。

pub mod object_cache;
pub mod register;

use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    /// 后端暂时不可用或取值失败
    ExistsButNoValue,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    /// ttl 以秒计，0 表示使用后端默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 注册缓存后端插件
///
/// 在模块内展开一个 ctor 构造函数，进程启动时把后端构造器
/// 挂进全局注册表。后端类型需要提供
/// `fn new() -> std::result::Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ty) => {
        #[ctor::ctor]
        fn _register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let backend = <$ty>::new()
                            .map_err($crate::errors::AcademiaError::cache_connection)?;
                        Ok(Box::new(backend) as Box<dyn $crate::cache::ObjectCache>)
                    })
                        as $crate::cache::register::BoxedObjectCacheFuture
                }),
            );
        }
    };
}
