//! 缓存层
//!
//! 通过插件注册表选择缓存后端，默认 Moka 内存缓存，可选 Redis。

pub mod object_cache;
pub mod register;
mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个缓存后端插件
///
/// 在程序启动时（main 之前）将构造函数注册进全局注册表。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $cache_type:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_ $cache_type:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        Box::pin(async {
                            let cache = <$cache_type>::new().map_err(|e| {
                                $crate::errors::BAPortalError::cache_connection(e)
                            })?;
                            Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                        })
                    }),
                );
            }
        }
    };
}
