use crate::error::ResolveError;
use crate::instance::HandlerInstance;

/// 处理器解析器：处理器标识 -> 处理器实例
///
/// 由嵌入方提供（DI 容器、工厂表等）。缓存、单例或每次新建都是解析器自己的策略，
/// 总线只把它当作一个纯函数调用。任意满足签名的闭包都是解析器。
pub trait HandlerResolver: Send + Sync {
    fn resolve(&self, handler: &str) -> Result<HandlerInstance, ResolveError>;
}

impl<F> HandlerResolver for F
where
    F: Fn(&str) -> Result<HandlerInstance, ResolveError> + Send + Sync,
{
    fn resolve(&self, handler: &str) -> Result<HandlerInstance, ResolveError> {
        self(handler)
    }
}
