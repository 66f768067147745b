use crate::{
    error::ResolveError, handler::Handler, instance::HandlerInstance, message::Message,
    resolver::HandlerResolver,
};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::any::type_name;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

type HandlerFactory = Arc<dyn Fn() -> HandlerInstance + Send + Sync>;

/// 基于内存的处理器注册表
/// - 启动时通过 `register` / `register_shared` 显式登记 标识 -> 工厂
/// - 作为 `HandlerResolver` 注入总线，按标识给出处理器实例
pub struct HandlerRegistry {
    // 标识 -> (所处理的消息类型名, 工厂)
    factories: DashMap<String, (&'static str, HandlerFactory)>,
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self {
            factories: DashMap::new(),
        }
    }
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册瞬态处理器：每次解析都会调用一次 `factory`
    pub fn register<M, H, F>(
        &self,
        handler: impl Into<String>,
        factory: F,
    ) -> Result<(), ResolveError>
    where
        M: Message,
        H: Handler<M> + 'static,
        F: Fn() -> H + Send + Sync + 'static,
    {
        let f: HandlerFactory = Arc::new(move || HandlerInstance::new::<M, _>(factory()));
        self.insert(handler.into(), type_name::<M>(), f)
    }

    /// 注册共享处理器：每次解析都返回同一个 `Arc`
    pub fn register_shared<M, H>(
        &self,
        handler: impl Into<String>,
        instance: Arc<H>,
    ) -> Result<(), ResolveError>
    where
        M: Message,
        H: Handler<M> + 'static,
    {
        let f: HandlerFactory =
            Arc::new(move || HandlerInstance::new::<M, _>(Arc::clone(&instance)));
        self.insert(handler.into(), type_name::<M>(), f)
    }

    /// 链式注册瞬态处理器，便于在启动代码里一次性装配
    pub fn with<M, H, F>(
        self,
        handler: impl Into<String>,
        factory: F,
    ) -> Result<Self, ResolveError>
    where
        M: Message,
        H: Handler<M> + 'static,
        F: Fn() -> H + Send + Sync + 'static,
    {
        self.register::<M, H, F>(handler, factory)?;
        Ok(self)
    }

    fn insert(
        &self,
        handler: String,
        message: &'static str,
        factory: HandlerFactory,
    ) -> Result<(), ResolveError> {
        match self.factories.entry(handler) {
            Entry::Occupied(e) => Err(ResolveError::AlreadyRegistered(e.key().clone())),
            Entry::Vacant(e) => {
                tracing::debug!(handler = %e.key(), message, "handler registered");
                e.insert((message, factory));
                Ok(())
            }
        }
    }

    pub fn contains(&self, handler: &str) -> bool {
        self.factories.contains_key(handler)
    }

    /// 已注册的处理器标识（已排序）
    pub fn registered_handlers(&self) -> Vec<String> {
        let mut handlers: Vec<String> = self.factories.iter().map(|e| e.key().clone()).collect();
        handlers.sort_unstable();
        handlers
    }
}

impl HandlerResolver for HandlerRegistry {
    fn resolve(&self, handler: &str) -> Result<HandlerInstance, ResolveError> {
        // 先克隆出工厂再调用，避免持有分片锁执行用户代码
        let Some((message, factory)) = self.factories.get(handler).map(|e| e.value().clone())
        else {
            tracing::trace!(handler, "handler not registered");
            return Err(ResolveError::NotRegistered(handler.to_string()));
        };

        tracing::trace!(handler, message, "resolving handler");
        Ok(factory())
    }
}

impl Debug for HandlerRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.registered_handlers())
            .finish()
    }
}
