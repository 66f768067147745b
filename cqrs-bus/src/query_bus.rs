use crate::{
    dispatch::dispatch, error::ResolveError, instance::HandlerInstance, message::MessageKind,
    query::Query, resolver::HandlerResolver,
};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// 查询总线（Query Bus）
///
/// - 根据查询类型上声明的唯一处理器绑定进行路由；
/// - 处理器实例由注入的解析器按标识给出，每次分发都重新解析；
/// - 除解析器外不持有任何状态，可 `clone` 后在多处共享。
#[derive(Clone)]
pub struct QueryBus {
    resolver: Arc<dyn HandlerResolver>,
}

impl QueryBus {
    pub fn new<R>(resolver: R) -> Self
    where
        R: HandlerResolver + 'static,
    {
        Self::from_arc(Arc::new(resolver))
    }

    /// 以闭包作为解析器
    pub fn from_fn<F>(resolve: F) -> Self
    where
        F: Fn(&str) -> Result<HandlerInstance, ResolveError> + Send + Sync + 'static,
    {
        Self::new(resolve)
    }

    /// 与其他总线共享同一个解析器
    pub fn from_arc(resolver: Arc<dyn HandlerResolver>) -> Self {
        Self { resolver }
    }

    /// 分发查询到其绑定的处理器，返回处理器的结果
    pub fn handle<Q: Query>(&self, query: Q) -> Result<Q::Output, Q::Error> {
        dispatch(self.resolver.as_ref(), MessageKind::Query, query)
    }
}

impl Debug for QueryBus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryBus").finish_non_exhaustive()
    }
}
