use crate::{
    command::Command, dispatch::dispatch, error::ResolveError, instance::HandlerInstance,
    message::MessageKind, resolver::HandlerResolver,
};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// 命令总线（Command Bus）
///
/// - 根据命令类型上声明的唯一处理器绑定进行路由；
/// - 处理器实例由注入的解析器按标识给出，每次分发都重新解析；
/// - 除解析器外不持有任何状态，可 `clone` 后在多处共享。
#[derive(Clone)]
pub struct CommandBus {
    resolver: Arc<dyn HandlerResolver>,
}

impl CommandBus {
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

    /// 分发命令到其绑定的处理器，返回处理器的结果
    pub fn handle<C: Command>(&self, command: C) -> Result<C::Output, C::Error> {
        dispatch(self.resolver.as_ref(), MessageKind::Command, command)
    }
}

impl Debug for CommandBus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandBus").finish_non_exhaustive()
    }
}
