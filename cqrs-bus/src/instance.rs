use crate::handler::Handler;
use crate::message::Message;
use std::any::{Any, type_name};
use std::fmt::{Debug, Formatter};

/// 解析器返回的处理器实例（类型擦除）
///
/// - `new::<M, _>(h)`：携带 `Handler<M>` 能力的实例；
/// - `opaque(v)`：任意对象，例如容器里取出的、尚未确认能力的服务。
///
/// 总线在调用前通过 [`into_handler`](Self::into_handler) 校验实例确实能处理
/// 当前消息类型；同时保留具体类型名，便于报错时定位。
pub struct HandlerInstance {
    type_name: &'static str,
    inner: Box<dyn Any + Send>,
}

impl HandlerInstance {
    /// 以消息类型 `M` 的处理器能力包装 `handler`
    pub fn new<M, H>(handler: H) -> Self
    where
        M: Message,
        H: Handler<M> + 'static,
    {
        let boxed: Box<dyn Handler<M>> = Box::new(handler);
        Self {
            type_name: type_name::<H>(),
            inner: Box::new(boxed),
        }
    }

    /// 包装任意对象，不声明任何处理器能力
    pub fn opaque<T>(value: T) -> Self
    where
        T: Any + Send,
    {
        Self {
            type_name: type_name::<T>(),
            inner: Box::new(value),
        }
    }

    /// 被包装对象的具体类型名
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is_handler_for<M: Message>(&self) -> bool {
        self.inner.is::<Box<dyn Handler<M>>>()
    }

    /// 取出 `Handler<M>`；实例不具备该能力时原样退回
    pub fn into_handler<M: Message>(self) -> Result<Box<dyn Handler<M>>, Self> {
        let type_name = self.type_name;
        match self.inner.downcast::<Box<dyn Handler<M>>>() {
            Ok(handler) => Ok(*handler),
            Err(inner) => Err(Self { type_name, inner }),
        }
    }
}

impl Debug for HandlerInstance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerInstance")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
