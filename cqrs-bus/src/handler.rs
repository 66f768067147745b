use crate::message::Message;
use std::sync::Arc;

/// 处理器契约
///
/// 每个命令/查询处理器只需实现一个操作：接收原始消息，返回结果或错误。
/// 错误类型即消息的 `Error`，总线会把它原样交还给调用方。
pub trait Handler<M>: Send + Sync
where
    M: Message,
{
    fn handle(&self, message: M) -> Result<M::Output, M::Error>;
}

impl<M, H> Handler<M> for Box<H>
where
    M: Message,
    H: Handler<M> + ?Sized,
{
    fn handle(&self, message: M) -> Result<M::Output, M::Error> {
        (**self).handle(message)
    }
}

impl<M, H> Handler<M> for Arc<H>
where
    M: Message,
    H: Handler<M> + ?Sized,
{
    fn handle(&self, message: M) -> Result<M::Output, M::Error> {
        (**self).handle(message)
    }
}
