use crate::{
    binding::resolve_binding,
    error::DispatchError,
    handler::Handler,
    message::{Message, MessageKind},
    resolver::HandlerResolver,
};
use std::any::type_name;

/// 两条总线共用的分发流程：查绑定 -> 解析实例 -> 校验契约 -> 调用
///
/// 总线自身的失败经 `From<DispatchError>` 转为 `M::Error`；
/// 处理器返回的结果（包括错误）原样返回。
pub(crate) fn dispatch<M: Message>(
    resolver: &dyn HandlerResolver,
    kind: MessageKind,
    message: M,
) -> Result<M::Output, M::Error> {
    let handler = resolve_binding::<M>(kind).map_err(DispatchError::from)?;

    tracing::debug!(%kind, message = M::NAME, handler, "dispatching");

    let instance = resolver.resolve(handler).map_err(DispatchError::from)?;
    let target = instance
        .into_handler::<M>()
        .map_err(|instance| DispatchError::InvalidHandler {
            handler: handler.to_string(),
            found: instance.type_name(),
            required: type_name::<dyn Handler<M>>(),
        })?;

    target.handle(message)
}
