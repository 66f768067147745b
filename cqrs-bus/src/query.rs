use crate::message::Message;

/// 应用层查询（Query）
///
/// 表达只读意图，不改变领域状态。
/// - 结果通常是读模型或投影（`Message::Output`）；
/// - 与 [`Command`](crate::command::Command) 相对，`Query` 应避免副作用；
/// - 只有实现了 `Query` 的消息才能交给 [`QueryBus`](crate::QueryBus)。
pub trait Query: Message {}
