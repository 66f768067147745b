use crate::message::Message;

/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求，通常会修改领域状态。
/// - 结果通常为 `()`（确认），但允许返回任意值；
/// - 与 [`Query`](crate::query::Query) 相对，`Command` 应避免读写混用；
/// - 建议保持语义化的“动宾结构”命名，如 `CreateUser`、`CloseOrder`。
///
/// 只有实现了 `Command` 的消息才能交给 [`CommandBus`](crate::CommandBus)。
pub trait Command: Message {}
