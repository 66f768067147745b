use crate::error::DispatchError;
use std::fmt::{Display, Formatter};

/// 可分发的消息（命令或查询）
///
/// 消息是调用方定义的不可变值对象；路由信息挂在**类型**上而非实例上：
/// - `NAME`：稳定的短名称，用于日志与追踪；
/// - `HANDLED_BY`：声明的处理器标识，按声明顺序排列。分发时要求恰好一个，
///   缺失或多于一个都会在分发时（而非声明时）报错；
/// - `Output`：处理器成功时返回给调用方的值；
/// - `Error`：调用方收到的错误类型。处理器的错误原样透传，
///   总线自身的错误通过 `From<DispatchError>` 转入。
///
/// 通常由 `#[derive(Command)]` / `#[derive(Query)]` 生成，也可手写实现。
pub trait Message: Send + 'static {
    /// 消息的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 声明的处理器标识；默认没有任何绑定
    const HANDLED_BY: &'static [&'static str] = &[];

    type Output: Send + 'static;

    type Error: From<DispatchError> + Send + 'static;
}

/// 消息意图：写（命令）或读（查询）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Command,
    Query,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Command => "Command",
            Self::Query => "Query",
        }
    }
}

impl Display for MessageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
