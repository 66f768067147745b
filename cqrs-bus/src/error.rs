//! 总线错误定义
//!
//! - `BindingError`：消息类型的处理器绑定声明不合法（缺失或多于一个）；
//! - `ResolveError`：解析器无法给出处理器实例；
//! - `DispatchError`：总线自身产生的全部错误（以上两类 + 契约校验失败）；
//! - `AppError`：开箱即用的应用层错误，作为消息默认的 `Error` 类型。
//!
//! 处理器返回的错误不经过这里：总线原样透传，不包装、不记录、不重试。
use crate::message::MessageKind;

/// 处理器绑定错误（缺失/歧义同属一族，对外统一表述为“必须恰好一个”）
#[non_exhaustive]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    #[error("{kind} {message} must have exactly one handler binding, found none")]
    Missing {
        kind: MessageKind,
        message: &'static str,
    },

    #[error("{kind} {message} must have exactly one handler binding, found {found}")]
    Ambiguous {
        kind: MessageKind,
        message: &'static str,
        found: usize,
    },
}

impl BindingError {
    /// 出错的消息类型全名
    pub fn message_type(&self) -> &'static str {
        match self {
            Self::Missing { message, .. } | Self::Ambiguous { message, .. } => message,
        }
    }
}

/// 处理器解析错误
#[non_exhaustive]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("handler not registered: {0}")]
    NotRegistered(String),

    #[error("handler already registered: {0}")]
    AlreadyRegistered(String),

    #[error("handler factory failed: handler={handler}, reason={reason}")]
    Factory { handler: String, reason: String },
}

/// 总线分发错误
#[non_exhaustive]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("handler {handler} ({found}) must implement {required}")]
    InvalidHandler {
        handler: String,
        found: &'static str,
        required: &'static str,
    },
}

/// 应用层统一错误
///
/// 消息未指定 `error = ...` 时的默认错误类型。总线错误经 `From` 转入
/// `Dispatch` 变体；`Validation` 留给处理器表达输入校验失败。
/// 需要更丰富业务错误的消息应通过 `error = ...` 指定自己的错误类型。
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("dispatch: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("validation: {0}")]
    Validation(String),
}
