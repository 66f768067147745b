//! CQRS 分发层（cqrs-bus）
//!
//! 提供两条结构相同的总线：
//! - [`CommandBus`]：分发写意图的命令；
//! - [`QueryBus`]：分发读意图的查询。
//!
//! 每个消息类型通过 `HANDLED_BY` 声明恰好一个处理器标识（通常由
//! `#[derive(Command)]` / `#[derive(Query)]` 配合 `#[handled_by(...)]` 生成）。
//! 分发时总线查出该标识，交给注入的 [`HandlerResolver`] 换取处理器实例，
//! 校验其确实实现了 [`Handler<M>`](Handler)，然后调用并原样返回结果。
//!
//! 典型用法：
//! 1. 定义消息类型与处理器，实现 `Handler<M>`；
//! 2. 在启动时把处理器登记到 [`HandlerRegistry`]（或提供自己的解析闭包）；
//! 3. 用同一个解析器构造 `CommandBus` / `QueryBus`，在调用处分发消息。
//!
pub mod binding;
pub mod command;
pub mod command_bus;
mod dispatch;
pub mod error;
pub mod handler;
pub mod instance;
pub mod message;
pub mod query;
pub mod query_bus;
pub mod registry;
pub mod resolver;

pub use command::Command;
pub use command_bus::CommandBus;
pub use error::{AppError, BindingError, DispatchError, ResolveError};
pub use handler::Handler;
pub use instance::HandlerInstance;
pub use message::{Message, MessageKind};
pub use query::Query;
pub use query_bus::QueryBus;
pub use registry::HandlerRegistry;
pub use resolver::HandlerResolver;

#[cfg(feature = "derive")]
pub use cqrs_macros::{Command, Query};

// 允许在本 crate 内部通过 ::cqrs_bus 进行自引用，
// 以便派生宏在本 crate 的单元测试中也能解析到 ::cqrs_bus 路径。
extern crate self as cqrs_bus;
